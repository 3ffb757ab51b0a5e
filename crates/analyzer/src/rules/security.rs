//! Security rule catalogue.
//!
//! Line-level pattern predicates only: a rule fires when its regex matches
//! anywhere in a single line of source. There is no tokenization and no
//! awareness of comments or string literals, so a `transfer(` inside a
//! comment still matches. That trade-off keeps the scan infallible and fast;
//! precision is the job of heavier tooling.

use crate::core::Severity;
use regex::Regex;
use std::sync::LazyLock;

pub struct SecurityRule {
    pub pattern: Regex,
    pub kind: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub recommendation: &'static str,
}

/// Catalogue declaration order is observable: findings on the same line are
/// reported in this order.
pub static SECURITY_RULES: LazyLock<Vec<SecurityRule>> = LazyLock::new(|| {
    vec![
        SecurityRule {
            pattern: Regex::new(r"(\s|^)transfer\s*\(").expect("security pattern must compile"),
            kind: "Reentrancy",
            severity: Severity::High,
            description: "Potential reentrancy vulnerability detected",
            recommendation: "Consider using ReentrancyGuard or checks-effects-interactions pattern",
        },
        SecurityRule {
            pattern: Regex::new(r"tx\.origin").expect("security pattern must compile"),
            kind: "Authentication",
            severity: Severity::High,
            description: "Usage of tx.origin for authentication",
            recommendation: "Use msg.sender instead of tx.origin for authentication",
        },
        SecurityRule {
            pattern: Regex::new(r"assembly\s*\{").expect("security pattern must compile"),
            kind: "Inline Assembly",
            severity: Severity::Medium,
            description: "Usage of inline assembly",
            recommendation: "Ensure inline assembly is necessary and well-audited",
        },
        SecurityRule {
            // Both the current and the pre-0.5.0 spelling.
            pattern: Regex::new(r"selfdestruct|suicide").expect("security pattern must compile"),
            kind: "Destructible",
            severity: Severity::High,
            description: "Contract can be destroyed",
            recommendation: "Ensure selfdestruct is properly protected",
        },
    ]
});
