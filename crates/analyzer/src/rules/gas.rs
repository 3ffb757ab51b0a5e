//! Gas-efficiency rule catalogue. Each rule carries a free-text saving
//! estimate alongside the remediation.

use regex::Regex;
use std::sync::LazyLock;

pub struct GasRule {
    pub pattern: Regex,
    pub kind: &'static str,
    pub description: &'static str,
    pub potential_saving: &'static str,
    pub recommendation: &'static str,
}

pub static GAS_RULES: LazyLock<Vec<GasRule>> = LazyLock::new(|| {
    vec![
        GasRule {
            pattern: Regex::new(r"\+\+i").expect("gas pattern must compile"),
            kind: "Increment Operation",
            description: "Pre-increment more efficient than post-increment",
            potential_saving: "~5 gas per operation",
            recommendation: "Use ++i instead of i++",
        },
        GasRule {
            pattern: Regex::new(r#"require\(.*,\s*".*"\)"#).expect("gas pattern must compile"),
            kind: "Error Message",
            description: "Long error messages increase deployment cost",
            potential_saving: "Variable based on message length",
            recommendation: "Use custom error instead of error message",
        },
    ]
});
