//! Optimization rule catalogue: restructuring suggestions with no severity
//! attached.

use regex::Regex;
use std::sync::LazyLock;

pub struct OptimizationRule {
    pub pattern: Regex,
    pub kind: &'static str,
    pub description: &'static str,
    pub suggestion: &'static str,
}

pub static OPTIMIZATION_RULES: LazyLock<Vec<OptimizationRule>> = LazyLock::new(|| {
    vec![
        OptimizationRule {
            pattern: Regex::new(r"uint\s+i\s*=").expect("optimization pattern must compile"),
            kind: "Loop Optimization",
            description: "Loop counter could be unchecked",
            suggestion: "Use unchecked blocks for loop counters to save gas",
        },
        OptimizationRule {
            pattern: Regex::new(r"string\s+public").expect("optimization pattern must compile"),
            kind: "Storage Optimization",
            description: "Public string uses more storage",
            suggestion: "Consider using bytes32 for fixed-length strings",
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_counter_declaration_matches() {
        let rule = &OPTIMIZATION_RULES[0];
        assert!(rule.pattern.is_match("for (uint i = 0; i < n; i++) {"));
        assert!(rule.pattern.is_match("uint i = 0;"));
        assert!(!rule.pattern.is_match("uint index = 0;"));
    }

    #[test]
    fn public_string_matches() {
        let rule = &OPTIMIZATION_RULES[1];
        assert!(rule.pattern.is_match("string public name;"));
        assert!(!rule.pattern.is_match("string internal name;"));
    }
}
