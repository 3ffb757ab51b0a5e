//! The rule engine: one pass over the line sequence for the three
//! pattern-based categories, one independent pass for code quality.

use crate::core::{
    AnalysisReport, GasFinding, OptimizationFinding, QualityFinding, SecurityFinding,
};
use crate::quality;
use crate::rules::{GAS_RULES, OPTIMIZATION_RULES, SECURITY_RULES};

/// Deterministic, side-effect-free scanner over contract source text.
///
/// The engine holds no state of its own; the rule catalogues are static and
/// read-only, so one instance can be shared freely across threads, and two
/// scans of the same input produce identical reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Scans `source` and returns the four-category report.
    ///
    /// Infallible by contract: any string, including empty or non-Solidity
    /// text, yields a well-formed (possibly empty) report. Lines are split on
    /// `'\n'` and numbered from 1; every rule is tested against every line
    /// independently, so one line can produce several findings.
    pub fn analyze(&self, source: &str) -> AnalysisReport {
        let mut report = AnalysisReport::default();

        for (index, line) in source.split('\n').enumerate() {
            let line_number = index + 1;

            for rule in SECURITY_RULES.iter() {
                if rule.pattern.is_match(line) {
                    report.security.push(SecurityFinding::new(
                        rule.severity,
                        rule.kind,
                        rule.description,
                        line_number,
                        rule.recommendation,
                    ));
                }
            }

            for rule in OPTIMIZATION_RULES.iter() {
                if rule.pattern.is_match(line) {
                    report.optimization.push(OptimizationFinding::new(
                        rule.kind,
                        rule.description,
                        line_number,
                        rule.suggestion,
                    ));
                }
            }

            for rule in GAS_RULES.iter() {
                if rule.pattern.is_match(line) {
                    report.gas_efficiency.push(GasFinding::new(
                        rule.kind,
                        rule.description,
                        line_number,
                        rule.potential_saving,
                        rule.recommendation,
                    ));
                }
            }
        }

        report.code_quality = self.analyze_code_quality(source);

        report
    }

    /// The code-quality pass on its own; see [`crate::quality`] for the
    /// state machine and its documented brace-matching limitation.
    pub fn analyze_code_quality(&self, source: &str) -> Vec<QualityFinding> {
        quality::function_length_findings(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn empty_input_yields_empty_report() {
        let report = RuleEngine::new().analyze("");
        assert!(report.is_empty());
    }

    #[test]
    fn tx_origin_is_a_single_high_authentication_finding() {
        let report = RuleEngine::new().analyze("tx.origin");

        assert_eq!(report.security.len(), 1);
        assert_eq!(report.security[0].kind, "Authentication");
        assert_eq!(report.security[0].severity, Severity::High);
        assert_eq!(report.security[0].line, 1);
        assert!(report.optimization.is_empty());
        assert!(report.gas_efficiency.is_empty());
    }

    #[test]
    fn one_line_can_match_several_rules_in_catalogue_order() {
        let report = RuleEngine::new().analyze("require(tx.origin == owner, \"not owner\");");

        assert_eq!(report.security.len(), 1);
        assert_eq!(report.security[0].kind, "Authentication");
        assert_eq!(report.gas_efficiency.len(), 1);
        assert_eq!(report.gas_efficiency[0].kind, "Error Message");
    }

    #[test]
    fn findings_are_ordered_by_line() {
        let source = "selfdestruct(owner);\nuint256 ok;\ntx.origin";
        let report = RuleEngine::new().analyze(source);

        let lines: Vec<_> = report.security.iter().map(|f| f.line).collect();
        assert_eq!(lines, [1, 3]);
    }

    #[test]
    fn analyze_is_idempotent() {
        let source = r#"
contract Vault {
    string public name;
    function withdraw(uint amount) public {
        require(amount > 0, "zero amount");
        msg.sender.transfer(amount);
    }
}
"#;
        let engine = RuleEngine::new();
        assert_eq!(engine.analyze(source), engine.analyze(source));
    }
}
