//! solsift analyzer - heuristic rule engine for Solidity source
//!
//! A deterministic line scanner that flags security, optimization,
//! gas-efficiency, and code-quality issues through pattern matching. No AST,
//! no data-flow analysis: every rule is a per-line predicate from a fixed,
//! process-wide catalogue, plus a two-state pass that flags overlong
//! functions. The engine never fails on any input; text it cannot make sense
//! of simply produces fewer findings.

pub mod core;
pub mod engine;
pub mod quality;
pub mod rules;

pub use core::{
    AnalysisReport, GasFinding, OptimizationFinding, QualityFinding, SecurityFinding, Severity,
    SeverityCount,
};
pub use engine::RuleEngine;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_default_is_usable() {
        let report = RuleEngine::default().analyze("pragma solidity ^0.8.0;");
        assert!(report.is_empty());
    }
}
