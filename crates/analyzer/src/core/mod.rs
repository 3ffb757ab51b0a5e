//! Core result types for the rule engine.
//!
//! Findings are tagged by category rather than carrying optional fields:
//! security findings are the only ones with a severity, gas findings the only
//! ones with a saving estimate. The report preserves discovery order exactly,
//! which downstream consumers and the test suite rely on.

pub mod finding;
pub mod report;
pub mod severity;

pub use finding::{GasFinding, OptimizationFinding, QualityFinding, SecurityFinding};
pub use report::{AnalysisReport, SeverityCount};
pub use severity::Severity;
