//! Per-category finding types.
//!
//! Each of the four report categories carries a different field set: only
//! security findings have a severity, and only gas findings estimate a
//! saving. One struct per category keeps those differences in the type
//! system instead of behind `Option`s that are populated "only sometimes".

use crate::core::Severity;
use serde::{Deserialize, Serialize};

/// A security issue tied to one source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityFinding {
    pub severity: Severity,
    pub kind: String,
    pub description: String,
    pub line: usize,
    pub recommendation: String,
}

/// A suggestion that the code could be restructured for efficiency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationFinding {
    pub kind: String,
    pub description: String,
    pub line: usize,
    pub suggestion: String,
}

/// A pattern known to cost more gas than an equivalent alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasFinding {
    pub kind: String,
    pub description: String,
    pub line: usize,
    pub potential_saving: String,
    pub recommendation: String,
}

/// A maintainability issue, currently only function length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityFinding {
    pub kind: String,
    pub description: String,
    pub line: usize,
    pub recommendation: String,
}

impl SecurityFinding {
    pub fn new(
        severity: Severity,
        kind: &str,
        description: &str,
        line: usize,
        recommendation: &str,
    ) -> Self {
        Self {
            severity,
            kind: kind.to_string(),
            description: description.to_string(),
            line,
            recommendation: recommendation.to_string(),
        }
    }
}

impl OptimizationFinding {
    pub fn new(kind: &str, description: &str, line: usize, suggestion: &str) -> Self {
        Self {
            kind: kind.to_string(),
            description: description.to_string(),
            line,
            suggestion: suggestion.to_string(),
        }
    }
}

impl GasFinding {
    pub fn new(
        kind: &str,
        description: &str,
        line: usize,
        potential_saving: &str,
        recommendation: &str,
    ) -> Self {
        Self {
            kind: kind.to_string(),
            description: description.to_string(),
            line,
            potential_saving: potential_saving.to_string(),
            recommendation: recommendation.to_string(),
        }
    }
}

impl QualityFinding {
    pub fn new(kind: &str, description: &str, line: usize, recommendation: &str) -> Self {
        Self {
            kind: kind.to_string(),
            description: description.to_string(),
            line,
            recommendation: recommendation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gas_finding_serializes_saving_in_camel_case() {
        let finding = GasFinding::new(
            "Increment Operation",
            "Pre-increment more efficient than post-increment",
            3,
            "~5 gas per operation",
            "Use ++i instead of i++",
        );

        let json = serde_json::to_string(&finding).unwrap();
        assert!(json.contains("\"potentialSaving\":\"~5 gas per operation\""));
        assert!(!json.contains("potential_saving"));
    }
}
