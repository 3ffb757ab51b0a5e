use crate::core::{GasFinding, OptimizationFinding, QualityFinding, SecurityFinding, Severity};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Aggregate result of one scan.
///
/// The four lists are ordered by discovery: ascending line number, and within
/// one line, catalogue declaration order. Nothing reorders, dedupes, or
/// caches a report after the engine returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub security: Vec<SecurityFinding>,
    pub optimization: Vec<OptimizationFinding>,
    pub gas_efficiency: Vec<GasFinding>,
    pub code_quality: Vec<QualityFinding>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeverityCount {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl AnalysisReport {
    pub fn is_empty(&self) -> bool {
        self.security.is_empty()
            && self.optimization.is_empty()
            && self.gas_efficiency.is_empty()
            && self.code_quality.is_empty()
    }

    pub fn total_findings(&self) -> usize {
        self.security.len()
            + self.optimization.len()
            + self.gas_efficiency.len()
            + self.code_quality.len()
    }

    /// Severity tally over the security list; the other categories carry no
    /// severity.
    pub fn count_by_severity(&self) -> SeverityCount {
        let mut count = SeverityCount::default();
        for finding in &self.security {
            match finding.severity {
                Severity::High => count.high += 1,
                Severity::Medium => count.medium += 1,
                Severity::Low => count.low += 1,
            }
        }
        count
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_markdown(&self) -> String {
        let mut md = String::from("# Analysis Report\n\n");

        let count = self.count_by_severity();
        md.push_str("## Summary\n\n");
        md.push_str(&format!("- Security (High): {}\n", count.high));
        md.push_str(&format!("- Security (Medium): {}\n", count.medium));
        md.push_str(&format!("- Security (Low): {}\n", count.low));
        md.push_str(&format!("- Optimization: {}\n", self.optimization.len()));
        md.push_str(&format!("- Gas efficiency: {}\n", self.gas_efficiency.len()));
        md.push_str(&format!("- Code quality: {}\n\n", self.code_quality.len()));

        if !self.security.is_empty() {
            md.push_str("## Security\n\n");
            for finding in &self.security {
                md.push_str(&format!(
                    "### {} {}: {}\n\n",
                    finding.severity.emoji(),
                    finding.severity,
                    finding.kind
                ));
                md.push_str(&format!("**Line:** {}\n\n", finding.line));
                md.push_str(&format!("{}\n\n", finding.description));
                md.push_str(&format!("**Recommendation:** {}\n\n", finding.recommendation));
            }
        }

        if !self.optimization.is_empty() {
            md.push_str("## Optimization\n\n");
            for finding in &self.optimization {
                md.push_str(&format!("### {}\n\n", finding.kind));
                md.push_str(&format!("**Line:** {}\n\n", finding.line));
                md.push_str(&format!("{}\n\n", finding.description));
                md.push_str(&format!("**Suggestion:** {}\n\n", finding.suggestion));
            }
        }

        if !self.gas_efficiency.is_empty() {
            md.push_str("## Gas Efficiency\n\n");
            for finding in &self.gas_efficiency {
                md.push_str(&format!("### {}\n\n", finding.kind));
                md.push_str(&format!("**Line:** {}\n\n", finding.line));
                md.push_str(&format!("{}\n\n", finding.description));
                md.push_str(&format!(
                    "**Potential saving:** {}\n\n",
                    finding.potential_saving
                ));
                md.push_str(&format!("**Recommendation:** {}\n\n", finding.recommendation));
            }
        }

        if !self.code_quality.is_empty() {
            md.push_str("## Code Quality\n\n");
            for finding in &self.code_quality {
                md.push_str(&format!("### {}\n\n", finding.kind));
                md.push_str(&format!("**Line:** {}\n\n", finding.line));
                md.push_str(&format!("{}\n\n", finding.description));
                md.push_str(&format!("**Recommendation:** {}\n\n", finding.recommendation));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_has_no_findings() {
        let report = AnalysisReport::default();
        assert!(report.is_empty());
        assert_eq!(report.total_findings(), 0);
        assert_eq!(report.count_by_severity(), SeverityCount::default());
    }

    #[test]
    fn json_uses_compatibility_keys() {
        let report = AnalysisReport::default();
        let json = report.to_json().unwrap();

        assert!(json.contains("\"security\""));
        assert!(json.contains("\"optimization\""));
        assert!(json.contains("\"gasEfficiency\""));
        assert!(json.contains("\"codeQuality\""));
    }

    #[test]
    fn markdown_includes_summary_counts() {
        let mut report = AnalysisReport::default();
        report.security.push(SecurityFinding::new(
            Severity::High,
            "Authentication",
            "Usage of tx.origin for authentication",
            4,
            "Use msg.sender instead of tx.origin for authentication",
        ));

        let md = report.to_markdown();
        assert!(md.contains("- Security (High): 1"));
        assert!(md.contains("Authentication"));
        assert!(md.contains("**Line:** 4"));
    }
}
