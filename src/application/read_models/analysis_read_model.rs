//! Analysis read model for query operations
//!
//! Aggregates everything the analysis report shows, in render order.

use super::finding_views::{PatternGroupView, RecommendationView, VulnerabilityView};
use crate::scan_review::domain::{AnnotatedText, LineDiff, SeverityLevel};
use serde::Serialize;

/// Main read model for one scan result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReadModel {
    pub file_path: Option<String>,
    /// Brief summary from the backend
    pub summary: Option<String>,
    pub llm: LlmAnalysisView,
    pub vulnerabilities: Vec<VulnerabilityView>,
    pub recommendations: Vec<RecommendationView>,
    pub pattern_groups: Vec<PatternGroupView>,
    /// Original source with pattern matches highlighted
    pub highlighted_source: Option<AnnotatedText>,
    /// Remediated source with changed lines flagged
    pub remediation_diff: Option<LineDiff>,
}

/// View representation of the LLM analysis metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LlmAnalysisView {
    pub risk_score: Option<f64>,
    pub analysis_confidence: Option<f64>,
    pub summary: Option<String>,
    pub error: Option<String>,
}

impl AnalysisReadModel {
    pub fn has_vulnerabilities(&self) -> bool {
        !self.vulnerabilities.is_empty()
    }

    pub fn pattern_match_count(&self) -> usize {
        self.pattern_groups.iter().map(|g| g.matches.len()).sum()
    }

    /// Number of findings per severity level, most severe first, zero counts omitted
    pub fn severity_counts(&self) -> Vec<(SeverityLevel, usize)> {
        [
            SeverityLevel::Critical,
            SeverityLevel::High,
            SeverityLevel::Medium,
            SeverityLevel::Low,
            SeverityLevel::Unknown,
        ]
        .into_iter()
        .map(|level| {
            let count = self
                .vulnerabilities
                .iter()
                .filter(|v| v.severity == level)
                .count();
            (level, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
    }
}
