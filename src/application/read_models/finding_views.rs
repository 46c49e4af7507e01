//! Finding view structs for the analysis read model
//!
//! Flattened, display-oriented copies of the scan result's findings.

use crate::scan_review::domain::SeverityLevel;
use serde::Serialize;

/// View representation of an LLM vulnerability finding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VulnerabilityView {
    pub vulnerability_type: String,
    pub location: String,
    /// Severity label exactly as reported by the backend
    pub severity_label: String,
    /// Display classification of `severity_label`
    pub severity: SeverityLevel,
    pub description: String,
}

/// View representation of all matches of one pattern type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternGroupView {
    pub pattern_type: String,
    pub matches: Vec<PatternMatchView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternMatchView {
    pub line: Option<u64>,
    pub matched: String,
    pub pattern: String,
    pub context: String,
}

/// View representation of remediation advice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    pub vulnerability_type: String,
    pub recommendation: String,
    pub code_example: String,
    pub resources: Vec<String>,
}
