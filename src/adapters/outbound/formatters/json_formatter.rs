use crate::application::read_models::AnalysisReadModel;
use crate::ports::outbound::{ReportFormatter, ReportScope};
use crate::scan_review::domain::QuestionSession;
use crate::shared::Result;
use anyhow::Context;
use serde_json::json;

/// JsonFormatter adapter emitting the read models as pretty-printed JSON
///
/// Highlighted source is serialized as its span list and the remediation
/// diff as its line list, so consumers never need to parse markers.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_analysis(&self, model: &AnalysisReadModel, scope: ReportScope) -> Result<String> {
        let value = match scope {
            ReportScope::Full => serde_json::to_value(model)?,
            ReportScope::DiffOnly => json!({ "remediation_diff": model.remediation_diff }),
        };
        serde_json::to_string_pretty(&value).context("Failed to serialize analysis report")
    }

    fn format_answer(&self, session: &QuestionSession) -> Result<String> {
        serde_json::to_string_pretty(session).context("Failed to serialize answer")
    }
}
