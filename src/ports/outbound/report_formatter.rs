use crate::application::read_models::AnalysisReadModel;
use crate::scan_review::domain::QuestionSession;
use crate::shared::Result;

/// Which parts of the analysis a report contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    /// Summary, findings, recommendations, pattern matches, highlighted source and diff
    Full,
    /// Only the remediation diff
    DiffOnly,
}

/// ReportFormatter port for rendering analysis results and answers
pub trait ReportFormatter {
    /// Formats the analysis read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_analysis(&self, model: &AnalysisReadModel, scope: ReportScope) -> Result<String>;

    /// Formats the current state of a question session
    fn format_answer(&self, session: &QuestionSession) -> Result<String>;
}
