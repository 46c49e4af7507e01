mod match_highlighter;
mod remediation_differ;

pub use match_highlighter::MatchHighlighter;
pub use remediation_differ::RemediationDiffer;
