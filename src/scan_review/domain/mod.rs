pub mod annotated_text;
pub mod line_diff;
pub mod question_session;
pub mod scan_result;
pub mod severity;

pub use annotated_text::{AnnotatedText, Span};
pub use line_diff::{DiffLine, LineDiff};
pub use question_session::{
    AnswerOutcome, QuestionSession, SessionError, SessionStatus, SubmissionTicket,
    CONNECTIVITY_FAILURE, NO_RELEVANT_INFORMATION,
};
pub use scan_result::{
    LlmResults, PatternMatch, PatternResults, Recommendation, ScanResult, Vulnerability,
};
pub use severity::SeverityLevel;
