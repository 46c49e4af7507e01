use serde::Serialize;
use thiserror::Error;

/// Message shown when the backend answered but had nothing relevant
pub const NO_RELEVANT_INFORMATION: &str = "No relevant information found.";

/// Message shown when the question never reached the backend, or the reply was unreadable
pub const CONNECTIVITY_FAILURE: &str =
    "Failed to reach the question service. Please check that the backend server is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Idle,
    Submitting,
    Answered,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("A question is already being answered. Wait for it to finish or cancel it first.")]
    AlreadySubmitting,

    #[error("Question must not be empty.")]
    EmptyQuestion,
}

/// How a submitted question was resolved by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Well-formed reply; the fragments may still be empty
    Fragments(Vec<String>),
    /// Well-formed reply carrying an error field
    BackendError(String),
    /// No usable reply reached the client
    TransportFailure,
}

/// Handle for one submission, needed to resolve it
///
/// The generation ties a reply to the submission that caused it. Once the
/// session is cancelled or resubmitted, older tickets no longer match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
    query: String,
}

impl SubmissionTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// QuestionSession entity - state of one question dialog
///
/// States: `Idle → Submitting → {Answered, Failed} → Idle`.
/// `cancel` returns to `Idle` from anywhere and invalidates the in-flight ticket.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionSession {
    question_text: String,
    status: SessionStatus,
    answer_fragments: Vec<String>,
    error_message: Option<String>,
    #[serde(skip)]
    generation: u64,
}

impl Default for QuestionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionSession {
    pub fn new() -> Self {
        Self {
            question_text: String::new(),
            status: SessionStatus::Idle,
            answer_fragments: Vec::new(),
            error_message: None,
            generation: 0,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn answer_fragments(&self) -> &[String] {
        &self.answer_fragments
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SessionStatus::Submitting
    }

    /// Starts a submission and returns the ticket to resolve it with
    ///
    /// A finished session (`Answered`/`Failed`) is reset before the new
    /// submission starts. The previous question, answer and error are dropped.
    ///
    /// # Errors
    /// - `AlreadySubmitting` while a submission is in flight
    /// - `EmptyQuestion` for blank input; the session is left untouched
    pub fn submit(&mut self, question: &str) -> Result<SubmissionTicket, SessionError> {
        if self.is_submitting() {
            return Err(SessionError::AlreadySubmitting);
        }
        let question = question.trim();
        if question.is_empty() {
            return Err(SessionError::EmptyQuestion);
        }

        self.reset();
        self.question_text = question.to_string();
        self.status = SessionStatus::Submitting;

        Ok(SubmissionTicket {
            generation: self.generation,
            query: self.question_text.clone(),
        })
    }

    /// Applies a backend outcome to the submission identified by `ticket`
    ///
    /// Returns `false` and leaves the session unchanged when the ticket is
    /// stale (the session was cancelled or resubmitted in the meantime).
    pub fn resolve(&mut self, ticket: &SubmissionTicket, outcome: AnswerOutcome) -> bool {
        if !self.is_submitting() || ticket.generation != self.generation {
            return false;
        }

        match outcome {
            AnswerOutcome::Fragments(fragments) if !fragments.is_empty() => {
                self.status = SessionStatus::Answered;
                self.answer_fragments = fragments;
            }
            AnswerOutcome::Fragments(_) => {
                self.fail(NO_RELEVANT_INFORMATION.to_string());
            }
            AnswerOutcome::BackendError(message) => {
                self.fail(message);
            }
            AnswerOutcome::TransportFailure => {
                self.fail(CONNECTIVITY_FAILURE.to_string());
            }
        }
        true
    }

    /// Closes the dialog: back to `Idle` with every field cleared
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn fail(&mut self, message: String) {
        self.status = SessionStatus::Failed;
        self.error_message = Some(message);
    }

    fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.question_text.clear();
        self.status = SessionStatus::Idle;
        self.answer_fragments.clear();
        self.error_message = None;
    }
}
