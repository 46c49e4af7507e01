use crate::ports::outbound::{QuestionReply, QuestionService};
use crate::scan_review::domain::{AnswerOutcome, QuestionSession, SessionError, SessionStatus};
use crate::shared::Result;
use std::future::Future;

/// QuestionSessionController - drives a `QuestionSession` against the Q&A backend
///
/// At most one question is in flight. A submission races the backend reply
/// against a caller-supplied cancel signal; when the signal wins, the request
/// future is dropped and the session returns to `Idle`, so a reply arriving
/// afterwards can no longer reach the session.
pub struct QuestionSessionController<Q: QuestionService> {
    service: Q,
    session: QuestionSession,
}

impl<Q: QuestionService> QuestionSessionController<Q> {
    pub fn new(service: Q) -> Self {
        Self {
            service,
            session: QuestionSession::new(),
        }
    }

    pub fn session(&self) -> &QuestionSession {
        &self.session
    }

    /// Submits `question` and waits for the answer or for `cancel` to complete
    ///
    /// # Returns
    /// The status the session ended in: `Answered` or `Failed` when the
    /// backend replied, `Idle` when cancelled
    ///
    /// # Errors
    /// Returns a `SessionError` when the session refuses the submission
    /// (blank question, or one already in flight); nothing is sent then.
    pub async fn submit<C>(
        &mut self,
        question: &str,
        cancel: C,
    ) -> std::result::Result<SessionStatus, SessionError>
    where
        C: Future<Output = ()>,
    {
        let ticket = self.session.submit(question)?;
        tracing::debug!(query = ticket.query(), "question submitted");

        let outcome = tokio::select! {
            reply = self.service.ask(ticket.query()) => Some(Self::classify(reply)),
            _ = cancel => None,
        };

        match outcome {
            Some(outcome) => {
                self.session.resolve(&ticket, outcome);
            }
            None => {
                tracing::debug!("question cancelled before the reply arrived");
                self.session.cancel();
            }
        }

        Ok(self.session.status())
    }

    /// Closes the dialog and clears the session
    pub fn close(&mut self) {
        self.session.cancel();
    }

    /// Maps a backend reply to a session outcome
    ///
    /// A reply carrying `error` is an error even if it also carries chunks.
    pub fn classify(reply: Result<QuestionReply>) -> AnswerOutcome {
        match reply {
            Ok(QuestionReply {
                error: Some(message),
                ..
            }) => AnswerOutcome::BackendError(message),
            Ok(QuestionReply { chunks, .. }) => {
                AnswerOutcome::Fragments(chunks.unwrap_or_default())
            }
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "question request failed");
                AnswerOutcome::TransportFailure
            }
        }
    }
}
