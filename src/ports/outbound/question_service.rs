use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Reply of the question-answering backend
///
/// Either field may be missing; a reply with neither is a successful
/// answer with zero fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuestionReply {
    pub chunks: Option<Vec<String>>,
    pub error: Option<String>,
}

/// QuestionService port for the retrieval-augmented Q&A backend
#[async_trait]
pub trait QuestionService: Send + Sync {
    /// Sends one question
    ///
    /// # Errors
    /// Returns an error only for transport failures and unreadable replies.
    /// Backend-reported errors come back as `Ok` with `error` set.
    async fn ask(&self, query: &str) -> Result<QuestionReply>;
}
