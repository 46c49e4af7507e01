use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vulnscope::prelude::*;
use vulnscope::shared::error::ScanError;

/// Mock QuestionService replaying queued replies in order
///
/// When the queue runs dry every further question fails as unreachable.
#[derive(Clone, Default)]
pub struct MockQuestionService {
    replies: Arc<Mutex<VecDeque<QuestionReply>>>,
    delay: Option<Duration>,
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl MockQuestionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunks(self, chunks: &[&str]) -> Self {
        self.with_reply(QuestionReply {
            chunks: Some(chunks.iter().map(|c| c.to_string()).collect()),
            error: None,
        })
    }

    pub fn with_error(self, error: &str) -> Self {
        self.with_reply(QuestionReply {
            chunks: None,
            error: Some(error.to_string()),
        })
    }

    pub fn with_reply(self, reply: QuestionReply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Every reply arrives only after `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionService for MockQuestionService {
    async fn ask(&self, query: &str) -> Result<QuestionReply> {
        self.queries.lock().unwrap().push(query.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.replies.lock().unwrap().pop_front();
        reply.ok_or_else(|| {
            ScanError::ServerUnreachable {
                url: "http://mock-scanner/rag_explanation".to_string(),
                details: "connection refused".to_string(),
            }
            .into()
        })
    }
}
