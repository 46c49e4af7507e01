//! Test doubles shared by the use case tests

use crate::ports::outbound::{
    ProgressReporter, QuestionReply, QuestionService, ScanService, SourceFile, SourceFileReader,
    StateRepository,
};
use crate::shared::Result;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub struct StubSourceFileReader {
    pub content: Option<String>,
}

impl StubSourceFileReader {
    pub fn with_content(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl SourceFileReader for StubSourceFileReader {
    fn read_source(&self, path: &Path) -> Result<SourceFile> {
        match &self.content {
            Some(content) => Ok(SourceFile::new(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                content.as_bytes().to_vec(),
            )),
            None => anyhow::bail!("Source file not found: {}", path.display()),
        }
    }
}

/// Scanner double; `None` bodies simulate an unreachable backend
pub struct StubScanService {
    pub connected: bool,
    pub upload_body: Option<String>,
    pub deep_body: Option<serde_json::Value>,
    pub uploads: AtomicUsize,
}

impl StubScanService {
    pub fn new(upload_body: Option<&str>, deep_body: Option<serde_json::Value>) -> Self {
        Self {
            connected: true,
            upload_body: upload_body.map(str::to_string),
            deep_body,
            uploads: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ScanService for StubScanService {
    async fn check_connection(&self) -> bool {
        self.connected
    }

    async fn upload(&self, _file: &SourceFile) -> Result<String> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        match &self.upload_body {
            Some(body) => Ok(body.clone()),
            None => anyhow::bail!("connection refused"),
        }
    }

    async fn deep_analysis(&self, _code: &str) -> Result<serde_json::Value> {
        match &self.deep_body {
            Some(body) => Ok(body.clone()),
            None => anyhow::bail!("connection refused"),
        }
    }
}

/// In-memory slots; clones share the same storage
///
/// An `unreadable` repository fails every read, like a state directory
/// without read permission.
#[derive(Clone, Default)]
pub struct MemoryStateRepository {
    slots: Rc<RefCell<HashMap<String, String>>>,
    fail_reads: bool,
}

impl MemoryStateRepository {
    pub fn with_slot(slot: &str, content: &str) -> Self {
        let repository = Self::default();
        repository
            .slots
            .borrow_mut()
            .insert(slot.to_string(), content.to_string());
        repository
    }

    pub fn unreadable() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    pub fn slot(&self, slot: &str) -> Option<String> {
        self.slots.borrow().get(slot).cloned()
    }
}

impl StateRepository for MemoryStateRepository {
    fn read_slot(&self, slot: &str) -> Result<Option<String>> {
        if self.fail_reads {
            anyhow::bail!("permission denied");
        }
        Ok(self.slot(slot))
    }

    fn write_slot(&self, slot: &str, content: &str) -> Result<()> {
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), content.to_string());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory")
    }
}

#[derive(Default)]
pub struct RecordingProgressReporter {
    pub messages: RefCell<Vec<String>>,
    pub waiting: RefCell<bool>,
}

impl ProgressReporter for RecordingProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn start_waiting(&self, message: &str) {
        *self.waiting.borrow_mut() = true;
        self.messages.borrow_mut().push(message.to_string());
    }

    fn finish_waiting(&self) {
        *self.waiting.borrow_mut() = false;
    }

    fn report_error(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Question backend double that answers after `delay`
pub struct DelayedQuestionService {
    pub reply: Option<QuestionReply>,
    pub delay: Duration,
    pub calls: AtomicUsize,
}

impl DelayedQuestionService {
    pub fn replying(reply: QuestionReply) -> Self {
        Self {
            reply: Some(reply),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reply: None,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn slow(reply: QuestionReply, delay: Duration) -> Self {
        Self {
            reply: Some(reply),
            delay,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QuestionService for DelayedQuestionService {
    async fn ask(&self, _query: &str) -> Result<QuestionReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => anyhow::bail!("connection refused"),
        }
    }
}
