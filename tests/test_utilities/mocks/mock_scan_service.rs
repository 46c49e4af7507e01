use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use vulnscope::prelude::*;
use vulnscope::shared::error::ScanError;

/// Mock ScanService replying with canned payloads
///
/// Records every uploaded file so tests can check what was sent.
#[derive(Clone, Default)]
pub struct MockScanService {
    connected: bool,
    upload_reply: Option<String>,
    deep_reply: Option<serde_json::Value>,
    pub uploaded: Arc<Mutex<Vec<SourceFile>>>,
    pub deep_requests: Arc<AtomicUsize>,
}

impl MockScanService {
    pub fn new() -> Self {
        Self {
            connected: true,
            ..Default::default()
        }
    }

    /// A backend that refuses every request
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn with_upload_reply(mut self, body: &str) -> Self {
        self.upload_reply = Some(body.to_string());
        self
    }

    pub fn with_deep_reply(mut self, body: serde_json::Value) -> Self {
        self.deep_reply = Some(body);
        self
    }

    pub fn upload_count(&self) -> usize {
        self.uploaded.lock().unwrap().len()
    }

    fn refused(&self) -> anyhow::Error {
        ScanError::ServerUnreachable {
            url: "http://mock-scanner".to_string(),
            details: "connection refused".to_string(),
        }
        .into()
    }
}

#[async_trait]
impl ScanService for MockScanService {
    async fn check_connection(&self) -> bool {
        self.connected
    }

    async fn upload(&self, file: &SourceFile) -> Result<String> {
        if !self.connected {
            return Err(self.refused());
        }
        self.uploaded.lock().unwrap().push(file.clone());
        self.upload_reply.clone().ok_or_else(|| {
            ScanError::ServerError {
                status: 500,
                message: "no scan reply configured".to_string(),
            }
            .into()
        })
    }

    async fn deep_analysis(&self, _code: &str) -> Result<serde_json::Value> {
        if !self.connected {
            return Err(self.refused());
        }
        self.deep_requests.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .deep_reply
            .clone()
            .unwrap_or_else(|| serde_json::json!({})))
    }
}
