use crate::shared::Result;
use async_trait::async_trait;

/// A source file prepared for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name sent in the multipart body (no directory part)
    pub file_name: String,
    pub content: Vec<u8>,
}

impl SourceFile {
    pub fn new(file_name: String, content: Vec<u8>) -> Self {
        Self { file_name, content }
    }

    /// Content as text, replacing invalid UTF-8 sequences
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

/// ScanService port for the remote scanning backend
///
/// Implementations must be `Send + Sync` so the runtime can drive them from
/// any task.
#[async_trait]
pub trait ScanService: Send + Sync {
    /// Liveness probe; `true` when the backend answered with a 2xx status
    async fn check_connection(&self) -> bool;

    /// Uploads a file for scanning
    ///
    /// # Returns
    /// The raw JSON body of the scan result, ready to be persisted verbatim
    ///
    /// # Errors
    /// Returns an error if:
    /// - The backend cannot be reached
    /// - The backend answers with a non-2xx status (its error message is kept)
    async fn upload(&self, file: &SourceFile) -> Result<String>;

    /// Requests a deep analysis of `code`
    ///
    /// # Returns
    /// The JSON response as sent by the backend
    async fn deep_analysis(&self, code: &str) -> Result<serde_json::Value>;
}
