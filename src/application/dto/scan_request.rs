use std::path::PathBuf;

/// ScanRequest - request DTO for the scan and deep-analysis use cases
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Path of the source file to send to the scanner
    pub file_path: PathBuf,
}

impl ScanRequest {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}
