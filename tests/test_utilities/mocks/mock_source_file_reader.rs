use std::path::Path;
use vulnscope::prelude::*;
use vulnscope::shared::error::ScanError;

/// Mock SourceFileReader serving fixed content for any path
pub struct MockSourceFileReader {
    content: Option<String>,
}

impl MockSourceFileReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    /// A reader for which every path is missing
    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl SourceFileReader for MockSourceFileReader {
    fn read_source(&self, path: &Path) -> Result<SourceFile> {
        let content = self.content.as_ref().ok_or_else(|| ScanError::ScanFileNotFound {
            path: path.to_path_buf(),
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(SourceFile::new(file_name, content.clone().into_bytes()))
    }
}
