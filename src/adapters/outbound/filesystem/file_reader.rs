use crate::ports::outbound::{SourceFile, SourceFileReader};
use crate::shared::error::ScanError;
use crate::shared::security::{validate_extension, validate_file_size, validate_regular_file};
use crate::shared::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// FileSystemReader adapter for reading source files to scan
///
/// Applies the same acceptance rules as the scanner backend before anything
/// is uploaded: the file must be a regular file (not a symlink), carry one
/// of the allowed extensions and fit the size limit.
pub struct FileSystemReader {
    allowed_extensions: Vec<String>,
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new(allowed_extensions: Vec<String>, max_file_size: u64) -> Self {
        Self {
            allowed_extensions,
            max_file_size,
        }
    }
}

impl SourceFileReader for FileSystemReader {
    fn read_source(&self, path: &Path) -> Result<SourceFile> {
        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ScanError::ScanFileNotFound {
                    path: path.to_path_buf(),
                }
                .into());
            }
            Err(e) => {
                return Err(ScanError::FileReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into());
            }
        };

        validate_regular_file(path, "source file")?;
        validate_extension(path, &self.allowed_extensions)?;
        validate_file_size(metadata.len(), path, self.max_file_size)?;

        let content = fs::read(path).map_err(|e| ScanError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(SourceFile::new(file_name, content))
    }
}
