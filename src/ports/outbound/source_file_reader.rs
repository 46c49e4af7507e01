use super::SourceFile;
use crate::shared::Result;
use std::path::Path;

/// SourceFileReader port for loading the file to be scanned
pub trait SourceFileReader {
    /// Reads and validates a source file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file type is not accepted by the scanner
    /// - The file exceeds the size limit
    fn read_source(&self, path: &Path) -> Result<SourceFile>;
}
