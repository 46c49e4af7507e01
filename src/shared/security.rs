use crate::shared::error::ScanError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for state slot files read back from disk (10 MB)
/// A scan result that large is a corrupted slot, not a real payload
pub const MAX_STATE_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` instead of `metadata()` so the link itself is
/// inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(ScanError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Symbolic links are not allowed for {} operations",
                operation
            ),
            hint: "Pass the path of the real file instead".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ScanError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(ScanError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Pass the path of the real file instead".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns `ScanError::FileTooLarge` if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(ScanError::FileTooLarge {
            path: path.to_path_buf(),
            size: file_size,
            max_size,
        }
        .into());
    }
    Ok(())
}

/// Validates that the file name ends with one of the allowed extensions
///
/// Extensions are compared case-insensitively and include the leading dot
/// (e.g. `.py`).
pub fn validate_extension(path: &Path, allowed_extensions: &[String]) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_lowercase();

    let allowed = allowed_extensions
        .iter()
        .any(|ext| file_name.ends_with(&ext.to_lowercase()));

    if !allowed {
        return Err(ScanError::UnsupportedFileType {
            path: path.to_path_buf(),
            supported: allowed_extensions.join(", "),
        }
        .into());
    }

    Ok(())
}
