use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report rendered, or no findings when `--fail-on-findings` is set
    Success = 0,
    /// The scan result contains vulnerabilities and `--fail-on-findings` was requested
    VulnerabilitiesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (server unreachable, missing scan result, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::VulnerabilitiesDetected => write!(f, "Vulnerabilities Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors surfaced to the user.
///
/// Each variant renders a short description followed by a hint line.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Source file not found: {path}\n\n💡 Hint: Check the path of the file you want to scan")]
    ScanFileNotFound { path: PathBuf },

    #[error("Unsupported file type: {path}\n\n💡 Hint: Supported file types are: {supported}")]
    UnsupportedFileType { path: PathBuf, supported: String },

    #[error("File is too large: {path} ({size} bytes)\n\n💡 Hint: The scanner accepts files up to {max_size} bytes (see max_file_size_kb)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("No response from server. Is the backend running?\nServer: {url}\nDetails: {details}\n\n💡 Hint: Start the backend or point --server at the right address")]
    ServerUnreachable { url: String, details: String },

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("No scan result found in {state_dir}\n\n💡 Hint: Upload a file first with `vulnscope scan <FILE>`")]
    NoScanResult { state_dir: PathBuf },

    /// Validation error for configuration and builder input
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
