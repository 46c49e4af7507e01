//! Configuration file support for vulnscope.
//!
//! Provides YAML-based configuration through `vulnscope.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "vulnscope.config.yml";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";
pub const DEFAULT_STATE_DIR: &str = ".vulnscope";
pub const DEFAULT_MAX_FILE_SIZE_KB: u64 = 500;

/// File types the scanner backend accepts
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".php", ".java", ".cs", ".go", ".c", ".cpp", ".rb", ".ts", ".jsx", ".tsx", ".h",
];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub server_url: Option<String>,
    pub format: Option<String>,
    pub state_dir: Option<PathBuf>,
    pub color: Option<bool>,
    pub fail_on_findings: Option<bool>,
    pub allowed_extensions: Option<Vec<String>>,
    pub max_file_size_kb: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "config file loaded");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Checks that a server URL is usable as a base for the scanner endpoints
pub fn validate_server_url(url: &str) -> Result<()> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        bail!(
            "Invalid server URL: must not be empty.\n\n\
             💡 Hint: Use a base URL such as {}",
            DEFAULT_SERVER_URL
        );
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        bail!(
            "Invalid server URL: '{}'. Only http:// and https:// are supported.\n\n\
             💡 Hint: Use a base URL such as {}",
            url,
            DEFAULT_SERVER_URL
        );
    }
    Ok(())
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref url) = config.server_url {
        validate_server_url(url)?;
    }

    if let Some(ref format) = config.format {
        OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    if config.max_file_size_kb == Some(0) {
        bail!(
            "Invalid config: max_file_size_kb must be greater than 0.\n\n\
             💡 Hint: The scanner backend accepts files up to {} KB by default.",
            DEFAULT_MAX_FILE_SIZE_KB
        );
    }

    if let Some(kb) = config.max_file_size_kb {
        max_file_size_bytes(kb)?;
    }

    if let Some(ref extensions) = config.allowed_extensions {
        for (i, extension) in extensions.iter().enumerate() {
            if !extension.starts_with('.') || extension.len() < 2 {
                bail!(
                    "Invalid config: allowed_extensions[{}] ('{}') must start with a dot.\n\n\
                     💡 Hint: Write extensions like \".py\" or \".tsx\".",
                    i,
                    extension
                );
            }
        }
    }
    Ok(())
}

/// Converts `max_file_size_kb` to bytes, rejecting values that overflow
fn max_file_size_bytes(kb: u64) -> Result<u64> {
    kb.checked_mul(1024).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid config: max_file_size_kb ({}) is too large.\n\n\
             💡 Hint: The scanner backend accepts files up to {} KB by default.",
            kb,
            DEFAULT_MAX_FILE_SIZE_KB
        )
    })
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line; `None`/`false` means "not given"
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub server_url: Option<String>,
    pub format: Option<OutputFormat>,
    pub state_dir: Option<PathBuf>,
    pub no_color: bool,
    pub fail_on_findings: bool,
}

/// Effective settings after merging CLI flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub server_url: String,
    pub format: OutputFormat,
    pub state_dir: PathBuf,
    pub color: bool,
    pub fail_on_findings: bool,
    pub allowed_extensions: Vec<String>,
    /// Maximum upload size in bytes
    pub max_file_size: u64,
}

impl Settings {
    /// Merges with precedence CLI flag > config file > built-in default
    pub fn resolve(cli: CliOverrides, file: Option<ConfigFile>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let server_url = cli
            .server_url
            .or(file.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        validate_server_url(&server_url)?;

        let format = match (cli.format, file.format) {
            (Some(format), _) => format,
            (None, Some(format)) => {
                OutputFormat::from_str(&format).map_err(|e| anyhow::anyhow!(e))?
            }
            (None, None) => OutputFormat::default(),
        };

        let allowed_extensions = file.allowed_extensions.unwrap_or_else(|| {
            DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect()
        });

        Ok(Self {
            server_url: server_url.trim().to_string(),
            format,
            state_dir: cli
                .state_dir
                .or(file.state_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR)),
            color: !cli.no_color && file.color.unwrap_or(true),
            fail_on_findings: cli.fail_on_findings || file.fail_on_findings.unwrap_or(false),
            allowed_extensions,
            max_file_size: max_file_size_bytes(
                file.max_file_size_kb.unwrap_or(DEFAULT_MAX_FILE_SIZE_KB),
            )?,
        })
    }
}
