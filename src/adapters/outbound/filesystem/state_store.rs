use crate::ports::outbound::StateRepository;
use crate::shared::error::ScanError;
use crate::shared::security::{validate_file_size, validate_not_symlink, MAX_STATE_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// FileSystemStateRepository adapter persisting slots as JSON files
///
/// Each slot lives in `<state_dir>/<slot>.json`. The directory is created on
/// first write. Slot files that are symlinks are refused for both reading
/// and writing.
pub struct FileSystemStateRepository {
    state_dir: PathBuf,
}

impl FileSystemStateRepository {
    pub fn new(state_dir: PathBuf) -> Self {
        Self { state_dir }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.state_dir.join(format!("{}.json", slot))
    }

    fn ensure_state_dir(&self) -> Result<()> {
        if self.state_dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.state_dir).map_err(|e| {
            ScanError::FileWriteError {
                path: self.state_dir.clone(),
                details: format!("Failed to create state directory: {}", e),
            }
            .into()
        })
    }

    fn exists_without_following(path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }
}

impl StateRepository for FileSystemStateRepository {
    fn read_slot(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        let metadata = match fs::symlink_metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ScanError::FileReadError {
                    path,
                    details: e.to_string(),
                }
                .into());
            }
        };

        validate_not_symlink(&path, "state read")?;
        validate_file_size(metadata.len(), &path, MAX_STATE_FILE_SIZE)?;

        let content = fs::read_to_string(&path).map_err(|e| ScanError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        tracing::debug!(slot, path = %path.display(), "state slot read");
        Ok(Some(content))
    }

    fn write_slot(&self, slot: &str, content: &str) -> Result<()> {
        self.ensure_state_dir()?;
        let path = self.slot_path(slot);
        if Self::exists_without_following(&path) {
            validate_not_symlink(&path, "state write")?;
        }

        fs::write(&path, content).map_err(|e| ScanError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        tracing::debug!(slot, path = %path.display(), "state slot written");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.state_dir.clone()
    }
}
