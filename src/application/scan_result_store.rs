use crate::ports::outbound::{StateRepository, SCAN_RESULT_SLOT};
use crate::scan_review::domain::ScanResult;
use crate::shared::Result;
use anyhow::Context;

/// ScanResultStore - holds the last scan result for the analysis views
///
/// Backed by the `scanResult` slot of a `StateRepository`. The store holds at
/// most one `ScanResult`; every load or save replaces it wholesale.
pub struct ScanResultStore<R: StateRepository> {
    repository: R,
    current: Option<ScanResult>,
}

impl<R: StateRepository> ScanResultStore<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            current: None,
        }
    }

    /// Rehydrates the store from the persisted slot
    ///
    /// Returns `None` ("no result") when the slot is absent, unreadable or
    /// holds data that does not parse as a scan result. Those cases are
    /// logged, never raised.
    pub fn load(&mut self) -> Option<&ScanResult> {
        self.current = match self.repository.read_slot(SCAN_RESULT_SLOT) {
            Ok(Some(raw)) => match ScanResult::from_json(&raw) {
                Ok(result) => Some(result),
                Err(e) => {
                    tracing::warn!(error = %format!("{:#}", e), "stored scan result is malformed");
                    None
                }
            },
            Ok(None) => {
                tracing::debug!("no stored scan result");
                None
            }
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "stored scan result is unreadable");
                None
            }
        };
        self.current.as_ref()
    }

    /// Parses a freshly received payload, persists it verbatim and makes it current
    ///
    /// # Errors
    /// Returns an error if the payload is not a scan result (nothing is
    /// persisted then) or if the slot cannot be written.
    pub fn save(&mut self, raw: &str) -> Result<&ScanResult> {
        let result = ScanResult::from_json(raw).context("Scanner returned an unreadable result")?;
        self.repository.write_slot(SCAN_RESULT_SLOT, raw)?;
        Ok(self.current.insert(result))
    }

    pub fn current(&self) -> Option<&ScanResult> {
        self.current.as_ref()
    }

    pub fn location(&self) -> std::path::PathBuf {
        self.repository.location()
    }
}
