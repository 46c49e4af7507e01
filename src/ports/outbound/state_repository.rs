use crate::shared::Result;

/// Slot holding the last scan result payload
pub const SCAN_RESULT_SLOT: &str = "scanResult";

/// Slot holding the last deep-analysis response
pub const DEEP_ANALYSIS_SLOT: &str = "deepAnalysisResult";

/// StateRepository port for persisted client-side state
///
/// State is a set of named slots, each holding one serialized JSON document.
/// Writing a slot replaces its previous content.
pub trait StateRepository {
    /// Reads a slot
    ///
    /// # Returns
    /// `None` when the slot has never been written
    ///
    /// # Errors
    /// Returns an error if the slot exists but cannot be read
    fn read_slot(&self, slot: &str) -> Result<Option<String>>;

    /// Writes a slot, replacing any previous content
    fn write_slot(&self, slot: &str, content: &str) -> Result<()>;

    /// Human-readable location of the state, for messages
    fn location(&self) -> std::path::PathBuf;
}
