use crate::application::read_models::{AnalysisReadModel, AnalysisReadModelBuilder};
use crate::application::ScanResultStore;
use crate::ports::outbound::StateRepository;
use crate::shared::error::ScanError;
use crate::shared::Result;

/// ShowAnalysisUseCase - rehydrates the last scan result for display
pub struct ShowAnalysisUseCase<R: StateRepository> {
    store: ScanResultStore<R>,
}

impl<R: StateRepository> ShowAnalysisUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self {
            store: ScanResultStore::new(repository),
        }
    }

    /// Loads the stored result and builds its read model
    ///
    /// # Errors
    /// Returns `ScanError::NoScanResult` when the store holds no usable result
    pub fn execute(&mut self) -> Result<AnalysisReadModel> {
        let state_dir = self.store.location();
        match self.store.load() {
            Some(result) => Ok(AnalysisReadModelBuilder::build(result)),
            None => Err(ScanError::NoScanResult { state_dir }.into()),
        }
    }
}
