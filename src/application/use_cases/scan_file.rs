use crate::application::dto::ScanRequest;
use crate::application::read_models::{AnalysisReadModel, AnalysisReadModelBuilder};
use crate::application::ScanResultStore;
use crate::ports::outbound::{ProgressReporter, ScanService, SourceFileReader, StateRepository};
use crate::shared::Result;

/// ScanFileUseCase - uploads a source file and records the scan result
///
/// # Type Parameters
/// * `F` - SourceFileReader implementation
/// * `S` - ScanService implementation
/// * `R` - StateRepository implementation backing the result store
/// * `P` - ProgressReporter implementation
pub struct ScanFileUseCase<F, S, R, P>
where
    R: StateRepository,
{
    source_reader: F,
    scan_service: S,
    store: ScanResultStore<R>,
    progress_reporter: P,
}

impl<F, S, R, P> ScanFileUseCase<F, S, R, P>
where
    F: SourceFileReader,
    S: ScanService,
    R: StateRepository,
    P: ProgressReporter,
{
    pub fn new(source_reader: F, scan_service: S, repository: R, progress_reporter: P) -> Self {
        Self {
            source_reader,
            scan_service,
            store: ScanResultStore::new(repository),
            progress_reporter,
        }
    }

    /// Executes the scan
    ///
    /// The file is validated and read before anything is sent. The scanner's
    /// payload is persisted only if it parses as a scan result.
    ///
    /// # Returns
    /// The analysis read model of the new scan result
    pub async fn execute(&mut self, request: ScanRequest) -> Result<AnalysisReadModel> {
        self.progress_reporter.report(&format!(
            "📖 Reading source file: {}",
            request.file_path.display()
        ));
        let file = self.source_reader.read_source(&request.file_path)?;
        tracing::debug!(file = %file.file_name, bytes = file.content.len(), "source file read");

        self.progress_reporter
            .start_waiting(&format!("🔍 Scanning {}...", file.file_name));
        let uploaded = self.scan_service.upload(&file).await;
        self.progress_reporter.finish_waiting();
        let raw = uploaded?;

        let result = self.store.save(&raw)?;
        let model = AnalysisReadModelBuilder::build(result);

        self.progress_reporter.report_completion(&format!(
            "✅ Scan complete: {} vulnerability finding(s), {} pattern match(es)",
            model.vulnerabilities.len(),
            model.pattern_match_count()
        ));

        Ok(model)
    }

    pub fn store(&self) -> &ScanResultStore<R> {
        &self.store
    }
}
