use crate::application::dto::ScanRequest;
use crate::ports::outbound::{
    ProgressReporter, ScanService, SourceFileReader, StateRepository, DEEP_ANALYSIS_SLOT,
};
use crate::shared::Result;
use anyhow::Context;

/// DeepAnalysisUseCase - requests a deep analysis of a source file
///
/// The response is persisted to the `deepAnalysisResult` slot as
/// pretty-printed JSON and returned as is.
pub struct DeepAnalysisUseCase<F, S, R, P> {
    source_reader: F,
    scan_service: S,
    repository: R,
    progress_reporter: P,
}

impl<F, S, R, P> DeepAnalysisUseCase<F, S, R, P>
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
            repository,
            progress_reporter,
        }
    }

    pub async fn execute(&self, request: ScanRequest) -> Result<serde_json::Value> {
        let file = self.source_reader.read_source(&request.file_path)?;
        let code = file.text();

        self.progress_reporter
            .start_waiting(&format!("🧠 Running deep analysis of {}...", file.file_name));
        let response = self.scan_service.deep_analysis(&code).await;
        self.progress_reporter.finish_waiting();
        let response = response?;

        let serialized = serde_json::to_string_pretty(&response)
            .context("Failed to serialize deep analysis response")?;
        self.repository.write_slot(DEEP_ANALYSIS_SLOT, &serialized)?;
        self.progress_reporter
            .report_completion("✅ Deep analysis complete");

        Ok(response)
    }
}
