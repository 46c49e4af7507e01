mod check_server;
mod deep_analysis;
mod question_session_controller;
mod scan_file;
mod show_analysis;

#[cfg(test)]
pub(crate) mod test_support;

pub use check_server::CheckServerUseCase;
pub use deep_analysis::DeepAnalysisUseCase;
pub use question_session_controller::QuestionSessionController;
pub use scan_file::ScanFileUseCase;
pub use show_analysis::ShowAnalysisUseCase;
