/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (scanner backend, state directory,
/// file system, console).
pub mod output_presenter;
pub mod progress_reporter;
pub mod question_service;
pub mod report_formatter;
pub mod scan_service;
pub mod source_file_reader;
pub mod state_repository;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use question_service::{QuestionReply, QuestionService};
pub use report_formatter::{ReportFormatter, ReportScope};
pub use scan_service::{ScanService, SourceFile};
pub use source_file_reader::SourceFileReader;
pub use state_repository::{StateRepository, DEEP_ANALYSIS_SLOT, SCAN_RESULT_SLOT};
