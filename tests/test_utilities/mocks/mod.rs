/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_question_service;
mod mock_scan_service;
mod mock_source_file_reader;
mod mock_state_repository;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_question_service::MockQuestionService;
pub use mock_scan_service::MockScanService;
pub use mock_source_file_reader::MockSourceFileReader;
pub use mock_state_repository::MockStateRepository;
