//! vulnscope - client for a remote source-code vulnerability scanner
//!
//! Uploads source files to the scanner backend, keeps the last scan result in
//! a local state directory and turns it into reports: findings, pattern
//! matches highlighted in the source, and the remediated code with changed
//! lines marked. A question session answers security questions through the
//! backend's retrieval service.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan_review`): scan result model, match highlighting,
//!   remediation diffing and the question session state machine
//! - **Application Layer** (`application`): Use cases, the scan result store
//!   and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP client, filesystem, console and formatters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use vulnscope::prelude::*;
//!
//! let result = ScanResult::from_json(
//!     r#"{"file_content": "x = eval(data)",
//!         "pattern_results": {"code_injection": [{"match": "eval(data)", "line": 1}]}}"#,
//! )
//! .unwrap();
//!
//! let highlighted = MatchHighlighter::highlight(
//!     result.file_content.as_deref(),
//!     Some(&result.pattern_results),
//! )
//! .unwrap();
//! assert_eq!(highlighted.render_with("[", "]"), "x = [eval(data)]");
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod scan_review;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemStateRepository, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::ScannerClient;
    pub use crate::application::dto::{OutputFormat, ScanRequest, ServerStatus};
    pub use crate::application::read_models::{AnalysisReadModel, AnalysisReadModelBuilder};
    pub use crate::application::use_cases::{
        CheckServerUseCase, DeepAnalysisUseCase, QuestionSessionController, ScanFileUseCase,
        ShowAnalysisUseCase,
    };
    pub use crate::application::ScanResultStore;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, QuestionReply, QuestionService, ReportFormatter,
        ReportScope, ScanService, SourceFile, SourceFileReader, StateRepository,
    };
    pub use crate::scan_review::domain::{
        AnnotatedText, AnswerOutcome, LineDiff, QuestionSession, ScanResult, SessionStatus,
        SeverityLevel,
    };
    pub use crate::scan_review::services::{MatchHighlighter, RemediationDiffer};
    pub use crate::shared::Result;
}
