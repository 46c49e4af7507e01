//! Read models for CQRS-lite pattern
//!
//! View-optimized structs built from a scan result, consumed by the report
//! formatters.

pub mod analysis_read_model;
pub mod analysis_read_model_builder;
pub mod finding_views;

pub use analysis_read_model::{AnalysisReadModel, LlmAnalysisView};
pub use analysis_read_model_builder::AnalysisReadModelBuilder;
pub use finding_views::{
    PatternGroupView, PatternMatchView, RecommendationView, VulnerabilityView,
};
