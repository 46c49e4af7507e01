mod severity_classification;

pub use severity_classification::SeverityClassification;
