use crate::scan_review::domain::SeverityLevel;

/// SeverityClassification policy for mapping backend severity labels to display levels
///
/// Labels come from an LLM and are free text. Matching is case-insensitive
/// and ignores surrounding whitespace.
///
/// Mapping:
/// 1. "critical" → Critical
/// 2. "high" → High
/// 3. "medium" / "moderate" → Medium
/// 4. "low" / "info" / "informational" → Low
/// 5. anything else (including empty) → Unknown
pub struct SeverityClassification;

impl SeverityClassification {
    pub fn classify(label: &str) -> SeverityLevel {
        match label.trim().to_lowercase().as_str() {
            "critical" => SeverityLevel::Critical,
            "high" => SeverityLevel::High,
            "medium" | "moderate" => SeverityLevel::Medium,
            "low" | "info" | "informational" => SeverityLevel::Low,
            _ => SeverityLevel::Unknown,
        }
    }
}
