use crate::shared::Result;
use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Pattern matches grouped by pattern type (e.g. `sql_injection`, `xss`)
pub type PatternResults = BTreeMap<String, Vec<PatternMatch>>;

/// ScanResult entity - the payload returned by the scanning backend
///
/// Immutable once received. Every field is optional on the wire: missing
/// fields and explicit `null`s both fall back to their empty value, so a
/// partial backend response still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub brief_summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub llm_results: LlmResults,
    #[serde(deserialize_with = "null_as_default")]
    pub pattern_results: PatternResults,
    #[serde(deserialize_with = "null_as_default")]
    pub recommendations: Vec<Recommendation>,
    pub file_content: Option<String>,
    pub remediated_file_content: Option<String>,
}

impl ScanResult {
    /// Parses a scan result from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Scan result is not valid JSON for the expected schema")
    }

    pub fn vulnerabilities(&self) -> &[Vulnerability] {
        &self.llm_results.vulnerabilities
    }

    pub fn has_vulnerabilities(&self) -> bool {
        !self.llm_results.vulnerabilities.is_empty()
    }

    /// Total number of pattern matches across all pattern types
    pub fn pattern_match_count(&self) -> usize {
        self.pattern_results.values().map(Vec::len).sum()
    }
}

/// LLM-side analysis of the uploaded file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmResults {
    #[serde(deserialize_with = "null_as_default")]
    pub vulnerabilities: Vec<Vulnerability>,
    #[serde(deserialize_with = "lenient_number")]
    pub risk_score: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub analysis_confidence: Option<f64>,
    pub summary: Option<String>,
    /// Set by the backend when the LLM call itself failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A single LLM-derived vulnerability finding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vulnerability {
    #[serde(rename = "type", deserialize_with = "lenient_text")]
    pub vulnerability_type: String,
    #[serde(deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(deserialize_with = "lenient_text")]
    pub severity: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
}

/// A raw hit from the rule-based pattern scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternMatch {
    #[serde(rename = "match", deserialize_with = "lenient_text")]
    pub matched: String,
    /// 1-based line in `file_content`; not validated against the file
    #[serde(deserialize_with = "lenient_line")]
    pub line: Option<u64>,
    #[serde(deserialize_with = "lenient_text")]
    pub pattern: String,
    #[serde(deserialize_with = "lenient_text")]
    pub context: String,
}

/// Remediation advice for one vulnerability type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    #[serde(deserialize_with = "lenient_text")]
    pub vulnerability_type: String,
    #[serde(deserialize_with = "lenient_text")]
    pub recommendation: String,
    #[serde(deserialize_with = "lenient_text")]
    pub code_example: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resources: Vec<String>,
}

/// LLM output is loosely typed: numbers show up where text is expected and
/// the other way round
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Number(number)) => number.as_f64(),
        Some(TextOrNumber::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

fn lenient_line<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Number(number)) => number.as_u64(),
        Some(TextOrNumber::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}
