//! Builder for constructing AnalysisReadModel from a scan result
//!
//! Runs the match highlighter and the remediation differencer and copies the
//! findings into their view structs.

use super::analysis_read_model::{AnalysisReadModel, LlmAnalysisView};
use super::finding_views::{
    PatternGroupView, PatternMatchView, RecommendationView, VulnerabilityView,
};
use crate::scan_review::domain::ScanResult;
use crate::scan_review::policies::SeverityClassification;
use crate::scan_review::services::{MatchHighlighter, RemediationDiffer};

pub struct AnalysisReadModelBuilder;

impl AnalysisReadModelBuilder {
    pub fn build(result: &ScanResult) -> AnalysisReadModel {
        AnalysisReadModel {
            file_path: result.file_path.clone(),
            summary: result
                .brief_summary
                .clone()
                .filter(|s| !s.trim().is_empty()),
            llm: Self::build_llm_view(result),
            vulnerabilities: Self::build_vulnerabilities(result),
            recommendations: Self::build_recommendations(result),
            pattern_groups: Self::build_pattern_groups(result),
            highlighted_source: MatchHighlighter::highlight(
                result.file_content.as_deref(),
                Some(&result.pattern_results),
            ),
            remediation_diff: RemediationDiffer::diff_by_line(
                result.file_content.as_deref(),
                result.remediated_file_content.as_deref(),
            ),
        }
    }

    fn build_llm_view(result: &ScanResult) -> LlmAnalysisView {
        let llm = &result.llm_results;
        LlmAnalysisView {
            risk_score: llm.risk_score,
            analysis_confidence: llm.analysis_confidence,
            summary: llm.summary.clone(),
            error: llm.error.clone(),
        }
    }

    fn build_vulnerabilities(result: &ScanResult) -> Vec<VulnerabilityView> {
        result
            .vulnerabilities()
            .iter()
            .map(|v| VulnerabilityView {
                vulnerability_type: v.vulnerability_type.clone(),
                location: v.location.clone(),
                severity_label: v.severity.clone(),
                severity: SeverityClassification::classify(&v.severity),
                description: v.description.clone(),
            })
            .collect()
    }

    fn build_recommendations(result: &ScanResult) -> Vec<RecommendationView> {
        result
            .recommendations
            .iter()
            .map(|r| RecommendationView {
                vulnerability_type: r.vulnerability_type.clone(),
                recommendation: r.recommendation.clone(),
                code_example: r.code_example.clone(),
                resources: r.resources.clone(),
            })
            .collect()
    }

    /// Pattern types with no matches are dropped
    fn build_pattern_groups(result: &ScanResult) -> Vec<PatternGroupView> {
        result
            .pattern_results
            .iter()
            .filter(|(_, matches)| !matches.is_empty())
            .map(|(pattern_type, matches)| PatternGroupView {
                pattern_type: pattern_type.clone(),
                matches: matches
                    .iter()
                    .map(|m| PatternMatchView {
                        line: m.line,
                        matched: m.matched.clone(),
                        pattern: m.pattern.clone(),
                        context: m.context.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}
