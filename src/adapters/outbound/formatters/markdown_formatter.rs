use crate::application::read_models::{
    AnalysisReadModel, PatternGroupView, RecommendationView, VulnerabilityView,
};
use crate::ports::outbound::{ReportFormatter, ReportScope};
use crate::scan_review::domain::{LineDiff, QuestionSession, SessionStatus};
use crate::shared::Result;

/// Markdown table header for vulnerability findings
const VULN_TABLE_HEADER: &str = "| Type | Severity | Location | Description |\n";

/// Markdown table separator line for vulnerability findings
const VULN_TABLE_SEPARATOR: &str = "|------|----------|----------|-------------|\n";

/// Markdown table header for pattern matches
const MATCH_TABLE_HEADER: &str = "| Line | Match | Context |\n";

/// Markdown table separator line for pattern matches
const MATCH_TABLE_SEPARATOR: &str = "|------|-------|---------|\n";

/// MarkdownFormatter adapter rendering the analysis as a Markdown document
///
/// Source listings are emitted as `<pre><code>` blocks so highlights can be
/// expressed with `<mark>`; their text is HTML-escaped first, so markup in
/// the scanned code or in match text is shown literally.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn longest_backtick_run(text: &str) -> usize {
        text.split(|c| c != '`').map(str::len).max().unwrap_or(0)
    }

    /// Inline code whose delimiter is longer than any backtick run in `text`
    fn code_span(text: &str) -> String {
        let ticks = "`".repeat(Self::longest_backtick_run(text) + 1);
        let pad = if text.starts_with('`') || text.ends_with('`') {
            " "
        } else {
            ""
        };
        format!("{0}{1}{2}{1}{0}", ticks, pad, text)
    }

    /// Fenced block that cannot be closed early by backticks in `text`
    fn code_fence(text: &str) -> String {
        let fence = "`".repeat((Self::longest_backtick_run(text) + 1).max(3));
        format!("{0}\n{1}\n{0}\n\n", fence, text)
    }

    fn escape_html(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_analysis(&self, model: &AnalysisReadModel, scope: ReportScope) -> Result<String> {
        let mut output = String::new();

        match scope {
            ReportScope::Full => {
                self.render_header(&mut output, model);
                self.render_summary(&mut output, model);
                self.render_vulnerabilities(&mut output, model);
                self.render_recommendations(&mut output, &model.recommendations);
                self.render_pattern_matches(&mut output, &model.pattern_groups);
                self.render_source(&mut output, model);
                if let Some(diff) = &model.remediation_diff {
                    self.render_diff(&mut output, diff);
                }
            }
            ReportScope::DiffOnly => match &model.remediation_diff {
                Some(diff) => self.render_diff(&mut output, diff),
                None => output.push_str("No remediated code available.\n"),
            },
        }

        Ok(output)
    }

    fn format_answer(&self, session: &QuestionSession) -> Result<String> {
        let mut output = String::new();
        if session.status() == SessionStatus::Idle {
            return Ok(output);
        }

        output.push_str("## Question\n\n");
        output.push_str(&format!("> {}\n\n", session.question_text()));
        output.push_str("## Answer\n\n");

        match session.status() {
            SessionStatus::Answered => {
                for fragment in session.answer_fragments() {
                    output.push_str(fragment);
                    output.push_str("\n\n");
                }
            }
            SessionStatus::Failed => {
                output.push_str(&format!(
                    "**Error:** {}\n",
                    session.error_message().unwrap_or_default()
                ));
            }
            SessionStatus::Submitting => output.push_str("*Waiting for an answer...*\n"),
            SessionStatus::Idle => {}
        }

        Ok(output)
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &AnalysisReadModel) {
        output.push_str("# Vulnerability Scan Report\n\n");
        if let Some(file_path) = &model.file_path {
            output.push_str(&format!("**File:** {}\n\n", Self::code_span(file_path)));
        }
    }

    fn render_summary(&self, output: &mut String, model: &AnalysisReadModel) {
        output.push_str("## Summary\n\n");
        output.push_str(model.summary.as_deref().unwrap_or("No summary available."));
        output.push_str("\n\n");

        let llm = &model.llm;
        let mut facts = Vec::new();
        if let Some(score) = llm.risk_score {
            facts.push(format!("**Risk score:** {}", score));
        }
        if let Some(confidence) = llm.analysis_confidence {
            facts.push(format!("**Confidence:** {}", confidence));
        }
        if !facts.is_empty() {
            output.push_str(&facts.join(" · "));
            output.push_str("\n\n");
        }
        if let Some(summary) = llm.summary.as_deref().filter(|s| !s.trim().is_empty()) {
            output.push_str(&format!("{}\n\n", summary));
        }
        if let Some(error) = &llm.error {
            output.push_str(&format!("> ⚠️ LLM analysis error: {}\n\n", error));
        }
    }

    fn render_vulnerabilities(&self, output: &mut String, model: &AnalysisReadModel) {
        output.push_str("## Vulnerabilities\n\n");
        if !model.has_vulnerabilities() {
            output.push_str("No vulnerabilities found.\n\n");
            return;
        }

        let breakdown = model
            .severity_counts()
            .iter()
            .map(|(level, count)| format!("{}: {}", level, count))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!(
            "Found **{}** vulnerability finding(s) ({}).\n\n",
            model.vulnerabilities.len(),
            breakdown
        ));

        output.push_str(VULN_TABLE_HEADER);
        output.push_str(VULN_TABLE_SEPARATOR);
        for vulnerability in &model.vulnerabilities {
            output.push_str(&Self::vulnerability_row(vulnerability));
        }
        output.push('\n');
    }

    fn vulnerability_row(vulnerability: &VulnerabilityView) -> String {
        format!(
            "| {} | {} | {} | {} |\n",
            Self::escape_markdown_table_cell(&vulnerability.vulnerability_type),
            Self::escape_markdown_table_cell(&vulnerability.severity_label),
            Self::escape_markdown_table_cell(&vulnerability.location),
            Self::escape_markdown_table_cell(&vulnerability.description)
        )
    }

    fn render_recommendations(&self, output: &mut String, recommendations: &[RecommendationView]) {
        output.push_str("## Recommendations\n\n");
        if recommendations.is_empty() {
            output.push_str("No recommendations available.\n\n");
            return;
        }

        for recommendation in recommendations {
            output.push_str(&format!("### {}\n\n", recommendation.vulnerability_type));
            output.push_str(&format!("{}\n\n", recommendation.recommendation));
            if !recommendation.code_example.is_empty() {
                output.push_str(&Self::code_fence(&recommendation.code_example));
            }
            if !recommendation.resources.is_empty() {
                for resource in &recommendation.resources {
                    output.push_str(&format!("- {}\n", resource));
                }
                output.push('\n');
            }
        }
    }

    fn render_pattern_matches(&self, output: &mut String, groups: &[PatternGroupView]) {
        output.push_str("## Pattern Matches\n\n");
        if groups.is_empty() {
            output.push_str("No pattern matches found.\n\n");
            return;
        }

        for group in groups {
            output.push_str(&format!(
                "### {} ({})\n\n",
                group.pattern_type,
                group.matches.len()
            ));
            output.push_str(MATCH_TABLE_HEADER);
            output.push_str(MATCH_TABLE_SEPARATOR);
            for pattern_match in &group.matches {
                let line = pattern_match
                    .line
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "-".to_string());
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    line,
                    Self::code_span(&Self::escape_markdown_table_cell(&pattern_match.matched)),
                    Self::escape_markdown_table_cell(&pattern_match.context)
                ));
            }
            output.push('\n');
        }
    }

    fn render_source(&self, output: &mut String, model: &AnalysisReadModel) {
        let Some(source) = &model.highlighted_source else {
            return;
        };
        output.push_str("## Source Code\n\n");
        output.push_str("<pre><code>");
        output.push_str(&source.render_escaped("<mark>", "</mark>", Self::escape_html));
        output.push_str("</code></pre>\n\n");
    }

    fn render_diff(&self, output: &mut String, diff: &LineDiff) {
        output.push_str("## Remediated Code\n\n");
        output.push_str(&format!(
            "{} line(s) changed from the original.\n\n",
            diff.changed_count()
        ));
        output.push_str("<pre><code>");
        let body = diff
            .lines()
            .iter()
            .map(|line| {
                let text = Self::escape_html(&line.text);
                if line.changed {
                    format!("<mark>{}</mark>", text)
                } else {
                    text
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        output.push_str(&body);
        output.push_str("</code></pre>\n\n");
    }
}
