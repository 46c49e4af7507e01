use crate::application::read_models::AnalysisReadModel;
use crate::ports::outbound::{ReportFormatter, ReportScope};
use crate::scan_review::domain::{AnnotatedText, LineDiff, QuestionSession, SessionStatus, SeverityLevel};
use crate::shared::Result;
use owo_colors::OwoColorize;

/// Markers around highlighted text when colors are off
const PLAIN_HIGHLIGHT_OPEN: &str = "[[";
const PLAIN_HIGHLIGHT_CLOSE: &str = "]]";

const INDENT: &str = "  ";

/// TextFormatter adapter for terminal output
///
/// With colors enabled, pattern matches are shown on a yellow background and
/// changed remediation lines in green. Without colors the same information
/// is carried by `[[`/`]]` markers and a `+` gutter.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn heading(&self, title: &str) -> String {
        if self.colored {
            format!("{}\n", title.bold().underline())
        } else {
            format!("{}\n{}\n", title, "-".repeat(title.chars().count()))
        }
    }

    fn severity(&self, level: SeverityLevel, label: &str) -> String {
        let tag = format!("[{}]", label.to_uppercase());
        if !self.colored {
            return tag;
        }
        match level {
            SeverityLevel::Critical => tag.red().bold().to_string(),
            SeverityLevel::High => tag.red().to_string(),
            SeverityLevel::Medium => tag.yellow().to_string(),
            SeverityLevel::Low => tag.blue().to_string(),
            SeverityLevel::Unknown => tag.dimmed().to_string(),
        }
    }

    fn render_annotated_line(&self, line: &AnnotatedText) -> String {
        if !self.colored {
            return line.render_with(PLAIN_HIGHLIGHT_OPEN, PLAIN_HIGHLIGHT_CLOSE);
        }
        line.spans()
            .iter()
            .map(|span| {
                if span.highlighted {
                    span.text.black().on_yellow().to_string()
                } else {
                    span.text.clone()
                }
            })
            .collect()
    }

    fn render_summary(&self, output: &mut String, model: &AnalysisReadModel) {
        output.push_str(&self.heading("Summary"));
        output.push_str(&format!(
            "{}{}\n",
            INDENT,
            model.summary.as_deref().unwrap_or("No summary available.")
        ));

        let llm = &model.llm;
        if let Some(score) = llm.risk_score {
            output.push_str(&format!("{}Risk score: {}\n", INDENT, score));
        }
        if let Some(confidence) = llm.analysis_confidence {
            output.push_str(&format!("{}Confidence: {}\n", INDENT, confidence));
        }
        if let Some(summary) = llm.summary.as_deref().filter(|s| !s.trim().is_empty()) {
            output.push_str(&format!("{}{}\n", INDENT, summary));
        }
        if let Some(error) = &llm.error {
            output.push_str(&format!("{}⚠️  LLM analysis error: {}\n", INDENT, error));
        }
        output.push('\n');
    }

    fn render_vulnerabilities(&self, output: &mut String, model: &AnalysisReadModel) {
        output.push_str(&self.heading(&format!(
            "Vulnerabilities ({})",
            model.vulnerabilities.len()
        )));
        if !model.has_vulnerabilities() {
            output.push_str(&format!("{}No vulnerabilities found.\n\n", INDENT));
            return;
        }

        for vulnerability in &model.vulnerabilities {
            output.push_str(&format!(
                "{}{} {} at {}\n",
                INDENT,
                self.severity(vulnerability.severity, &vulnerability.severity_label),
                vulnerability.vulnerability_type,
                vulnerability.location
            ));
            if !vulnerability.description.is_empty() {
                output.push_str(&format!("{0}{0}{1}\n", INDENT, vulnerability.description));
            }
        }
        let breakdown = model
            .severity_counts()
            .iter()
            .map(|(level, count)| format!("{} {}", level, count))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("{}Severity: {}\n\n", INDENT, breakdown));
    }

    fn render_recommendations(&self, output: &mut String, model: &AnalysisReadModel) {
        output.push_str(&self.heading("Recommendations"));
        if model.recommendations.is_empty() {
            output.push_str(&format!("{}No recommendations available.\n\n", INDENT));
            return;
        }

        for recommendation in &model.recommendations {
            output.push_str(&format!("{}{}\n", INDENT, recommendation.vulnerability_type));
            output.push_str(&format!("{0}{0}{1}\n", INDENT, recommendation.recommendation));
            if !recommendation.code_example.is_empty() {
                output.push_str(&format!("{0}{0}Example:\n", INDENT));
                for line in recommendation.code_example.lines() {
                    output.push_str(&format!("{0}{0}{0}{1}\n", INDENT, line));
                }
            }
            for resource in &recommendation.resources {
                output.push_str(&format!("{0}{0}- {1}\n", INDENT, resource));
            }
        }
        output.push('\n');
    }

    fn render_pattern_matches(&self, output: &mut String, model: &AnalysisReadModel) {
        output.push_str(&self.heading(&format!(
            "Pattern matches ({})",
            model.pattern_match_count()
        )));
        if model.pattern_groups.is_empty() {
            output.push_str(&format!("{}No pattern matches found.\n\n", INDENT));
            return;
        }

        for group in &model.pattern_groups {
            output.push_str(&format!("{}{}\n", INDENT, group.pattern_type));
            for pattern_match in &group.matches {
                let line = pattern_match
                    .line
                    .map(|l| format!("line {}", l))
                    .unwrap_or_else(|| "line ?".to_string());
                output.push_str(&format!(
                    "{0}{0}{1}: {2}\n",
                    INDENT, line, pattern_match.matched
                ));
                if !pattern_match.context.is_empty() {
                    output.push_str(&format!(
                        "{0}{0}{0}context: {1}\n",
                        INDENT, pattern_match.context
                    ));
                }
            }
        }
        output.push('\n');
    }

    fn render_source(&self, output: &mut String, source: &AnnotatedText) {
        output.push_str(&self.heading(&format!(
            "Source code ({} highlighted match(es))",
            source.highlight_count()
        )));
        let mut lines = source.lines();
        // A trailing newline ends the last line; it does not start a new one
        if lines.len() > 1 && lines.last().is_some_and(|l| l.plain_text().is_empty()) {
            lines.pop();
        }
        for (index, line) in lines.iter().enumerate() {
            output.push_str(&format!(
                "{:>5} | {}\n",
                index + 1,
                self.render_annotated_line(line)
            ));
        }
        output.push('\n');
    }

    fn render_diff(&self, output: &mut String, diff: &LineDiff) {
        output.push_str(&self.heading(&format!(
            "Remediated code ({} changed line(s))",
            diff.changed_count()
        )));
        for line in diff.lines() {
            let rendered = if !line.changed {
                format!("{:>5}   {}", line.number, line.text)
            } else if self.colored {
                format!("{:>5} + {}", line.number, line.text)
                    .green()
                    .to_string()
            } else {
                format!("{:>5} + {}", line.number, line.text)
            };
            output.push_str(&rendered);
            output.push('\n');
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format_analysis(&self, model: &AnalysisReadModel, scope: ReportScope) -> Result<String> {
        let mut output = String::new();

        if scope == ReportScope::DiffOnly {
            match &model.remediation_diff {
                Some(diff) => self.render_diff(&mut output, diff),
                None => output.push_str("No remediated code available.\n"),
            }
            return Ok(output);
        }

        let title = match &model.file_path {
            Some(file_path) => format!("Scan report: {}", file_path),
            None => "Scan report".to_string(),
        };
        if self.colored {
            output.push_str(&format!("{}\n\n", title.bold()));
        } else {
            output.push_str(&format!("{}\n{}\n\n", title, "=".repeat(title.chars().count())));
        }

        self.render_summary(&mut output, model);
        self.render_vulnerabilities(&mut output, model);
        self.render_recommendations(&mut output, model);
        self.render_pattern_matches(&mut output, model);
        if let Some(source) = &model.highlighted_source {
            self.render_source(&mut output, source);
        }
        if let Some(diff) = &model.remediation_diff {
            self.render_diff(&mut output, diff);
        }

        Ok(output)
    }

    fn format_answer(&self, session: &QuestionSession) -> Result<String> {
        let output = match session.status() {
            SessionStatus::Idle => String::new(),
            SessionStatus::Submitting => {
                format!("Waiting for an answer to: {}\n", session.question_text())
            }
            SessionStatus::Answered => session
                .answer_fragments()
                .iter()
                .map(|fragment| format!("{}\n", fragment))
                .collect::<Vec<_>>()
                .join("\n"),
            SessionStatus::Failed => {
                let message = session.error_message().unwrap_or_default();
                if self.colored {
                    format!("{} {}\n", "Error:".red().bold(), message)
                } else {
                    format!("Error: {}\n", message)
                }
            }
        };
        Ok(output)
    }
}
