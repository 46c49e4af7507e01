use crate::scan_review::domain::{AnnotatedText, PatternResults, Span};

/// MatchHighlighter service for overlaying pattern matches onto source text
///
/// All matched substrings from every pattern type are flattened and applied
/// longest first. Each one marks every literal occurrence that is not
/// already part of a highlighted span, so a shorter match nested inside a
/// longer one (e.g. `eval` inside `eval(userInput)`) never splits the longer
/// highlight.
///
/// Matching is plain substring search: regex metacharacters and markup in
/// the match text carry no special meaning.
pub struct MatchHighlighter;

impl MatchHighlighter {
    /// Highlights pattern matches in `source`
    ///
    /// # Returns
    /// - `None` when there is no source text
    /// - the source as a single plain span when there are no pattern results
    /// - otherwise the source split into plain and highlighted spans
    pub fn highlight(
        source: Option<&str>,
        pattern_results: Option<&PatternResults>,
    ) -> Option<AnnotatedText> {
        let source = source?;
        let Some(pattern_results) = pattern_results else {
            return Some(AnnotatedText::plain(source));
        };

        let mut needles: Vec<&str> = pattern_results
            .values()
            .flatten()
            .map(|m| m.matched.as_str())
            .filter(|needle| !needle.is_empty())
            .collect();
        // Stable: equal-length matches keep their flattened order
        needles.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut spans = vec![Span::plain(source)];
        for needle in needles {
            spans = spans
                .into_iter()
                .flat_map(|span| Self::mark_occurrences(span, needle))
                .collect();
        }

        Some(AnnotatedText::from_spans(spans))
    }

    /// Splits a plain span around every occurrence of `needle`
    fn mark_occurrences(span: Span, needle: &str) -> Vec<Span> {
        if span.highlighted || !span.text.contains(needle) {
            return vec![span];
        }

        let mut parts = Vec::new();
        let mut cursor = 0;
        for (start, found) in span.text.match_indices(needle) {
            if start > cursor {
                parts.push(Span::plain(&span.text[cursor..start]));
            }
            parts.push(Span::highlighted(found));
            cursor = start + found.len();
        }
        if cursor < span.text.len() {
            parts.push(Span::plain(&span.text[cursor..]));
        }
        parts
    }
}
