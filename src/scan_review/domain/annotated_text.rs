use serde::Serialize;

/// A run of source text, either plain or highlighted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub highlighted: bool,
}

impl Span {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }

    pub fn highlighted(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// AnnotatedText value object - source text split into highlighted and plain spans
///
/// Concatenating the spans always yields the original text. Adjacent
/// highlighted spans are kept apart so each marked occurrence stays visible
/// as its own span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnnotatedText {
    spans: Vec<Span>,
}

impl AnnotatedText {
    /// Text with no highlighting at all
    pub fn plain(text: &str) -> Self {
        Self::from_spans(vec![Span::plain(text)])
    }

    /// Builds annotated text from spans, dropping empty ones
    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self {
            spans: spans.into_iter().filter(|s| !s.text.is_empty()).collect(),
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn highlighted_spans(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(|s| s.highlighted)
    }

    pub fn highlight_count(&self) -> usize {
        self.highlighted_spans().count()
    }

    /// The underlying text without any markers
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Renders highlighted spans between `open` and `close` markers
    ///
    /// Marker text is inserted verbatim; escaping the span text for the
    /// target format is the caller's job (see `render_escaped`).
    pub fn render_with(&self, open: &str, close: &str) -> String {
        self.render_escaped(open, close, |text| text.to_string())
    }

    /// Like `render_with`, passing every span's text through `escape` first
    pub fn render_escaped<F>(&self, open: &str, close: &str, escape: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let mut output = String::new();
        for span in &self.spans {
            if span.highlighted {
                output.push_str(open);
                output.push_str(&escape(&span.text));
                output.push_str(close);
            } else {
                output.push_str(&escape(&span.text));
            }
        }
        output
    }

    /// Splits the text into lines on `\n`, keeping the highlighting of each part
    ///
    /// A highlighted span that crosses a line break is highlighted on every
    /// line it touches. A trailing newline produces a final empty line, in
    /// line with `str::split`.
    pub fn lines(&self) -> Vec<AnnotatedText> {
        let mut lines = Vec::new();
        let mut current: Vec<Span> = Vec::new();

        for span in &self.spans {
            let mut parts = span.text.split('\n').peekable();
            while let Some(part) = parts.next() {
                current.push(Span {
                    text: part.to_string(),
                    highlighted: span.highlighted,
                });
                if parts.peek().is_some() {
                    lines.push(Self::from_spans(std::mem::take(&mut current)));
                }
            }
        }
        lines.push(Self::from_spans(current));
        lines
    }
}
