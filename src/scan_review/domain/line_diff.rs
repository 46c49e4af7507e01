use serde::Serialize;

/// One line of the remediated source with its change marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    /// 1-based line number in the remediated source
    pub number: usize,
    pub text: String,
    pub changed: bool,
}

/// LineDiff value object - the remediated source annotated line by line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineDiff {
    lines: Vec<DiffLine>,
}

impl LineDiff {
    pub fn new(lines: Vec<DiffLine>) -> Self {
        Self { lines }
    }

    /// Every line of `text`, none of them marked
    pub fn unchanged(text: &str) -> Self {
        Self::new(
            text.split('\n')
                .enumerate()
                .map(|(index, line)| DiffLine {
                    number: index + 1,
                    text: line.to_string(),
                    changed: false,
                })
                .collect(),
        )
    }

    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    pub fn changed_count(&self) -> usize {
        self.lines.iter().filter(|l| l.changed).count()
    }

    pub fn changed_line_numbers(&self) -> Vec<usize> {
        self.lines
            .iter()
            .filter(|l| l.changed)
            .map(|l| l.number)
            .collect()
    }

    /// The remediated text, reassembled with `\n` separators
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Reassembles the text, wrapping each changed line in `open`/`close`
    pub fn render_with(&self, open: &str, close: &str) -> String {
        self.lines
            .iter()
            .map(|l| {
                if l.changed {
                    format!("{}{}{}", open, l.text, close)
                } else {
                    l.text.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
