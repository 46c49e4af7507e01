use crate::scan_review::domain::{DiffLine, LineDiff};

/// RemediationDiffer service for comparing original and remediated source
///
/// Lines are compared by position, not by content alignment: line `n` of the
/// remediated source is checked against line `n` of the original. An
/// inserted or deleted line therefore shifts every following line and marks
/// all of them as changed. This is a known limitation of the positional
/// comparison, kept on purpose so results match what the backend's users
/// already see.
pub struct RemediationDiffer;

impl RemediationDiffer {
    /// Marks every remediated line that differs from the original line at the same index
    ///
    /// # Returns
    /// - `None` when there is no remediated source
    /// - the remediated source with no marks when there is no original
    /// - otherwise the remediated lines, changed ones flagged
    pub fn diff_by_line(original: Option<&str>, remediated: Option<&str>) -> Option<LineDiff> {
        let remediated = remediated?;
        let Some(original) = original else {
            return Some(LineDiff::unchanged(remediated));
        };

        let original_lines: Vec<&str> = original.split('\n').collect();
        let lines = remediated
            .split('\n')
            .enumerate()
            .map(|(index, line)| DiffLine {
                number: index + 1,
                text: line.to_string(),
                changed: original_lines.get(index) != Some(&line),
            })
            .collect();

        Some(LineDiff::new(lines))
    }
}
