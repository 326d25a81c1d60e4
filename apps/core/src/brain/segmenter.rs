//! Line Segmenter - splits a task dump into indexed, non-blank lines.

/// One non-blank input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// Position among non-blank lines (zero-based)
    pub index: usize,
    /// Line as it appeared in the input
    pub raw: &'a str,
}

impl<'a> Line<'a> {
    /// Trimmed content
    pub fn text(&self) -> &'a str {
        self.raw.trim()
    }
}

/// Split on `\n` and drop blank lines, keeping input order.
pub fn segment_lines(text: &str) -> Vec<Line<'_>> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, raw)| Line { index, raw })
        .collect()
}
