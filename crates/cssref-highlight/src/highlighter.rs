//! Line-oriented highlighting on top of the classifier.

use crate::classify::classify;
use crate::token::{ClassifiedSpan, TokenClass};

/// A highlighted range of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Start byte offset within the line.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Token class used to pick the color.
    pub class: TokenClass,
}

impl HighlightSpan {
    /// Create a new highlight span.
    pub fn new(start: usize, end: usize, class: TokenClass) -> Self {
        Self { start, end, class }
    }

    /// The text this span covers in `line`.
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}

impl From<&ClassifiedSpan> for HighlightSpan {
    fn from(span: &ClassifiedSpan) -> Self {
        Self::new(span.start, span.end, span.class)
    }
}

/// Trait for syntax highlighting implementations.
///
/// The highlighter is called once per line. Returned spans must be sorted by
/// start offset and must not overlap.
pub trait SyntaxHighlighter: Send + Sync {
    /// Highlight a single line of text (without its trailing newline).
    fn highlight_line(&self, line: &str, line_number: usize) -> Vec<HighlightSpan>;

    /// Highlight every line of `text`.
    fn highlight_block(&self, text: &str) -> Vec<Vec<HighlightSpan>> {
        text.lines()
            .enumerate()
            .map(|(number, line)| self.highlight_line(line, number))
            .collect()
    }
}

/// Highlighter for single-line `property: value` declarations.
///
/// Lines that are not declarations come back as one plain-text span, so every
/// line is fully covered.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssHighlighter;

impl CssHighlighter {
    pub fn new() -> Self {
        Self
    }
}

impl SyntaxHighlighter for CssHighlighter {
    fn highlight_line(&self, line: &str, _line_number: usize) -> Vec<HighlightSpan> {
        classify(line).iter().map(HighlightSpan::from).collect()
    }
}

static_assertions::assert_impl_all!(CssHighlighter: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_line_matches_classify() {
        let line = "margin: 10px auto";
        let spans = CssHighlighter::new().highlight_line(line, 0);

        let rebuilt: String = spans.iter().map(|s| s.text(line)).collect();
        assert_eq!(rebuilt, line);
        assert_eq!(spans.last().map(|s| s.class), Some(TokenClass::Keyword));
    }

    #[test]
    fn block_is_highlighted_per_line() {
        let text = "display: flex;\nflex-direction: row;";
        let lines = CssHighlighter.highlight_block(text);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0][0], HighlightSpan::new(0, 7, TokenClass::PropertyName));
        assert_eq!(lines[1][0], HighlightSpan::new(0, 14, TokenClass::PropertyName));
    }

    #[test]
    fn multi_declaration_line_splits_on_first_colon() {
        let line = "display: flex; flex-direction: value;";
        let spans = CssHighlighter.highlight_line(line, 0);
        assert_eq!(spans[0].text(line), "display");
        assert_eq!(spans.last().map(|s| s.class), Some(TokenClass::Semicolon));
    }
}
