//! Terminal and HTML output.
//!
//! Both renderers color the same segment sequence, produced by
//! [`segments`] from the declaration highlighter.

mod html;
mod terminal;

pub use html::{HtmlRenderer, escape_html};
pub use terminal::{ColorMode, TerminalRenderer};

use cssref_highlight::{SyntaxHighlighter, TokenClass, split_declaration};

/// A run of text and the token class that colors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// `None` for a line that is not a declaration.
    pub class: Option<TokenClass>,
    pub text: &'a str,
}

/// Split one line into colored segments.
///
/// Lines that are not `name: value` declarations come back as a single
/// segment without a class, so they can use the palette's fallback color.
pub fn segments<'a>(highlighter: &dyn SyntaxHighlighter, line: &'a str) -> Vec<Segment<'a>> {
    if split_declaration(line).is_none() {
        return vec![Segment {
            class: None,
            text: line,
        }];
    }

    highlighter
        .highlight_line(line, 0)
        .into_iter()
        .map(|span| Segment {
            class: Some(span.class),
            text: span.text(line),
        })
        .collect()
}
