//! Inline style parsing.

mod inline;

pub use inline::{InlineDeclaration, InlineStyle, parse_inline_style};
