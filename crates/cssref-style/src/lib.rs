//! Colors, themes, and inline style parsing for cssref.
//!
//! This crate provides the styling layer around the declaration tokenizer:
//!
//! - **Colors**: 8-bit RGBA with hex parsing and formatting
//! - **Palettes**: one color per token class, with dark, light, and
//!   high-contrast built-ins
//! - **Themes**: a palette plus the CSS variables generated from it
//! - **Inline styles**: `cssparser`-based parsing of `name: value; ...` blocks
//!
//! # Example
//!
//! ```
//! use cssref_highlight::TokenClass;
//! use cssref_style::{Theme, ThemeMode};
//!
//! let theme = Theme::from_mode("light".parse::<ThemeMode>().unwrap());
//! let keyword = theme.palette.color_for(TokenClass::Keyword);
//! assert_eq!(theme.variables.get("tok-keyword"), Some(keyword.to_hex().as_str()));
//! ```

pub mod color;
pub mod parser;
pub mod theme;

mod error;

pub use color::Color;
pub use error::{Error, Result};
pub use parser::{InlineDeclaration, InlineStyle, parse_inline_style};
pub use theme::{SyntaxPalette, Theme, ThemeMode, ThemeVariables};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::parser::{InlineDeclaration, InlineStyle, parse_inline_style};
    pub use crate::theme::{SyntaxPalette, Theme, ThemeMode, ThemeVariables};
    pub use crate::{Error, Result};
}
