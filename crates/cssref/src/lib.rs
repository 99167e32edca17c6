//! A CSS property reference with syntax-highlighted declarations.
//!
//! This crate ties the cssref crates together:
//!
//! - **Highlighting**: [`cssref_highlight`] classifies declarations into
//!   colored spans
//! - **Styling**: [`cssref_style`] provides palettes, themes, and inline
//!   style parsing
//! - **Catalog**: [`cssref_catalog`] holds the property data and search
//! - **Rendering**: ANSI terminal output and standalone HTML pages
//! - **Configuration**: theme, color mode, and palette overrides from TOML
//!
//! # Example
//!
//! ```
//! use cssref::prelude::*;
//!
//! let renderer = TerminalRenderer::new(&Theme::dark(), false);
//! assert_eq!(renderer.paint_line("gap: 1rem"), "gap: 1rem");
//!
//! let hits = Catalog::builtin().search(&SearchQuery::new("gap")).unwrap();
//! assert!(hits.iter().any(|hit| hit.property.id == "gap"));
//! ```

pub mod config;
pub mod logging;
pub mod render;

mod error;

pub use config::Config;
pub use error::{ConfigError, RenderError, RenderResult};

pub use cssref_catalog as catalog;
pub use cssref_highlight as highlight;
pub use cssref_style as style;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{ConfigError, RenderError};
    pub use crate::render::{ColorMode, HtmlRenderer, TerminalRenderer};
    pub use cssref_catalog::{Catalog, Category, DemoKind, Property, SearchQuery};
    pub use cssref_highlight::{
        ClassifiedSpan, CssHighlighter, SyntaxHighlighter, TokenClass, classify,
    };
    pub use cssref_style::{Color, SyntaxPalette, Theme, ThemeMode};
}
