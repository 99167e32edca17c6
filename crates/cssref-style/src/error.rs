//! Error types for the styling layer.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing colors, themes, and inline styles.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Inline style parsing error.
    #[error("CSS parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// A color literal that is not `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    #[error("Invalid color '{input}': expected #rgb, #rgba, #rrggbb or #rrggbbaa")]
    InvalidColor { input: String },

    /// Unknown theme name.
    #[error("Unknown theme '{name}': expected dark, light or high-contrast")]
    UnknownTheme { name: String },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a color error.
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
        }
    }

    /// Create a theme error.
    pub fn unknown_theme(name: impl Into<String>) -> Self {
        Self::UnknownTheme { name: name.into() }
    }
}
