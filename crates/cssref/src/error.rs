//! Error types for configuration and rendering.

use std::path::PathBuf;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unknown or mistyped keys.
    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A palette override names a token class that does not exist.
    #[error("Unknown token class '{name}' in [palette]")]
    UnknownTokenClass { name: String },

    /// Unknown color mode.
    #[error("Unknown color mode '{value}': expected auto, always or never")]
    UnknownColorMode { value: String },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur while rendering output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Writing the output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Formatting into a buffer failed.
    #[error("Failed to format output")]
    Fmt(#[from] std::fmt::Error),

    /// An example's inline styles could not be parsed.
    #[error("Invalid styles for '{property}': {source}")]
    Style {
        property: String,
        #[source]
        source: cssref_style::Error,
    },
}

/// Result type alias for rendering.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
