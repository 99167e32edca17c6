//! Error types for catalog loading.

use std::path::PathBuf;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog is not valid TOML or does not match the catalog schema.
    #[error("Failed to parse catalog{}: {source}", display_path(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },

    /// Catalog parsed but breaks a structural rule.
    #[error("Invalid catalog: {message}")]
    Invalid { message: String },

    /// An example's inline style block could not be parsed.
    #[error("Invalid styles in example {index} of property '{property}': {source}")]
    Style {
        property: String,
        index: usize,
        #[source]
        source: cssref_style::Error,
    },
}

impl CatalogError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(path: Option<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse { path, source }
    }

    /// Create a validation error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" '{}'", path.display()),
        None => String::new(),
    }
}
