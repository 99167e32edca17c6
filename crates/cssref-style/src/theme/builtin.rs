//! Built-in themes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{SyntaxPalette, ThemeVariables};
use crate::Error;

/// Theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl ThemeMode {
    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
            ThemeMode::HighContrast => "high-contrast",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            "high-contrast" | "highcontrast" => Ok(ThemeMode::HighContrast),
            _ => Err(Error::unknown_theme(s)),
        }
    }
}

/// A complete theme: mode, palette, and the CSS variables derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme mode.
    pub mode: ThemeMode,
    /// Syntax and page colors.
    pub palette: SyntaxPalette,
    /// CSS variables.
    pub variables: ThemeVariables,
}

impl Theme {
    /// Create a dark theme.
    pub fn dark() -> Self {
        Self::custom(ThemeMode::Dark, SyntaxPalette::dark())
    }

    /// Create a light theme.
    pub fn light() -> Self {
        Self::custom(ThemeMode::Light, SyntaxPalette::light())
    }

    /// Create a high-contrast theme.
    pub fn high_contrast() -> Self {
        Self::custom(ThemeMode::HighContrast, SyntaxPalette::high_contrast())
    }

    /// The built-in theme for a mode.
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
            ThemeMode::HighContrast => Self::high_contrast(),
        }
    }

    /// Create a custom theme from a palette.
    pub fn custom(mode: ThemeMode, palette: SyntaxPalette) -> Self {
        let variables = ThemeVariables::from_palette(&palette);
        Self {
            mode,
            palette,
            variables,
        }
    }

    /// Replace the palette and regenerate the variables.
    pub fn with_palette(self, palette: SyntaxPalette) -> Self {
        Self::custom(self.mode, palette)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
