//! User configuration.
//!
//! Configuration is a small TOML file:
//!
//! ```toml
//! theme = "light"          # dark, light or high-contrast
//! color = "auto"           # auto, always or never
//! catalog = "my-css.toml"  # optional external catalog
//!
//! [palette]                # per-token-class color overrides
//! keyword = "#ff79c6"
//! property-name = "#8be9fd"
//! fallback = "#cccccc"
//! ```
//!
//! The file is looked up at `$CSSREF_CONFIG`, then at `config.toml` in the
//! platform config directory (for example `~/.config/cssref/config.toml`).
//! A missing file means defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cssref_highlight::TokenClass;
use cssref_style::{Color, Theme, ThemeMode};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::logging::targets;
use crate::render::ColorMode;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CSSREF_CONFIG";

/// Palette key for lines that are not declarations.
const FALLBACK_KEY: &str = "fallback";

/// Settings read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Built-in theme to start from.
    pub theme: ThemeMode,
    /// When to emit ANSI colors.
    pub color: ColorMode,
    /// External catalog replacing the built-in one.
    pub catalog: Option<PathBuf>,
    /// Color overrides keyed by token class name.
    pub palette: BTreeMap<String, Color>,
}

impl Config {
    /// Parse configuration text. `path` is only used in error messages.
    pub fn from_toml_str(text: &str, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(text).map_err(|e| ConfigError::parse(path.as_ref(), e))?;
        config.check_palette_keys()?;
        Ok(config)
    }

    /// Read a config file. The file must exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Read the config from `$CSSREF_CONFIG` or the default location.
    ///
    /// A missing file at the default location yields the default config; a
    /// missing file named by `$CSSREF_CONFIG` is an error.
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load(PathBuf::from(path));
        }

        match default_path() {
            Some(path) if path.is_file() => Self::load(path),
            Some(path) => {
                tracing::debug!(
                    target: targets::CONFIG,
                    path = %path.display(),
                    "no config file, using defaults"
                );
                Ok(Self::default())
            }
            None => {
                tracing::debug!(target: targets::CONFIG, "no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// The effective theme: the built-in theme for `theme` with the
    /// `[palette]` overrides applied.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        let base = Theme::from_mode(self.theme);
        let mut palette = base.palette.clone();

        for (name, color) in &self.palette {
            if name == FALLBACK_KEY {
                palette.fallback = *color;
            } else {
                let class = parse_class(name)?;
                palette = palette.with_color(class, *color);
            }
        }

        Ok(base.with_palette(palette))
    }

    fn check_palette_keys(&self) -> Result<(), ConfigError> {
        for name in self.palette.keys() {
            if name != FALLBACK_KEY {
                parse_class(name)?;
            }
        }
        Ok(())
    }
}

/// `config.toml` in the platform config directory, if one can be determined.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cssref").map(|dirs| dirs.config_dir().join("config.toml"))
}

fn parse_class(name: &str) -> Result<TokenClass, ConfigError> {
    name.parse::<TokenClass>()
        .map_err(|_| ConfigError::UnknownTokenClass {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let config = Config::from_toml_str("", "config.toml").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme().unwrap(), Theme::dark());
    }

    #[test]
    fn full_config() {
        let config = Config::from_toml_str(
            r##"
                theme = "light"
                color = "never"
                catalog = "extra.toml"

                [palette]
                keyword = "#ff79c6"
                plain-text = "#abc"
                fallback = "#cccccc"
            "##,
            "config.toml",
        )
        .unwrap();

        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.catalog.as_deref(), Some(Path::new("extra.toml")));

        let theme = config.theme().unwrap();
        assert_eq!(theme.mode, ThemeMode::Light);
        assert_eq!(theme.palette.keyword.to_hex(), "#ff79c6");
        assert_eq!(theme.palette.plain_text.to_hex(), "#aabbcc");
        assert_eq!(theme.palette.fallback.to_hex(), "#cccccc");
        assert_eq!(theme.variables.get("tok-keyword"), Some("#ff79c6"));
        assert_eq!(theme.palette.number, Theme::light().palette.number);
    }

    #[test]
    fn unknown_palette_key_is_rejected() {
        let err = Config::from_toml_str("[palette]\nstring = \"#fff\"", "config.toml").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTokenClass { ref name } if name == "string"));
    }

    #[test]
    fn unknown_field_and_bad_color_are_parse_errors() {
        for text in ["themes = \"dark\"", "[palette]\nkeyword = \"pink\"", "theme = \"sepia\""] {
            let err = Config::from_toml_str(text, "config.toml").unwrap_err();
            assert!(matches!(err, ConfigError::Parse { .. }), "{text}: {err}");
        }
    }
}
