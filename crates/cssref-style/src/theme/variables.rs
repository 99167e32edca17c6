//! CSS variables (custom properties) for HTML output.

use std::collections::BTreeMap;
use std::fmt::Write;

use cssref_highlight::TokenClass;

use super::SyntaxPalette;

/// CSS custom properties derived from a palette.
///
/// Token colors are exposed as `--tok-<class>` (for example
/// `--tok-property-name`), page colors under their own names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeVariables {
    variables: BTreeMap<String, String>,
}

impl ThemeVariables {
    /// Create empty variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create variables from a syntax palette.
    pub fn from_palette(palette: &SyntaxPalette) -> Self {
        let mut vars = Self::new();

        for class in TokenClass::ALL {
            vars.set(
                format!("tok-{}", class.name()),
                palette.color_for(class).to_hex(),
            );
        }
        vars.set("tok-fallback", palette.fallback.to_hex());

        // Page colors
        vars.set("background", palette.background.to_hex());
        vars.set("surface", palette.surface.to_hex());
        vars.set("text", palette.text.to_hex());
        vars.set("muted", palette.muted.to_hex());
        vars.set("accent", palette.accent.to_hex());

        // Layout
        vars.set("radius-md", "8px");
        vars.set("radius-full", "9999px");
        vars.set("spacing-sm", "8px");
        vars.set("spacing-md", "16px");
        vars.set("font-mono", "ui-monospace, SFMono-Regular, Menlo, monospace");

        vars
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        // Remove leading "--" if present
        let name = name.strip_prefix("--").unwrap_or(&name).to_string();
        self.variables.insert(name, value.into());
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables.get(name).map(|s| s.as_str())
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables.contains_key(name)
    }

    /// Iterate over all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Render the variables as a `:root { ... }` block.
    pub fn to_css_root(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            // Writing into a String cannot fail.
            let _ = writeln!(css, "  --{name}: {value};");
        }
        css.push('}');
        css
    }
}
