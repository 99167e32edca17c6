//! ANSI terminal output.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use cssref_catalog::{
    Catalog, Category, DemoKind, Property, SearchQuery, filter_category, no_results_message,
    result_label,
};
use cssref_highlight::CssHighlighter;
use cssref_style::{Color, SyntaxPalette, Theme};
use serde::{Deserialize, Serialize};

use super::segments;
use crate::error::{ConfigError, RenderResult};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// When to emit ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Color when writing to a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode for an output stream.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(ConfigError::UnknownColorMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Writes highlighted declarations and catalog listings to a terminal.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    palette: SyntaxPalette,
    colors: bool,
    highlighter: CssHighlighter,
}

impl TerminalRenderer {
    /// Create a renderer. With `colors` off, output is plain text.
    pub fn new(theme: &Theme, colors: bool) -> Self {
        Self {
            palette: theme.palette.clone(),
            colors,
            highlighter: CssHighlighter::new(),
        }
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.colors && !text.is_empty() {
            format!("\x1b[38;2;{};{};{}m{text}{RESET}", color.r, color.g, color.b)
        } else {
            text.to_string()
        }
    }

    fn bold(&self, color: Color, text: &str) -> String {
        if self.colors {
            format!("{BOLD}{}", self.paint(color, text))
        } else {
            text.to_string()
        }
    }

    /// Highlight one line. Without colors this returns the line unchanged.
    pub fn paint_line(&self, line: &str) -> String {
        segments(&self.highlighter, line)
            .into_iter()
            .map(|segment| {
                let color = match segment.class {
                    Some(class) => self.palette.color_for(class),
                    None => self.palette.fallback,
                };
                self.paint(color, segment.text)
            })
            .collect()
    }

    /// Write one highlighted line followed by a newline.
    pub fn write_highlighted<W: Write>(&self, out: &mut W, line: &str) -> RenderResult<()> {
        writeln!(out, "{}", self.paint_line(line))?;
        Ok(())
    }

    /// Write the classified spans of `line`, one per row:
    /// `class<TAB>start..end<TAB>text`.
    pub fn write_tokens<W: Write>(&self, out: &mut W, line: &str) -> RenderResult<()> {
        for span in cssref_highlight::classify(line) {
            writeln!(
                out,
                "{}\t{}..{}\t{:?}",
                self.paint(self.palette.color_for(span.class), span.class.name()),
                span.start,
                span.end,
                span.text
            )?;
        }
        Ok(())
    }

    /// Write every category with its property count.
    pub fn write_categories<W: Write>(&self, out: &mut W, catalog: &Catalog) -> RenderResult<()> {
        writeln!(out, "{}", self.bold(self.palette.text, "Categories"))?;
        for category in &catalog.categories {
            writeln!(
                out,
                "  {} {:<16} {}",
                self.paint(self.palette.accent, &format!("{:<14}", category.id)),
                category.name,
                self.paint(self.palette.muted, &category.properties.len().to_string()),
            )?;
        }
        writeln!(
            out,
            "{}",
            self.paint(self.palette.muted, &result_label(catalog.property_count()))
        )?;
        Ok(())
    }

    /// Write the properties of one category that match `query`.
    pub fn write_category<W: Write>(
        &self,
        out: &mut W,
        category: &Category,
        query: &SearchQuery,
    ) -> RenderResult<()> {
        let properties = filter_category(category, query);
        self.write_heading(out, &category.name, properties.len())?;
        for property in properties {
            self.write_property(out, property, None)?;
        }
        Ok(())
    }

    /// Write catalog-wide search results, or the first category when the
    /// query is blank.
    pub fn write_search<W: Write>(
        &self,
        out: &mut W,
        catalog: &Catalog,
        query: &SearchQuery,
    ) -> RenderResult<()> {
        let Some(hits) = catalog.search(query) else {
            return match catalog.first_category() {
                Some(category) => self.write_category(out, category, query),
                None => Ok(()),
            };
        };

        self.write_heading(out, "Search Results", hits.len())?;
        if hits.is_empty() {
            writeln!(out, "{}", no_results_message(query.as_str()))?;
            writeln!(
                out,
                "{}",
                self.paint(self.palette.muted, "Try searching for something else")
            )?;
        }
        for hit in hits {
            self.write_property(out, hit.property, Some(hit.category))?;
        }
        Ok(())
    }

    fn write_heading<W: Write>(&self, out: &mut W, title: &str, count: usize) -> RenderResult<()> {
        writeln!(out, "{}", self.bold(self.palette.accent, title))?;
        writeln!(out, "{}", self.paint(self.palette.muted, &result_label(count)))?;
        Ok(())
    }

    /// Write a property card: name, description, syntax, common values, and
    /// each example with the styles of its preview.
    pub fn write_property<W: Write>(
        &self,
        out: &mut W,
        property: &Property,
        from: Option<&str>,
    ) -> RenderResult<()> {
        writeln!(out)?;
        if let Some(category) = from {
            writeln!(
                out,
                "{} {}",
                self.paint(self.palette.muted, "From:"),
                self.bold(self.palette.accent, category)
            )?;
        }
        writeln!(out, "{}", self.bold(self.palette.text, &property.name))?;
        writeln!(out, "  {}", property.description)?;

        writeln!(out, "  {}", self.bold(self.palette.muted, "Syntax:"))?;
        writeln!(out, "    {}", self.paint_line(&property.syntax))?;

        if !property.values.is_empty() {
            let values: Vec<String> = property
                .values
                .iter()
                .map(|value| self.paint(self.palette.accent, value))
                .collect();
            writeln!(out, "  {}", self.bold(self.palette.muted, "Common Values:"))?;
            writeln!(out, "    {}", values.join("  "))?;
        }

        if !property.examples.is_empty() {
            writeln!(out, "  {}", self.bold(self.palette.muted, "Live Examples:"))?;
            for example in &property.examples {
                writeln!(out, "    {}", self.paint_line(&example.code))?;
                let demo = DemoKind::for_example(property, example);
                let preview = match demo.text() {
                    Some(text) => format!("{} ({})", example.styles, text),
                    None => format!("{} ({} items)", example.styles, demo.items().len()),
                };
                writeln!(out, "      {}", self.paint(self.palette.muted, &preview))?;
            }
        }
        Ok(())
    }
}

static_assertions::assert_impl_all!(TerminalRenderer: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TerminalRenderer {
        TerminalRenderer::new(&Theme::dark(), false)
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> RenderResult<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn color_mode_parsing_and_resolution() {
        assert_eq!("ALWAYS".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert!("sometimes".parse::<ColorMode>().is_err());
        assert!(ColorMode::Always.enabled(false));
        assert!(!ColorMode::Never.enabled(true));
        assert!(!ColorMode::Auto.enabled(false));
    }

    #[test]
    fn plain_mode_reproduces_the_line() {
        let line = "box-shadow: 0 2px 4px rgba(0,0,0,0.1);";
        assert_eq!(plain().paint_line(line), line);
    }

    #[test]
    fn colored_spans_use_palette() {
        let renderer = TerminalRenderer::new(&Theme::dark(), true);
        let painted = renderer.paint_line("color: #3b82f6");
        // property name in blue-400, color literal in purple-400
        assert!(painted.starts_with("\x1b[38;2;96;165;250mcolor\x1b[0m"));
        assert!(painted.contains("\x1b[38;2;192;132;252m#3b82f6\x1b[0m"));
    }

    #[test]
    fn fallback_line_uses_fallback_color() {
        let renderer = TerminalRenderer::new(&Theme::dark(), true);
        assert_eq!(
            renderer.paint_line("Item 1"),
            "\x1b[38;2;209;213;219mItem 1\x1b[0m"
        );
    }

    #[test]
    fn tokens_table() {
        let text = render(|out| plain().write_tokens(out, "display: flex;"));
        assert_eq!(
            text,
            "property-name\t0..7\t\"display\"\ncolon\t7..9\t\": \"\nkeyword\t9..13\t\"flex\"\nsemicolon\t13..14\t\";\"\n"
        );
    }

    #[test]
    fn property_card() {
        let catalog = Catalog::builtin();
        let (_, property) = catalog.property("display").unwrap();
        let text = render(|out| plain().write_property(out, property, Some("Layout")));

        assert!(text.contains("From: Layout\ndisplay\n"));
        assert!(text.contains("    display: value;\n"));
        assert!(text.contains("block  inline  inline-block"));
        assert!(text.contains("    display: flex\n"));
        assert!(text.contains("(Demo Box)"));
    }

    #[test]
    fn search_without_hits() {
        let text = render(|out| {
            plain().write_search(out, Catalog::builtin(), &SearchQuery::new("qqq"))
        });
        assert!(text.starts_with("Search Results\n0 properties found\n"));
        assert!(text.contains("No properties found matching \"qqq\""));
    }

    #[test]
    fn blank_search_shows_first_category() {
        let text = render(|out| {
            plain().write_search(out, Catalog::builtin(), &SearchQuery::new(" "))
        });
        assert!(text.starts_with("Layout\n4 properties found\n"));
    }

    #[test]
    fn category_list() {
        let text = render(|out| plain().write_categories(out, Catalog::builtin()));
        assert!(text.contains("  layout         Layout           4\n"));
        assert!(text.ends_with("39 properties found\n"));
    }
}
