//! Standalone HTML export.
//!
//! The page is self-contained: colors come from the theme's CSS variables,
//! each highlighted span is a `<span class="tok tok-<class>">`, and each
//! example gets a live preview carrying the example's inline styles.

use std::fmt::Write;

use cssref_catalog::{Catalog, DemoKind, Example, Property, SearchQuery, no_results_message, result_label};
use cssref_highlight::CssHighlighter;
use cssref_style::{InlineDeclaration, InlineStyle, Theme};

use super::segments;
use crate::error::{RenderError, RenderResult};
use crate::logging::targets;

const STYLESHEET: &str = r#"
body { margin: 0; background: var(--background); color: var(--text); font-family: system-ui, sans-serif; }
main { max-width: 64rem; margin: 0 auto; padding: var(--spacing-md); }
nav a { color: var(--accent); margin-right: var(--spacing-sm); text-decoration: none; }
.count { color: var(--muted); font-size: 0.875rem; }
.from { color: var(--muted); font-size: 0.875rem; }
.from strong { color: var(--accent); }
.card { background: var(--surface); border-radius: var(--radius-md); padding: 1.5rem; margin: var(--spacing-md) 0; }
.chip { display: inline-block; color: var(--accent); border: 1px solid var(--accent); border-radius: var(--radius-full); padding: 0.125rem 0.75rem; margin: 0 0.25rem 0.25rem 0; font-family: var(--font-mono); }
code { display: block; font-family: var(--font-mono); padding: 0.5rem 0.75rem; background: var(--background); border-radius: var(--radius-md); }
.preview { display: flex; align-items: center; justify-content: center; min-height: 120px; padding: 1.5rem; }
.tok-property-name { color: var(--tok-property-name); }
.tok-colon { color: var(--tok-colon); }
.tok-color { color: var(--tok-color); }
.tok-number { color: var(--tok-number); }
.tok-keyword { color: var(--tok-keyword); }
.tok-plain-text { color: var(--tok-plain-text); }
.tok-semicolon { color: var(--tok-semicolon); }
.tok-fallback { color: var(--tok-fallback); }
"#;

/// Writes the catalog, or a search over it, as a standalone HTML page.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    theme: Theme,
    highlighter: CssHighlighter,
}

impl HtmlRenderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            highlighter: CssHighlighter::new(),
        }
    }

    /// Highlight one line as a sequence of `<span>` elements.
    pub fn highlight(&self, line: &str) -> String {
        segments(&self.highlighter, line)
            .into_iter()
            .map(|segment| {
                let class = segment.class.map_or("fallback", |class| class.name());
                format!(
                    r#"<span class="tok tok-{class}">{}</span>"#,
                    escape_html(segment.text)
                )
            })
            .collect()
    }

    /// Every category, each with all of its properties.
    pub fn catalog_page(&self, catalog: &Catalog) -> RenderResult<String> {
        let mut body = String::new();

        body.push_str("<nav>");
        for category in &catalog.categories {
            write!(
                body,
                r##"<a href="#cat-{}">{}</a>"##,
                escape_html(&category.id),
                escape_html(&category.name)
            )?;
        }
        body.push_str("</nav>\n");

        for category in &catalog.categories {
            write!(
                body,
                "<section id=\"cat-{}\">\n<h2>{}</h2>\n<p class=\"count\">{}</p>\n",
                escape_html(&category.id),
                escape_html(&category.name),
                result_label(category.properties.len())
            )?;
            for property in &category.properties {
                self.write_property(&mut body, property, None)?;
            }
            body.push_str("</section>\n");
        }

        self.page("CSS Reference Guide", &body)
    }

    /// Search results across the catalog. A blank query renders the whole
    /// catalog.
    pub fn search_page(&self, catalog: &Catalog, query: &SearchQuery) -> RenderResult<String> {
        let Some(hits) = catalog.search(query) else {
            return self.catalog_page(catalog);
        };

        let mut body = String::new();
        write!(
            body,
            "<h2>Search Results</h2>\n<p class=\"count\">{}</p>\n",
            result_label(hits.len())
        )?;
        if hits.is_empty() {
            write!(
                body,
                "<div class=\"card\"><p>{}</p><p class=\"count\">Try searching for something else</p></div>\n",
                escape_html(&no_results_message(query.as_str()))
            )?;
        }
        for hit in &hits {
            self.write_property(&mut body, hit.property, Some(hit.category))?;
        }

        self.page(&format!("CSS Reference Guide: {}", query.as_str()), &body)
    }

    fn page(&self, title: &str, body: &str) -> RenderResult<String> {
        let mut html = String::new();
        write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n{}</style>\n</head>\n<body data-theme=\"{}\">\n<main>\n<h1>CSS Reference Guide</h1>\n{}</main>\n</body>\n</html>\n",
            escape_html(title),
            self.theme.variables.to_css_root(),
            STYLESHEET,
            self.theme.mode,
            body
        )?;
        tracing::debug!(target: targets::RENDER, bytes = html.len(), "rendered html page");
        Ok(html)
    }

    fn write_property(
        &self,
        html: &mut String,
        property: &Property,
        from: Option<&str>,
    ) -> RenderResult<()> {
        if let Some(category) = from {
            write!(
                html,
                "<div class=\"from\">From: <strong>{}</strong></div>\n",
                escape_html(category)
            )?;
        }
        write!(
            html,
            "<article class=\"card\" id=\"prop-{}\">\n<h3>{}</h3>\n<p>{}</p>\n",
            escape_html(&property.id),
            escape_html(&property.name),
            escape_html(&property.description)
        )?;

        write!(
            html,
            "<h4>Syntax:</h4>\n<code>{}</code>\n",
            self.highlight(&property.syntax)
        )?;

        if !property.values.is_empty() {
            html.push_str("<h4>Common Values:</h4>\n<div>");
            for value in &property.values {
                write!(html, "<span class=\"chip\">{}</span>", escape_html(value))?;
            }
            html.push_str("</div>\n");
        }

        if !property.examples.is_empty() {
            html.push_str("<h4>Live Examples:</h4>\n");
            for example in &property.examples {
                self.write_example(html, property, example)?;
            }
        }

        html.push_str("</article>\n");
        Ok(())
    }

    fn write_example(
        &self,
        html: &mut String,
        property: &Property,
        example: &Example,
    ) -> RenderResult<()> {
        let demo = DemoKind::for_example(property, example);
        let style = preview_style(property, example, &demo)?;

        write!(
            html,
            "<div class=\"example\">\n<code>{}</code>\n<div class=\"preview\"><div style=\"{}\">",
            self.highlight(&example.code),
            escape_html(&style.to_string())
        )?;
        if let Some(text) = demo.text() {
            html.push_str(&escape_html(text));
        }
        for item in demo.items() {
            write!(
                html,
                "<div style=\"{}\">{}</div>",
                escape_html(&item.style),
                escape_html(&item.label)
            )?;
        }
        html.push_str("</div></div>\n</div>\n");
        Ok(())
    }
}

/// The example's declarations followed by the demo's overrides.
fn preview_style(
    property: &Property,
    example: &Example,
    demo: &DemoKind,
) -> RenderResult<InlineStyle> {
    let mut style = InlineStyle::parse(&example.styles).map_err(|source| RenderError::Style {
        property: property.id.clone(),
        source,
    })?;
    style.extend(
        demo.style_overrides()
            .iter()
            .map(|(name, value)| InlineDeclaration::new(*name, *value)),
    );
    Ok(style)
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

static_assertions::assert_impl_all!(HtmlRenderer: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaping() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }

    #[test]
    fn highlighted_spans() {
        let html = HtmlRenderer::new(Theme::dark()).highlight("width: 100%;");
        assert_eq!(
            html,
            concat!(
                r#"<span class="tok tok-property-name">width</span>"#,
                r#"<span class="tok tok-colon">: </span>"#,
                r#"<span class="tok tok-number">100%</span>"#,
                r#"<span class="tok tok-semicolon">;</span>"#,
            )
        );
    }

    #[test]
    fn non_declaration_uses_fallback_class() {
        let html = HtmlRenderer::new(Theme::dark()).highlight("a < b");
        assert_eq!(html, r#"<span class="tok tok-fallback">a &lt; b</span>"#);
    }

    #[test]
    fn shadow_preview_layers_overrides() {
        let (_, property) = Catalog::builtin().property("box-shadow").unwrap();
        let example = &property.examples[0];
        let demo = DemoKind::for_example(property, example);
        let style = preview_style(property, example, &demo).unwrap();

        let css = style.to_string();

        assert!(css.starts_with("box-shadow: 0 2px 4px rgba(0,0,0,0.1); background-color: white"));
        assert!(css.ends_with("text-align: center"));
        assert_eq!(style.get("box-shadow"), Some("0 2px 4px rgba(0,0,0,0.1)"));
        assert_eq!(style.get("Background-Color"), Some("white"));
    }

    #[test]
    fn catalog_page_has_every_category() {
        let catalog = Catalog::builtin();
        let html = HtmlRenderer::new(Theme::light()).catalog_page(catalog).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("--tok-keyword:"));
        assert!(html.contains("<body data-theme=\"light\">"));
        for category in &catalog.categories {
            assert!(html.contains(&format!("<section id=\"cat-{}\">", category.id)));
        }
        assert_eq!(html.matches("<article ").count(), catalog.property_count());
    }

    #[test]
    fn search_page_lists_hits_with_category() {
        let html = HtmlRenderer::new(Theme::dark())
            .search_page(Catalog::builtin(), &SearchQuery::new("ellipsis"))
            .unwrap();
        assert!(html.contains("<p class=\"count\">1 property found</p>"));
        assert!(html.contains("From: <strong>Overflow</strong>"));
        assert!(html.contains("This is a very long text that will be truncated with ellipsis"));
    }

    #[test]
    fn item_previews_have_children() {
        let html = HtmlRenderer::new(Theme::dark())
            .search_page(Catalog::builtin(), &SearchQuery::new("justify-content"))
            .unwrap();
        assert!(html.contains(">1</div>"));
        assert!(html.contains("height: 5rem"));
    }
}
