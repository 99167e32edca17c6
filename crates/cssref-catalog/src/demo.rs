//! Preview content for live examples.
//!
//! Each example is previewed as an element carrying the example's inline
//! styles. What goes inside that element depends on the property: layout
//! properties need child items to lay out, overflow properties need long text,
//! and everything else gets a short label.

use crate::model::{Example, Property};

const ITEM_BACKGROUNDS: [&str; 3] = ["#3b82f6", "#22c55e", "#f97316"];

const OVERFLOW_TEXT: &str = "This is a long text that will overflow the container. Lorem ipsum dolor sit amet, \
consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

const TRUNCATED_TEXT: &str = "This is a very long text that will be truncated with ellipsis";

/// Styles layered over the example's own styles for the shadow preview.
const SHADOW_BOX_OVERRIDES: &[(&str, &str)] = &[
    (
        "background",
        "linear-gradient(135deg, rgba(31, 41, 55, 0.8), rgba(17, 24, 39, 0.9))",
    ),
    ("border", "1px solid rgba(255, 255, 255, 0.1)"),
    ("padding", "2rem"),
    ("border-radius", "0.5rem"),
    ("color", "white"),
    ("font-weight", "500"),
    ("min-width", "200px"),
    ("text-align", "center"),
];

/// What a live preview contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoKind {
    /// A dark card labelled "Shadow Demo Box", with fixed styles on top.
    ShadowBox,
    /// Three colored items laid out by the container.
    ItemRow,
    /// Like `ItemRow`, with items that grow to fill the row.
    ItemRowFill,
    /// Three numbered items of different heights.
    AlignmentItems,
    /// A paragraph long enough to overflow.
    OverflowText,
    /// A single line long enough to be truncated.
    TruncatedText,
    /// A short label.
    Label(String),
}

/// A child element of an item preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoItem {
    pub label: String,
    /// Inline style of the item.
    pub style: String,
}

impl DemoKind {
    /// Pick the preview for one example of `property`.
    pub fn for_example(property: &Property, example: &Example) -> Self {
        match property.id.as_str() {
            "box-shadow" => DemoKind::ShadowBox,
            "flexbox" | "grid" => DemoKind::ItemRow,
            "gap" => DemoKind::ItemRowFill,
            "justify-content" | "align-items" => DemoKind::AlignmentItems,
            "overflow" => DemoKind::OverflowText,
            "text-overflow" => DemoKind::TruncatedText,
            id => DemoKind::Label(label_for(id, &example.code).to_string()),
        }
    }

    /// Text content of the preview element, if it has any.
    pub fn text(&self) -> Option<&str> {
        match self {
            DemoKind::ShadowBox => Some("Shadow Demo Box"),
            DemoKind::OverflowText => Some(OVERFLOW_TEXT),
            DemoKind::TruncatedText => Some(TRUNCATED_TEXT),
            DemoKind::Label(text) => Some(text.as_str()),
            DemoKind::ItemRow | DemoKind::ItemRowFill | DemoKind::AlignmentItems => None,
        }
    }

    /// Child items of the preview element.
    pub fn items(&self) -> Vec<DemoItem> {
        let base = "color: white; padding: 0.75rem; border-radius: 0.25rem";
        ITEM_BACKGROUNDS
            .iter()
            .enumerate()
            .filter_map(|(i, background)| {
                let (label, extra) = match self {
                    DemoKind::ItemRow => (format!("Item {}", i + 1), String::new()),
                    DemoKind::ItemRowFill => (format!("Item {}", i + 1), "; flex: 1".to_string()),
                    DemoKind::AlignmentItems => (
                        (i + 1).to_string(),
                        format!(
                            "; width: 4rem; height: {}rem; display: flex; align-items: center; justify-content: center",
                            3 + i
                        ),
                    ),
                    _ => return None,
                };
                Some(DemoItem {
                    label,
                    style: format!("background-color: {background}; {base}{extra}"),
                })
            })
            .collect()
    }

    /// Declarations applied after the example's own styles.
    pub fn style_overrides(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            DemoKind::ShadowBox => SHADOW_BOX_OVERRIDES,
            _ => &[],
        }
    }
}

fn label_for(property_id: &str, code: &str) -> &'static str {
    if property_id.contains("text") || property_id == "letter-spacing" || property_id == "line-height"
    {
        "Sample Text"
    } else if property_id == "color" || property_id.contains("shadow") {
        "CSS Demo Text"
    } else if property_id == "border-radius" && code.contains("50%") {
        "Circle"
    } else {
        "Demo Box"
    }
}
