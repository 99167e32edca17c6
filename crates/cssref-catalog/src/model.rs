//! Catalog data model.

use serde::{Deserialize, Serialize};

/// The whole reference: categories in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

/// A group of related properties shown together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier, e.g. `layout`.
    pub id: String,
    /// Display name, e.g. `Layout`.
    pub name: String,
    /// Icon name (lucide icon set).
    #[serde(default)]
    pub icon: String,
    pub properties: Vec<Property>,
}

/// One documented CSS property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Syntax line, e.g. `display: value;`.
    pub syntax: String,
    /// Common values shown as chips.
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

/// A highlighted declaration and the inline styles of its live preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// The declaration shown in the code strip.
    pub code: String,
    /// Inline declaration block applied to the preview element.
    #[serde(default)]
    pub styles: String,
}

impl Catalog {
    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a property by id, with the category it belongs to.
    ///
    /// Returns the first match in catalog order.
    pub fn property(&self, id: &str) -> Option<(&Category, &Property)> {
        self.categories
            .iter()
            .find_map(|category| category.property(id).map(|property| (category, property)))
    }

    /// The category shown when nothing is selected.
    pub fn first_category(&self) -> Option<&Category> {
        self.categories.first()
    }

    /// Total number of properties across all categories.
    pub fn property_count(&self) -> usize {
        self.categories.iter().map(|c| c.properties.len()).sum()
    }
}

impl Category {
    /// Look up a property of this category by id.
    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }
}

impl Property {
    /// Whether the name, description, or any common value contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .values
                .iter()
                .any(|value| value.to_lowercase().contains(needle))
    }
}
