//! Case-insensitive substring search over the catalog.

use crate::model::{Catalog, Category, Property};

/// A normalized search query.
///
/// The query is trimmed and lower-cased once. A blank query is inactive:
/// it filters nothing and produces no search results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    /// Whether the query should filter anything.
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    /// The normalized text being searched for.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Whether `property` matches. An inactive query matches everything.
    pub fn matches(&self, property: &Property) -> bool {
        !self.is_active() || property.matches(&self.needle)
    }
}

impl From<&str> for SearchQuery {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

/// A property found by a catalog-wide search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// Display name of the category the property belongs to.
    pub category: &'a str,
    pub property: &'a Property,
}

/// The properties of `category` that match `query`, in category order.
pub fn filter_category<'a>(category: &'a Category, query: &SearchQuery) -> Vec<&'a Property> {
    category
        .properties
        .iter()
        .filter(|property| query.matches(property))
        .collect()
}

impl Catalog {
    /// Search every category.
    ///
    /// Returns `None` for an inactive query, otherwise every matching property
    /// in catalog order (possibly none).
    pub fn search(&self, query: &SearchQuery) -> Option<Vec<SearchHit<'_>>> {
        if !query.is_active() {
            return None;
        }

        let hits: Vec<SearchHit<'_>> = self
            .categories
            .iter()
            .flat_map(|category| {
                category
                    .properties
                    .iter()
                    .filter(move |property| query.matches(property))
                    .map(move |property| SearchHit {
                        category: &category.name,
                        property,
                    })
            })
            .collect();

        tracing::debug!(
            target: "cssref_catalog::search",
            query = query.as_str(),
            hits = hits.len(),
            "catalog search"
        );
        Some(hits)
    }
}

/// `"1 property found"` or `"N properties found"`.
pub fn result_label(count: usize) -> String {
    let noun = if count == 1 { "property" } else { "properties" };
    format!("{count} {noun} found")
}

/// Message shown when a search has no hits.
pub fn no_results_message(query: &str) -> String {
    format!("No properties found matching \"{query}\"")
}
