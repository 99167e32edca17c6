//! Loading and validating catalogs.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use cssref_style::parse_inline_style;

use crate::error::{CatalogError, Result};
use crate::model::Catalog;

/// The catalog shipped with the crate.
const BUILTIN_TOML: &str = include_str!("../data/catalog.toml");

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The built-in catalog, parsed on first use.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            let catalog =
                Catalog::from_toml_str(BUILTIN_TOML).expect("built-in catalog is valid");
            tracing::debug!(
                target: "cssref_catalog::load",
                categories = catalog.categories.len(),
                properties = catalog.property_count(),
                "loaded built-in catalog"
            );
            catalog
        })
    }

    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(text).map_err(|e| CatalogError::parse(None, e))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse, and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let catalog: Catalog =
            toml::from_str(&text).map_err(|e| CatalogError::parse(Some(path.to_path_buf()), e))?;
        catalog.validate()?;

        tracing::debug!(
            target: "cssref_catalog::load",
            path = %path.display(),
            categories = catalog.categories.len(),
            properties = catalog.property_count(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Check the structural rules every catalog must satisfy.
    ///
    /// - category ids are unique and non-empty
    /// - every category has a name and at least one property
    /// - property ids are unique within their category, names are non-empty
    /// - every example's `styles` parses as an inline declaration block
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(CatalogError::invalid("catalog has no categories"));
        }

        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() {
                return Err(CatalogError::invalid("category with an empty id"));
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::invalid(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }
            if category.name.trim().is_empty() {
                return Err(CatalogError::invalid(format!(
                    "category '{}' has an empty name",
                    category.id
                )));
            }
            if category.properties.is_empty() {
                return Err(CatalogError::invalid(format!(
                    "category '{}' has no properties",
                    category.id
                )));
            }

            let mut property_ids = HashSet::new();
            for property in &category.properties {
                if property.id.trim().is_empty() || property.name.trim().is_empty() {
                    return Err(CatalogError::invalid(format!(
                        "property with an empty id or name in category '{}'",
                        category.id
                    )));
                }
                if !property_ids.insert(property.id.as_str()) {
                    return Err(CatalogError::invalid(format!(
                        "duplicate property id '{}' in category '{}'",
                        property.id, category.id
                    )));
                }
                for (index, example) in property.examples.iter().enumerate() {
                    parse_inline_style(&example.styles).map_err(|source| {
                        CatalogError::Style {
                            property: property.id.clone(),
                            index,
                            source,
                        }
                    })?;
                }
            }
        }

        Ok(())
    }
}

static_assertions::assert_impl_all!(Catalog: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.categories.len(), 13);
        assert_eq!(catalog.property_count(), 39);
        assert_eq!(catalog.first_category().map(|c| c.id.as_str()), Some("layout"));
    }

    #[test]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }

    #[test]
    fn lookups() {
        let catalog = Catalog::builtin();
        let (category, property) = catalog.property("box-shadow").unwrap();
        assert_eq!(category.id, "effects");
        assert_eq!(property.name, "box-shadow");
        assert!(catalog.category("zindex").is_some());
        assert!(catalog.category("nope").is_none());
        assert!(catalog.property("nope").is_none());
    }

    #[test]
    fn builtin_properties_have_examples() {
        for category in &Catalog::builtin().categories {
            for property in &category.properties {
                assert!(!property.examples.is_empty(), "{} has examples", property.id);
                for example in &property.examples {
                    assert!(!example.styles.is_empty());
                }
            }
        }
    }

    const MINIMAL: &str = r##"
        [[categories]]
        id = "colors"
        name = "Colors"

        [[categories.properties]]
        id = "color"
        name = "color"
        description = "Sets the text color."
        syntax = "color: value;"
    "##;

    #[test]
    fn optional_fields_default() {
        let catalog = Catalog::from_toml_str(MINIMAL).unwrap();
        let property = &catalog.categories[0].properties[0];
        assert!(property.values.is_empty());
        assert!(property.examples.is_empty());
        assert_eq!(catalog.categories[0].icon, "");
    }

    #[test]
    fn duplicate_category_is_invalid() {
        let text = format!("{MINIMAL}\n{MINIMAL}");
        let err = Catalog::from_toml_str(&text).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid { .. }), "{err}");
        assert!(err.to_string().contains("duplicate category id 'colors'"));
    }

    #[test]
    fn empty_category_is_invalid() {
        let err = Catalog::from_toml_str(
            r#"
            [[categories]]
            id = "empty"
            name = "Empty"
            properties = []
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("has no properties"));
    }

    #[test]
    fn bad_example_styles_are_reported() {
        let text = format!(
            "{MINIMAL}\n[[categories.properties.examples]]\ncode = \"color: red\"\nstyles = \"color: red; 42: x\"\n"
        );
        match Catalog::from_toml_str(&text).unwrap_err() {
            CatalogError::Style { property, index, .. } => {
                assert_eq!(property, "color");
                assert_eq!(index, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn schema_mismatch_is_a_parse_error() {
        let err = Catalog::from_toml_str("[[categories]]\nid = 3").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { path: None, .. }));
    }
}
