//! CSS property catalog for cssref.
//!
//! The catalog groups documented CSS properties into categories. Each
//! property has a description, a syntax line, common values, and live
//! examples pairing a declaration with the inline styles of its preview.
//!
//! - **Data**: a built-in catalog is embedded in the crate; external catalogs
//!   in the same TOML layout can be loaded from disk
//! - **Validation**: ids, names, and example styles are checked on load
//! - **Search**: case-insensitive substring search over names, descriptions,
//!   and values
//! - **Demos**: which preview body an example gets
//!
//! # Example
//!
//! ```
//! use cssref_catalog::{Catalog, SearchQuery, result_label};
//!
//! let catalog = Catalog::builtin();
//! let hits = catalog.search(&SearchQuery::new("ellipsis")).unwrap();
//! assert_eq!(hits[0].property.id, "text-overflow");
//! assert_eq!(result_label(hits.len()), "1 property found");
//! ```

pub mod demo;
pub mod load;
pub mod model;
pub mod search;

mod error;

pub use demo::{DemoItem, DemoKind};
pub use error::{CatalogError, Result};
pub use model::{Catalog, Category, Example, Property};
pub use search::{SearchHit, SearchQuery, filter_category, no_results_message, result_label};
