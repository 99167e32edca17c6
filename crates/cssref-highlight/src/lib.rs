//! Declaration tokenizer for cssref.
//!
//! This crate turns a single-line CSS declaration such as
//! `box-shadow: 0 2px 4px rgba(0,0,0,0.1);` into an ordered sequence of
//! classified spans for display coloring:
//!
//! - **Classifier**: splits `name: value` and scans the value with three
//!   pattern families (colors, numbers, keywords)
//! - **Resolver**: keeps a non-overlapping subset, colors over numbers over
//!   keywords
//! - **Assembly**: fills gaps with plain text and splits off a trailing `;`
//!
//! It is not a CSS parser. Anything that is not a simple declaration is
//! returned as plain text, and no input makes it fail.
//!
//! # Example
//!
//! ```
//! use cssref_highlight::{classify, TokenClass};
//!
//! let spans = classify("transition: all 0.3s ease");
//! let numbers: Vec<&str> = spans
//!     .iter()
//!     .filter(|s| s.class == TokenClass::Number)
//!     .map(|s| s.text.as_str())
//!     .collect();
//! assert_eq!(numbers, vec!["0.3s"]);
//! ```

pub mod assemble;
pub mod classify;
pub mod highlighter;
pub mod patterns;
pub mod resolve;
pub mod token;

pub use assemble::{fill_gaps, split_trailing_semicolon};
pub use classify::{classify, classify_value, split_declaration, DeclarationParts};
pub use highlighter::{CssHighlighter, HighlightSpan, SyntaxHighlighter};
pub use patterns::find_candidates;
pub use resolve::resolve;
pub use token::{concat_text, CandidateMatch, ClassifiedSpan, Family, TokenClass, UnknownTokenClass};
