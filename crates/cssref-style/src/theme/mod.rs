//! Theme system with built-in syntax palettes.

mod builtin;
mod palette;
mod variables;

pub use builtin::{Theme, ThemeMode};
pub use palette::SyntaxPalette;
pub use variables::ThemeVariables;
