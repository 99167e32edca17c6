//! Parser for inline declaration blocks such as
//! `display: flex; gap: 1rem; background-color: #3b82f6`.
//!
//! Values are not interpreted. Each declaration keeps the source text of its
//! value so it can be written back out verbatim in a `style` attribute.
//!
//! # Error Recovery
//!
//! A declaration that is missing its colon, has an empty value, or contains a
//! bad string, bad url or unmatched closing bracket is logged via
//! `tracing::warn!` and skipped. Parsing stops with [`Error::Parse`] only when
//! a declaration does not start with a property name.

use std::fmt;

use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, Token};

use crate::{Error, Result};

/// A single `name: value` pair from an inline style block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineDeclaration {
    /// Property name as written.
    pub name: String,
    /// Value source text, trimmed.
    pub value: String,
}

impl InlineDeclaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for InlineDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// An ordered inline declaration block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<InlineDeclaration>,
}

impl InlineStyle {
    /// Parse a declaration block.
    pub fn parse(css: &str) -> Result<Self> {
        Ok(Self {
            declarations: parse_inline_style(css)?,
        })
    }

    /// The last value set for `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|decl| decl.name.eq_ignore_ascii_case(name))
            .map(|decl| decl.value.as_str())
    }

    /// Append a declaration. Later declarations override earlier ones.
    pub fn push(&mut self, declaration: InlineDeclaration) {
        self.declarations.push(declaration);
    }

    pub fn iter(&self) -> impl Iterator<Item = &InlineDeclaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl Extend<InlineDeclaration> for InlineStyle {
    fn extend<I: IntoIterator<Item = InlineDeclaration>>(&mut self, iter: I) {
        self.declarations.extend(iter);
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{decl}")?;
        }
        Ok(())
    }
}

/// Parse an inline declaration block into its declarations, in source order.
///
/// # Example
///
/// ```
/// use cssref_style::parse_inline_style;
///
/// let decls = parse_inline_style("display: flex; gap: 1rem").unwrap();
/// assert_eq!(decls.len(), 2);
/// assert_eq!(decls[1].value, "1rem");
/// ```
pub fn parse_inline_style(css: &str) -> Result<Vec<InlineDeclaration>> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    parse_declarations(&mut parser)
}

fn parse_declarations(parser: &mut Parser<'_, '_>) -> Result<Vec<InlineDeclaration>> {
    let mut declarations = vec![];

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        // Stray separators between declarations
        if parser.try_parse(|p| p.expect_semicolon()).is_ok() {
            continue;
        }

        let location = parser.current_source_location();
        let name = match parser.expect_ident() {
            Ok(name) => name.to_string(),
            Err(_) => {
                return Err(Error::parse(
                    "expected a property name",
                    location.line + 1,
                    location.column,
                ));
            }
        };

        if parser.expect_colon().is_err() {
            tracing::warn!("Missing ':' after property '{}', skipping", name);
            skip_declaration(parser);
            continue;
        }

        let start = parser.position();
        let malformed = parser
            .parse_until_before(Delimiter::Semicolon, |p| consume_value(p))
            .unwrap_or(true);
        let value = parser.slice_from(start).trim().to_string();

        // Skip optional semicolon
        let _ = parser.try_parse(|p| p.expect_semicolon());

        if malformed {
            tracing::warn!("Malformed value for property '{}': {:?}", name, value);
            continue;
        }
        if value.is_empty() {
            tracing::warn!("Empty value for property '{}', skipping", name);
            continue;
        }

        declarations.push(InlineDeclaration { name, value });
    }

    Ok(declarations)
}

/// Consume every token of a value, reporting whether any of them is malformed.
fn consume_value<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<bool, CssParseError<'i, ()>> {
    let mut malformed = false;
    while let Ok(token) = parser.next() {
        if matches!(
            token,
            Token::BadString(_)
                | Token::BadUrl(_)
                | Token::CloseParenthesis
                | Token::CloseSquareBracket
                | Token::CloseCurlyBracket
        ) {
            malformed = true;
        }
    }
    Ok(malformed)
}

/// Skip to the end of the current declaration.
fn skip_declaration(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => return,
            _ => {}
        }
    }
}
