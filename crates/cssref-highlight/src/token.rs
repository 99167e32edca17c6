//! Token classes, pattern families, and the span types produced by the classifier.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::Serialize;

/// Final classification of a span of a declaration.
///
/// Each class maps to one color in a syntax palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenClass {
    /// The property name before the colon.
    PropertyName,
    /// The separator between name and value.
    Colon,
    /// A color literal (`#rrggbb`, `rgb(...)`, `hsla(...)`, ...).
    Color,
    /// A numeric literal with an optional unit.
    Number,
    /// A layout or style keyword.
    Keyword,
    /// Anything not covered by another class.
    PlainText,
    /// The terminating `;`.
    Semicolon,
}

impl TokenClass {
    /// Every token class, in declaration order.
    pub const ALL: [TokenClass; 7] = [
        TokenClass::PropertyName,
        TokenClass::Colon,
        TokenClass::Color,
        TokenClass::Number,
        TokenClass::Keyword,
        TokenClass::PlainText,
        TokenClass::Semicolon,
    ];

    /// Stable kebab-case name, used for CSS class suffixes and config keys.
    pub fn name(self) -> &'static str {
        match self {
            TokenClass::PropertyName => "property-name",
            TokenClass::Colon => "colon",
            TokenClass::Color => "color",
            TokenClass::Number => "number",
            TokenClass::Keyword => "keyword",
            TokenClass::PlainText => "plain-text",
            TokenClass::Semicolon => "semicolon",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown token class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTokenClass(pub String);

impl fmt::Display for UnknownTokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown token class '{}'", self.0)
    }
}

impl std::error::Error for UnknownTokenClass {}

impl FromStr for TokenClass {
    type Err = UnknownTokenClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        TokenClass::ALL
            .into_iter()
            .find(|class| class.name() == normalized)
            .ok_or_else(|| UnknownTokenClass(s.to_string()))
    }
}

/// One of the independent pattern categories scanned over a value.
///
/// The derived ordering is the overlap priority: `Color` wins over `Number`,
/// which wins over `Keyword`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Color,
    Number,
    Keyword,
}

impl Family {
    /// Families in priority order, highest first.
    pub const BY_PRIORITY: [Family; 3] = [Family::Color, Family::Number, Family::Keyword];

    /// The token class emitted for an accepted match of this family.
    pub fn token_class(self) -> TokenClass {
        match self {
            Family::Color => TokenClass::Color,
            Family::Number => TokenClass::Number,
            Family::Keyword => TokenClass::Keyword,
        }
    }
}

/// A raw, possibly overlapping match of one family inside a value.
///
/// Offsets are byte offsets into the trimmed value, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub family: Family,
}

impl CandidateMatch {
    /// Create a candidate for `text` found at `start`.
    pub fn new(family: Family, start: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            start,
            end: start + text.len(),
            text,
            family,
        }
    }

    /// Byte range of this match.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether the two matches share at least one position.
    pub fn overlaps(&self, other: &CandidateMatch) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// A classified, non-overlapping span of a declaration.
///
/// Offsets are byte offsets into the classified string, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub class: TokenClass,
}

impl ClassifiedSpan {
    /// Create a span for `text` found at `start`.
    pub fn new(class: TokenClass, start: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            start,
            end: start + text.len(),
            text,
            class,
        }
    }

    /// Byte range of this span.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Move the span `offset` bytes to the right.
    pub fn shifted(mut self, offset: usize) -> Self {
        self.start += offset;
        self.end += offset;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<CandidateMatch> for ClassifiedSpan {
    fn from(candidate: CandidateMatch) -> Self {
        Self {
            start: candidate.start,
            end: candidate.end,
            text: candidate.text,
            class: candidate.family.token_class(),
        }
    }
}

/// Concatenate the text of `spans` in order.
pub fn concat_text(spans: &[ClassifiedSpan]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}
