//! Family patterns and candidate scanning.
//!
//! Each family is scanned with a compiled pattern shared by every caller.
//! Scanning is a stateless "find all" over the value, so repeated or
//! concurrent scans never see each other's progress.
//!
//! Digits, word boundaries and case folding are ASCII-only.

use std::sync::OnceLock;

use regex::Regex;

use crate::token::{CandidateMatch, Family};

/// Units accepted directly after a numeric literal.
pub const UNITS: &[&str] = &["px", "em", "rem", "%", "vh", "vw", "deg", "s", "ms"];

/// Keywords highlighted in declaration values.
///
/// Hyphenated timing functions come before `ease` so the longer word wins.
pub const KEYWORDS: &[&str] = &[
    "none", "auto", "inherit", "initial", "unset", "static", "relative", "absolute", "fixed",
    "sticky", "block", "inline", "flex", "grid", "normal", "bold", "italic", "center", "left",
    "right", "top", "bottom", "all", "ease-in-out", "ease-in", "ease-out", "ease", "linear",
];

static DECLARATION: OnceLock<Regex> = OnceLock::new();
static COLOR: OnceLock<Regex> = OnceLock::new();
static NUMBER: OnceLock<Regex> = OnceLock::new();
static KEYWORD: OnceLock<Regex> = OnceLock::new();

/// `name: value` shape. Group 1 is the name, group 2 the raw value.
pub(crate) fn declaration_pattern() -> &'static Regex {
    DECLARATION.get_or_init(|| {
        Regex::new(r"^([a-zA-Z-]+)\s*:\s*(.+)$").expect("declaration pattern is valid")
    })
}

fn color_pattern() -> &'static Regex {
    COLOR.get_or_init(|| {
        Regex::new(
            r"(?i-u:rgba?|hsla?)\([^()]+\)|#(?i-u:[0-9a-f]{8}|[0-9a-f]{6}|[0-9a-f]{3,4})(?-u:\b)",
        )
        .expect("color pattern is valid")
    })
}

fn number_pattern() -> &'static Regex {
    NUMBER.get_or_init(|| {
        // `%` is not a word character, so it cannot be followed by `\b`
        let word_units = UNITS
            .iter()
            .filter(|unit| **unit != "%")
            .map(|unit| regex::escape(unit))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(
            r"(?-u:\b)[0-9]+(?:\.[0-9]+)?(?:%|(?:{word_units})?(?-u:\b))"
        ))
        .expect("number pattern is valid")
    })
}

fn keyword_pattern() -> &'static Regex {
    KEYWORD.get_or_init(|| {
        let words = KEYWORDS
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i-u:\b(?:{words})\b)")).expect("keyword pattern is valid")
    })
}

impl Family {
    fn pattern(self) -> &'static Regex {
        match self {
            Family::Color => color_pattern(),
            Family::Number => number_pattern(),
            Family::Keyword => keyword_pattern(),
        }
    }

    /// All non-overlapping matches of this family in `value`, left to right.
    ///
    /// No cross-family filtering is applied here.
    pub fn find_all(self, value: &str) -> Vec<CandidateMatch> {
        self.pattern()
            .find_iter(value)
            .filter(|m| self != Family::Number || !is_bare_zero(m.as_str()))
            .map(|m| CandidateMatch::new(self, m.start(), m.as_str()))
            .collect()
    }
}

/// A unitless zero (`0`, `000`) carries no information worth highlighting.
fn is_bare_zero(text: &str) -> bool {
    text.bytes().all(|b| b == b'0')
}

/// Scan `value` with every family in priority order.
///
/// A lower-priority match is dropped in full when it intersects any match
/// already kept from a higher-priority family. The result is grouped by
/// family (colors, then numbers, then keywords), each group left to right.
pub fn find_candidates(value: &str) -> Vec<CandidateMatch> {
    Family::BY_PRIORITY
        .into_iter()
        .fold(Vec::new(), |mut kept: Vec<CandidateMatch>, family| {
            let fresh: Vec<CandidateMatch> = family
                .find_all(value)
                .into_iter()
                .filter(|candidate| !kept.iter().any(|k| k.overlaps(candidate)))
                .collect();
            kept.extend(fresh);
            kept
        })
}
