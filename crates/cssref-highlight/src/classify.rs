//! The declaration classifier.

use std::ops::Range;

use crate::assemble::{fill_gaps, split_trailing_semicolon};
use crate::patterns::{declaration_pattern, find_candidates};
use crate::resolve::resolve;
use crate::token::{ClassifiedSpan, TokenClass};

/// Byte ranges of the structural parts of a `name: value` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationParts {
    /// The property name.
    pub name: Range<usize>,
    /// The colon and the whitespace around it.
    pub separator: Range<usize>,
    /// The raw value, untrimmed.
    pub value: Range<usize>,
}

/// Split `declaration` into name, separator, and value.
///
/// Returns `None` when the input does not have the `name: value` shape
/// (name made of ASCII letters and hyphens, non-empty single-line value).
pub fn split_declaration(declaration: &str) -> Option<DeclarationParts> {
    let captures = declaration_pattern().captures(declaration)?;
    let name = captures.get(1)?.range();
    let value = captures.get(2)?.range();

    Some(DeclarationParts {
        separator: name.end..value.start,
        name,
        value,
    })
}

/// Classify a single-line CSS declaration into contiguous spans.
///
/// Concatenating the text of the returned spans reproduces `declaration`
/// exactly. Offsets are byte offsets into `declaration`.
///
/// Inputs that are not a `name: value` pair come back as one `PlainText`
/// span holding the whole input (the empty string included).
///
/// # Example
///
/// ```
/// use cssref_highlight::{classify, TokenClass};
///
/// let spans = classify("display: flex");
/// let classes: Vec<TokenClass> = spans.iter().map(|s| s.class).collect();
/// assert_eq!(
///     classes,
///     vec![TokenClass::PropertyName, TokenClass::Colon, TokenClass::Keyword]
/// );
/// ```
pub fn classify(declaration: &str) -> Vec<ClassifiedSpan> {
    let Some(parts) = split_declaration(declaration) else {
        tracing::trace!(
            target: "cssref_highlight::classify",
            len = declaration.len(),
            "not a declaration, emitting plain text"
        );
        return vec![ClassifiedSpan::new(TokenClass::PlainText, 0, declaration)];
    };

    let raw_value = &declaration[parts.value.clone()];
    let value = raw_value.trim();
    let value_start = parts.value.start + (raw_value.len() - raw_value.trim_start().len());
    let value_end = value_start + value.len();

    let mut spans = vec![
        ClassifiedSpan::new(
            TokenClass::PropertyName,
            parts.name.start,
            &declaration[parts.name.clone()],
        ),
        ClassifiedSpan::new(
            TokenClass::Colon,
            parts.separator.start,
            &declaration[parts.separator.clone()],
        ),
    ];

    // Whitespace the value regex could not hand to the separator
    if value_start > parts.value.start {
        spans.push(ClassifiedSpan::new(
            TokenClass::PlainText,
            parts.value.start,
            &declaration[parts.value.start..value_start],
        ));
    }

    spans.extend(
        classify_value(value)
            .into_iter()
            .map(|span| span.shifted(value_start)),
    );

    if value_end < parts.value.end {
        spans.push(ClassifiedSpan::new(
            TokenClass::PlainText,
            value_end,
            &declaration[value_end..parts.value.end],
        ));
    }

    spans
}

/// Classify a trimmed value on its own. Offsets are relative to `value`.
pub fn classify_value(value: &str) -> Vec<ClassifiedSpan> {
    let accepted = resolve(find_candidates(value));
    split_trailing_semicolon(fill_gaps(value, &accepted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::concat_text;

    fn summary(spans: &[ClassifiedSpan]) -> Vec<(TokenClass, &str)> {
        spans.iter().map(|s| (s.class, s.text.as_str())).collect()
    }

    #[test]
    fn split_canonical_declaration() {
        let parts = split_declaration("color: red").unwrap();
        assert_eq!(parts.name, 0..5);
        assert_eq!(parts.separator, 5..7);
        assert_eq!(parts.value, 7..10);
    }

    #[test]
    fn split_rejects_non_declarations() {
        assert!(split_declaration("Item 1").is_none());
        assert!(split_declaration("linear-gradient(to right, #3b82f6, #10b981)").is_none());
        assert!(split_declaration("color:").is_none());
        assert!(split_declaration("").is_none());
        assert!(split_declaration("a: b\nc: d").is_none());
    }

    #[test]
    fn keyword_value() {
        let spans = classify("display: flex");
        assert_eq!(
            summary(&spans),
            vec![
                (TokenClass::PropertyName, "display"),
                (TokenClass::Colon, ": "),
                (TokenClass::Keyword, "flex"),
            ]
        );
    }

    #[test]
    fn syntax_placeholder_with_semicolon() {
        let spans = classify("display: value;");
        assert_eq!(
            summary(&spans),
            vec![
                (TokenClass::PropertyName, "display"),
                (TokenClass::Colon, ": "),
                (TokenClass::PlainText, "value"),
                (TokenClass::Semicolon, ";"),
            ]
        );
    }

    #[test]
    fn number_then_semicolon() {
        let spans = classify("font-size: 12px;");
        assert_eq!(
            summary(&spans)[2..],
            [(TokenClass::Number, "12px"), (TokenClass::Semicolon, ";")]
        );
    }

    #[test]
    fn loose_separator_is_kept_verbatim() {
        let input = "color :  #fff  ";
        let spans = classify(input);

        assert_eq!(concat_text(&spans), input);
        assert_eq!(spans[1].text, " :  ");
        assert_eq!(spans[2].class, TokenClass::Color);
        assert_eq!(spans[3], ClassifiedSpan::new(TokenClass::PlainText, 13, "  "));
    }

    #[test]
    fn whitespace_only_value() {
        let input = "color: ";
        let spans = classify(input);
        assert_eq!(concat_text(&spans), input);
        assert_eq!(
            summary(&spans),
            vec![
                (TokenClass::PropertyName, "color"),
                (TokenClass::Colon, ":"),
                (TokenClass::PlainText, " "),
            ]
        );
    }

    #[test]
    fn fallback_covers_input() {
        for input in ["Item 1", "", "   ", "linear-gradient(to right, #3b82f6, #10b981)"] {
            let spans = classify(input);
            assert_eq!(spans.len(), 1);
            assert_eq!(spans[0].class, TokenClass::PlainText);
            assert_eq!(spans[0].text, input);
        }
    }

    #[test]
    fn offsets_index_the_declaration() {
        let input = "border: 2px solid #3b82f6";
        for span in classify(input) {
            assert_eq!(&input[span.range()], span.text);
        }
    }
}
