//! Output assembly: turning accepted matches into a contiguous span sequence.

use crate::token::{CandidateMatch, ClassifiedSpan, TokenClass};

/// Cover `value` with spans.
///
/// Every accepted match becomes a span of its family's class, and every gap
/// between matches (including a leading gap and a trailing suffix) becomes a
/// `PlainText` span. `accepted` must be sorted and non-overlapping, as
/// returned by [`resolve`](crate::resolve). Offsets are relative to `value`.
pub fn fill_gaps(value: &str, accepted: &[CandidateMatch]) -> Vec<ClassifiedSpan> {
    let mut spans = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut cursor = 0;

    for candidate in accepted {
        if candidate.start > cursor {
            spans.push(ClassifiedSpan::new(
                TokenClass::PlainText,
                cursor,
                &value[cursor..candidate.start],
            ));
        }
        spans.push(ClassifiedSpan::from(candidate.clone()));
        cursor = candidate.end;
    }

    if cursor < value.len() {
        spans.push(ClassifiedSpan::new(
            TokenClass::PlainText,
            cursor,
            &value[cursor..],
        ));
    }

    spans
}

/// Give a terminating `;` its own `Semicolon` span.
///
/// Applies only when the last span is `PlainText` ending in `;`. The rest of
/// that span stays `PlainText`; it is dropped when nothing else remains.
pub fn split_trailing_semicolon(mut spans: Vec<ClassifiedSpan>) -> Vec<ClassifiedSpan> {
    let Some(last) = spans.pop() else {
        return spans;
    };

    if last.class != TokenClass::PlainText || !last.text.ends_with(';') {
        spans.push(last);
        return spans;
    }

    let rest = &last.text[..last.text.len() - 1];
    let semicolon_start = last.start + rest.len();
    if !rest.is_empty() {
        spans.push(ClassifiedSpan::new(TokenClass::PlainText, last.start, rest));
    }
    spans.push(ClassifiedSpan::new(
        TokenClass::Semicolon,
        semicolon_start,
        ";",
    ));
    spans
}
