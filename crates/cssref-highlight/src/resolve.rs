//! Overlap resolution between candidate matches.

use crate::token::CandidateMatch;

/// Select a non-overlapping, left-to-right subset of `candidates`.
///
/// Candidates are ordered by start offset, ties going to the higher-priority
/// family. Each candidate is then kept only if it intersects none of the
/// candidates kept before it; a rejected candidate is dropped in full, even
/// the part that would not overlap.
///
/// The result is sorted by start offset but need not be contiguous.
pub fn resolve(candidates: Vec<CandidateMatch>) -> Vec<CandidateMatch> {
    let mut ordered = candidates;
    ordered.sort_by_key(|candidate| (candidate.start, candidate.family));

    ordered
        .into_iter()
        .fold(Vec::new(), |mut accepted: Vec<CandidateMatch>, candidate| {
            if accepted.iter().any(|kept| kept.overlaps(&candidate)) {
                tracing::trace!(
                    target: "cssref_highlight::resolve",
                    text = %candidate.text,
                    family = ?candidate.family,
                    "dropping overlapped candidate"
                );
            } else {
                accepted.push(candidate);
            }
            accepted
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Family;

    #[test]
    fn disjoint_candidates_are_sorted() {
        let resolved = resolve(vec![
            CandidateMatch::new(Family::Keyword, 10, "auto"),
            CandidateMatch::new(Family::Color, 0, "#fff"),
            CandidateMatch::new(Family::Number, 5, "2px"),
        ]);

        let starts: Vec<usize> = resolved.iter().map(|c| c.start).collect();
        assert_eq!(starts, vec![0, 5, 10]);
    }

    #[test]
    fn same_start_prefers_higher_priority() {
        let resolved = resolve(vec![
            CandidateMatch::new(Family::Keyword, 0, "abc"),
            CandidateMatch::new(Family::Number, 0, "abcdef"),
        ]);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].family, Family::Number);
    }

    #[test]
    fn overlapping_candidate_is_discarded_whole() {
        // One shared position is enough to lose the entire longer match
        let resolved = resolve(vec![
            CandidateMatch::new(Family::Color, 0, "#abc"),
            CandidateMatch::new(Family::Number, 3, "c123456789"),
        ]);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].text, "#abc");
    }

    #[test]
    fn adjacent_candidates_are_both_kept() {
        let resolved = resolve(vec![
            CandidateMatch::new(Family::Number, 0, "10"),
            CandidateMatch::new(Family::Number, 2, "px"),
        ]);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert!(resolve(Vec::new()).is_empty());
    }
}
