//! Claim alignment
//!
//! Pairs the claims of two document versions position by position. The
//! pairing is index-based, not content-aware: if a claim is deleted in the
//! middle of one document, every later claim shifts and pairs against the
//! wrong counterpart. That drift is an accepted limitation of positional
//! alignment; the [`AlignmentStrategy`] trait is the seam where a
//! content-similarity matcher could be substituted later.

/// One aligned position between two claim sequences. A position with no
/// claim on either side cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimPair<'a> {
    /// Both documents have a claim at this position
    Both { left: &'a str, right: &'a str },
    /// Only the before-document has a claim here (claim deleted)
    LeftOnly(&'a str),
    /// Only the after-document has a claim here (claim added)
    RightOnly(&'a str),
}

impl<'a> ClaimPair<'a> {
    /// Claim from the before-document, if present at this position.
    pub fn left(&self) -> Option<&'a str> {
        match self {
            ClaimPair::Both { left, .. } | ClaimPair::LeftOnly(left) => Some(left),
            ClaimPair::RightOnly(_) => None,
        }
    }

    /// Claim from the after-document, if present at this position.
    pub fn right(&self) -> Option<&'a str> {
        match self {
            ClaimPair::Both { right, .. } | ClaimPair::RightOnly(right) => Some(right),
            ClaimPair::LeftOnly(_) => None,
        }
    }
}

/// Pairing strategy between two claim sequences.
pub trait AlignmentStrategy: Send + Sync {
    /// Produce the ordered pairing of `left` against `right`. The result
    /// covers every claim of both sequences exactly once and is empty only
    /// when both inputs are empty.
    fn align<'a>(&self, left: &'a [String], right: &'a [String]) -> Vec<ClaimPair<'a>>;
}

/// Pairs claim *i* of one document with claim *i* of the other. Where one
/// sequence is shorter, the remaining positions are one-sided. Always
/// yields `max(left.len(), right.len())` pairs.
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionalAligner;

impl PositionalAligner {
    pub fn new() -> Self {
        Self
    }
}

impl AlignmentStrategy for PositionalAligner {
    fn align<'a>(&self, left: &'a [String], right: &'a [String]) -> Vec<ClaimPair<'a>> {
        let len = left.len().max(right.len());
        let mut pairs = Vec::with_capacity(len);
        for i in 0..len {
            let pair = match (left.get(i), right.get(i)) {
                (Some(l), Some(r)) => ClaimPair::Both { left: l, right: r },
                (Some(l), None) => ClaimPair::LeftOnly(l),
                (None, Some(r)) => ClaimPair::RightOnly(r),
                (None, None) => unreachable!("i is below the longer sequence's length"),
            };
            pairs.push(pair);
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn empty_inputs_align_to_nothing() {
        let pairs = PositionalAligner::new().align(&[], &[]);
        assert!(pairs.is_empty());
    }

    #[test]
    fn equal_lengths_pair_index_by_index() {
        let left = claims(&["a", "b", "c"]);
        let right = claims(&["x", "y", "z"]);
        let pairs = PositionalAligner::new().align(&left, &right);

        assert_eq!(pairs.len(), 3);
        for (i, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.left(), Some(left[i].as_str()));
            assert_eq!(pair.right(), Some(right[i].as_str()));
        }
    }

    #[test]
    fn shorter_right_yields_left_only_tail() {
        let left = claims(&["a", "b", "c"]);
        let right = claims(&["a", "b"]);
        let pairs = PositionalAligner::new().align(&left, &right);

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2], ClaimPair::LeftOnly("c"));
    }

    #[test]
    fn shorter_left_yields_right_only_tail() {
        let left = claims(&["a", "b"]);
        let right = claims(&["a", "b", "c"]);
        let pairs = PositionalAligner::new().align(&left, &right);

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2], ClaimPair::RightOnly("c"));
    }

    #[test]
    fn one_empty_side_is_all_one_sided() {
        let left = claims(&["a", "b"]);
        let pairs = PositionalAligner::new().align(&left, &[]);
        assert_eq!(pairs, vec![ClaimPair::LeftOnly("a"), ClaimPair::LeftOnly("b")]);
    }

    #[test]
    fn pair_accessors_cover_all_variants() {
        let both = ClaimPair::Both { left: "l", right: "r" };
        assert_eq!(both.left(), Some("l"));
        assert_eq!(both.right(), Some("r"));

        let left_only = ClaimPair::LeftOnly("l");
        assert_eq!(left_only.left(), Some("l"));
        assert_eq!(left_only.right(), None);

        let right_only = ClaimPair::RightOnly("r");
        assert_eq!(right_only.left(), None);
        assert_eq!(right_only.right(), Some("r"));
    }
}
