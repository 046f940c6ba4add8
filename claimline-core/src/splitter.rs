//! Claim-boundary splitting
//!
//! Numbered-claim documents separate claims with a period followed by the
//! next claim number ("...therefore. 2. A device..."). The splitter cuts
//! the text at every period that is followed, after optional whitespace,
//! by a digit. This heuristic is lossy by design: a "word. 2" sequence
//! inside a quoted passage or formula splits incorrectly. That is a known
//! accuracy limitation of the tool, not something the splitter tries to
//! detect or repair.

use regex::Regex;
use std::sync::OnceLock;

/// Period followed by optional whitespace and a digit. Matches are found
/// left to right; only the period is consumed as the boundary, the
/// whitespace and digit stay with the following claim.
const BOUNDARY_PATTERN: &str = r"\.\s*[0-9]";

static BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn boundary() -> &'static Regex {
    BOUNDARY.get_or_init(|| Regex::new(BOUNDARY_PATTERN).expect("boundary pattern compiles"))
}

/// Splits raw document text into an ordered sequence of claim strings.
///
/// Pure string-in, sequence-out: no state beyond the compiled pattern, so
/// a stronger boundary parser can replace it without touching alignment
/// or assembly.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClaimSplitter;

impl ClaimSplitter {
    pub fn new() -> Self {
        Self
    }

    /// Split `text` at every claim boundary, trim each segment, and drop
    /// segments that are empty after trimming. Source order is preserved.
    /// Never fails: text with no boundaries yields at most one segment,
    /// and empty or whitespace-only input yields an empty sequence.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut claims = Vec::new();
        let mut start = 0;
        for cut in boundary().find_iter(text) {
            push_trimmed(&mut claims, &text[start..cut.start()]);
            // consume the period only; the digit opens the next claim
            start = cut.start() + 1;
        }
        push_trimmed(&mut claims, &text[start..]);
        claims
    }
}

fn push_trimmed(claims: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        claims.push(trimmed.to_string());
    }
}
