//! Markup styles and the word-level diff engine
//!
//! The pipeline treats the diff engine as an opaque collaborator behind
//! the [`DiffEngine`] trait; [`WordDiffEngine`] is the default
//! implementation, built on the `similar` crate's word tokenizer.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};
use std::fmt;
use std::str::FromStr;

/// Visual convention for rendering insertions and deletions. Chosen once
/// per comparison run and applied uniformly to every claim pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkupStyle {
    /// Red strike-through deletions, green insertions (inline-styled spans)
    RedGreen,
    /// Bare `<del>` / `<ins>` tags, no styling
    None,
    /// Red for both deletions (struck through) and insertions
    Red,
    /// GitHub-flavored markdown: `~~deleted~~`, `**inserted**`
    Ghfm,
}

impl MarkupStyle {
    pub const ALL: [MarkupStyle; 4] = [
        MarkupStyle::RedGreen,
        MarkupStyle::None,
        MarkupStyle::Red,
        MarkupStyle::Ghfm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkupStyle::RedGreen => "red-green",
            MarkupStyle::None => "none",
            MarkupStyle::Red => "red",
            MarkupStyle::Ghfm => "ghfm",
        }
    }
}

impl fmt::Display for MarkupStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkupStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "red-green" => Ok(MarkupStyle::RedGreen),
            "none" => Ok(MarkupStyle::None),
            "red" => Ok(MarkupStyle::Red),
            "ghfm" => Ok(MarkupStyle::Ghfm),
            other => Err(Error::UnsupportedStyle(other.to_string())),
        }
    }
}

/// Word-level diff-and-markup capability.
pub trait DiffEngine: Send + Sync {
    /// Return annotated markup expressing the edits from `before` to
    /// `after`. Identical inputs yield output with no markers. Failures
    /// propagate to the caller unchanged; the pipeline performs no
    /// per-pair recovery.
    fn diff(&self, before: &str, after: &str, style: MarkupStyle) -> Result<String>;
}

const RED_DEL_OPEN: &str = "<span style=\"color:red;font-weight:700;text-decoration:line-through;\">";
const RED_INS_OPEN: &str = "<span style=\"color:red;font-weight:700;\">";
const GREEN_INS_OPEN: &str = "<span style=\"color:green;font-weight:700;\">";
const SPAN_CLOSE: &str = "</span>";

/// Default engine: tokenizes both sides into whitespace-separated words,
/// diffs the word sequences, and collapses each run of consecutive
/// deleted or inserted words into one marked span. Whitespace is
/// normalized to single spaces in the output.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordDiffEngine;

impl WordDiffEngine {
    pub fn new() -> Self {
        Self
    }
}

impl DiffEngine for WordDiffEngine {
    fn diff(&self, before: &str, after: &str, style: MarkupStyle) -> Result<String> {
        let before_words: Vec<&str> = before.split_whitespace().collect();
        let after_words: Vec<&str> = after.split_whitespace().collect();
        let diff = TextDiff::from_slices(&before_words, &after_words);

        let mut chunks: Vec<String> = Vec::new();
        let mut deleted: Vec<&str> = Vec::new();
        let mut inserted: Vec<&str> = Vec::new();

        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Equal => {
                    flush_runs(&mut chunks, &mut deleted, &mut inserted, style);
                    chunks.push(change.value().to_string());
                }
                ChangeTag::Delete => deleted.push(change.value()),
                ChangeTag::Insert => inserted.push(change.value()),
            }
        }
        flush_runs(&mut chunks, &mut deleted, &mut inserted, style);

        Ok(chunks.join(" "))
    }
}

fn flush_runs(chunks: &mut Vec<String>, deleted: &mut Vec<&str>, inserted: &mut Vec<&str>, style: MarkupStyle) {
    if !deleted.is_empty() {
        chunks.push(render_run(&deleted.join(" "), style, Marker::Deletion));
        deleted.clear();
    }
    if !inserted.is_empty() {
        chunks.push(render_run(&inserted.join(" "), style, Marker::Insertion));
        inserted.clear();
    }
}

#[derive(Clone, Copy)]
enum Marker {
    Deletion,
    Insertion,
}

fn render_run(run: &str, style: MarkupStyle, marker: Marker) -> String {
    let (open, close) = match (style, marker) {
        (MarkupStyle::RedGreen, Marker::Deletion) => (RED_DEL_OPEN, SPAN_CLOSE),
        (MarkupStyle::RedGreen, Marker::Insertion) => (GREEN_INS_OPEN, SPAN_CLOSE),
        (MarkupStyle::None, Marker::Deletion) => ("<del>", "</del>"),
        (MarkupStyle::None, Marker::Insertion) => ("<ins>", "</ins>"),
        (MarkupStyle::Red, Marker::Deletion) => (RED_DEL_OPEN, SPAN_CLOSE),
        (MarkupStyle::Red, Marker::Insertion) => (RED_INS_OPEN, SPAN_CLOSE),
        (MarkupStyle::Ghfm, Marker::Deletion) => ("~~", "~~"),
        (MarkupStyle::Ghfm, Marker::Insertion) => ("**", "**"),
    };
    format!("{open}{run}{close}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_tokens_round_trip() {
        for style in MarkupStyle::ALL {
            assert_eq!(style.as_str().parse::<MarkupStyle>().unwrap(), style);
        }
    }

    #[test]
    fn unknown_style_token_is_rejected() {
        let err = "rainbow".parse::<MarkupStyle>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported markup style: rainbow");
    }

    #[test]
    fn identical_inputs_produce_no_markers() {
        let text = "A widget comprising a frobulator";
        let out = WordDiffEngine::new()
            .diff(text, text, MarkupStyle::RedGreen)
            .unwrap();
        assert_eq!(out, text);
    }

    #[test]
    fn changed_word_is_marked_in_both_directions() {
        let out = WordDiffEngine::new()
            .diff("A widget here", "A gadget here", MarkupStyle::Ghfm)
            .unwrap();
        assert!(out.contains("~~widget~~"));
        assert!(out.contains("**gadget**"));
        assert!(out.starts_with("A "));
        assert!(out.ends_with(" here"));
    }

    #[test]
    fn red_green_uses_colored_spans() {
        let out = WordDiffEngine::new()
            .diff("old text", "new text", MarkupStyle::RedGreen)
            .unwrap();
        assert!(out.contains("color:red"));
        assert!(out.contains("line-through"));
        assert!(out.contains("color:green"));
    }

    #[test]
    fn none_style_uses_bare_tags() {
        let out = WordDiffEngine::new()
            .diff("old text", "new text", MarkupStyle::None)
            .unwrap();
        assert!(out.contains("<del>old</del>"));
        assert!(out.contains("<ins>new</ins>"));
    }

    #[test]
    fn red_style_marks_insertions_red_without_strike() {
        let out = WordDiffEngine::new()
            .diff("old text", "new text", MarkupStyle::Red)
            .unwrap();
        assert!(out.contains(RED_DEL_OPEN));
        assert!(out.contains(RED_INS_OPEN));
    }

    #[test]
    fn full_deletion_against_blank_placeholder() {
        let out = WordDiffEngine::new()
            .diff("entire claim text", " ", MarkupStyle::Ghfm)
            .unwrap();
        assert!(out.contains("~~entire claim text~~"));
    }

    #[test]
    fn full_insertion_against_blank_placeholder() {
        let out = WordDiffEngine::new()
            .diff(" ", "entire claim text", MarkupStyle::Ghfm)
            .unwrap();
        assert!(out.contains("**entire claim text**"));
    }

    #[test]
    fn consecutive_changed_words_share_one_marker() {
        let out = WordDiffEngine::new()
            .diff("keep one two keep", "keep three four keep", MarkupStyle::Ghfm)
            .unwrap();
        assert!(out.contains("~~one two~~"));
        assert!(out.contains("**three four**"));
    }
}
