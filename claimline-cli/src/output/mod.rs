//! Output formatting module
//!
//! Fragments arrive one at a time, as the pipeline produces them, so a
//! formatter sees incremental progress rather than a finished document.

use anyhow::Result;

/// Trait for redline output formatters
pub trait OutputFormatter {
    /// Format and emit one claim-pair fragment as it is produced.
    /// `before` and `after` are the claims at this pair position, absent
    /// where one document has no claim there.
    fn format_fragment(
        &mut self,
        index: usize,
        before: Option<&str>,
        after: Option<&str>,
        fragment: &str,
    ) -> Result<()>;

    /// Finalize output (e.g., close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
