//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Text formatter - streams the raw artifact. The concatenated output is
/// byte-identical to the exported session artifact.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_fragment(
        &mut self,
        _index: usize,
        _before: Option<&str>,
        _after: Option<&str>,
        fragment: &str,
    ) -> Result<()> {
        // the fragment already carries its claim terminator
        write!(self.writer, "{fragment}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
