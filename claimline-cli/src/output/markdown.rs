//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one headed section per claim pair
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    claim_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            claim_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_fragment(
        &mut self,
        index: usize,
        _before: Option<&str>,
        _after: Option<&str>,
        fragment: &str,
    ) -> Result<()> {
        self.claim_count += 1;
        writeln!(self.writer, "### Claim {}", index + 1)?;
        writeln!(self.writer)?;
        write!(self.writer, "{fragment}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total claims compared: {}*", self.claim_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_headed_and_counted() {
        let mut buf = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buf);
            formatter
                .format_fragment(0, Some("a"), Some("b"), "a b.\n")
                .unwrap();
            formatter
                .format_fragment(1, None, Some("c"), "**c**.\n")
                .unwrap();
            formatter.finish().unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("### Claim 1"));
        assert!(out.contains("### Claim 2"));
        assert!(out.contains("*Total claims compared: 2*"));
    }
}
