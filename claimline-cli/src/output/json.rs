//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs claim pairs as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pairs: Vec<PairData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct PairData {
    /// Zero-based pair position
    pub index: usize,
    /// Claim from the before-document, if present
    pub before: Option<String>,
    /// Claim from the after-document, if present
    pub after: Option<String>,
    /// Annotated redline markup for this pair
    pub markup: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pairs: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_fragment(
        &mut self,
        index: usize,
        before: Option<&str>,
        after: Option<&str>,
        fragment: &str,
    ) -> Result<()> {
        self.pairs.push(PairData {
            index,
            before: before.map(str::to_string),
            after: after.map(str::to_string),
            markup: fragment.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.pairs)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_one_record_per_pair() {
        let mut buf = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buf);
            formatter
                .format_fragment(0, Some("a"), Some("b"), "a b.\n")
                .unwrap();
            formatter
                .format_fragment(1, Some("c"), None, "~~c~~.\n")
                .unwrap();
            formatter.finish().unwrap();
        }
        let records: Vec<PairData> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].index, 0);
        assert_eq!(records[1].before.as_deref(), Some("c"));
        assert_eq!(records[1].after, None);
        assert_eq!(records[1].markup, "~~c~~.\n");
    }
}
