//! Plain-text file reading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text. Fails on missing files, unreadable
    /// files, and content that is not valid UTF-8.
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to decode file as UTF-8 text: {}", path.display()))?;

        Ok(content)
    }
}
