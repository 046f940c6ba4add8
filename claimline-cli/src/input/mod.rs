//! Document ingestion
//!
//! Decodes an uploaded document to plain UTF-8 text before the pipeline
//! starts. Decoding failures surface immediately; nothing downstream runs
//! on input that could not be read.

pub mod docx;
pub mod file_reader;

pub use file_reader::FileReader;

use anyhow::Result;
use std::path::Path;

/// Declared content kind of a document file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Plain UTF-8 text
    Text,
    /// Word-processor document (docx container)
    Docx,
}

impl FileKind {
    /// Infer the kind from the file extension; anything without a `.docx`
    /// extension is treated as plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("docx") => FileKind::Docx,
            _ => FileKind::Text,
        }
    }
}

/// Decode one document to plain text according to its kind.
pub fn ingest(path: &Path) -> Result<String> {
    match FileKind::from_path(path) {
        FileKind::Text => FileReader::read_text(path),
        FileKind::Docx => docx::extract_text(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docx_extension_is_detected_case_insensitively() {
        assert_eq!(FileKind::from_path(Path::new("a.docx")), FileKind::Docx);
        assert_eq!(FileKind::from_path(Path::new("a.DOCX")), FileKind::Docx);
    }

    #[test]
    fn everything_else_is_plain_text() {
        assert_eq!(FileKind::from_path(Path::new("a.txt")), FileKind::Text);
        assert_eq!(FileKind::from_path(Path::new("claims")), FileKind::Text);
        assert_eq!(FileKind::from_path(Path::new("a.md")), FileKind::Text);
    }
}
