//! Text extraction from docx containers
//!
//! A .docx file is a zip archive whose document body lives in
//! `word/document.xml`. Extraction maps paragraph and line-break elements
//! to newlines, strips the remaining markup, and unescapes the basic XML
//! entities. That is enough structure for claim splitting; rich
//! formatting is intentionally discarded.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

const DOCUMENT_ENTRY: &str = "word/document.xml";

static TAG: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern compiles"))
}

/// Decode a docx file to plain text. Any unreadable layer of the
/// container (not a zip, missing document body, non-UTF-8 XML) fails
/// with a decode error before the pipeline starts.
pub fn extract_text(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open document: {}", path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("Not a readable docx container: {}", path.display()))?;
    let mut entry = archive
        .by_name(DOCUMENT_ENTRY)
        .with_context(|| format!("Docx container has no document body: {}", path.display()))?;

    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .with_context(|| format!("Document body is not valid UTF-8: {}", path.display()))?;

    Ok(document_text(&xml))
}

/// Reduce the document XML to plain text.
fn document_text(xml: &str) -> String {
    // paragraph ends and explicit breaks become newlines before the
    // remaining tags are dropped
    let with_breaks = xml.replace("</w:p>", "\n").replace("<w:br/>", "\n");
    let stripped = tag_pattern().replace_all(&with_breaks, "");
    unescape(stripped.trim())
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
