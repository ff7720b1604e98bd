//! Source format detection.
//!
//! The extractor chain uses this to decide which strategies apply: PDF
//! files go through the PDF extractors, UTF-8 text is taken as-is.

use crate::error::{Error, Result};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Kind of source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// A PDF file (`%PDF-x.y` header)
    Pdf,
    /// Plain UTF-8 text, e.g. a previous extraction
    Text,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Pdf => f.write_str("PDF"),
            SourceFormat::Text => f.write_str("text"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const SNIFF_LEN: u64 = 4096;

/// Detect the source format from a file path.
///
/// Only the first few kilobytes are read.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let mut header = Vec::new();
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the source format from bytes.
///
/// # Returns
/// * `Ok(SourceFormat::Pdf)` if the data starts with a PDF header
/// * `Ok(SourceFormat::Text)` if the data is UTF-8 (a truncated trailing
///   character is tolerated, since callers may pass a prefix)
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SourceFormat> {
    if pdf_version(data).is_some() {
        return Ok(SourceFormat::Pdf);
    }

    let body = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match std::str::from_utf8(body) {
        Ok(_) => Ok(SourceFormat::Text),
        Err(e) if e.error_len().is_none() => Ok(SourceFormat::Text),
        Err(_) => Err(Error::UnknownFormat),
    }
}

/// Extract the version (e.g. "1.7") from a PDF header.
pub fn pdf_version(data: &[u8]) -> Option<String> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return None;
    }

    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();
    is_valid_version(&version).then_some(version)
}

/// Check if a version string is valid.
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}
