//! Plain text passthrough extractor.

use crate::detect::SourceFormat;
use crate::error::{Error, Result};

use super::TextExtractor;

/// Reads UTF-8 text as-is, e.g. a previous extraction saved to disk.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor {
    _private: (),
}

impl PlainTextExtractor {
    /// Create a new plain text extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn name(&self) -> &str {
        "text"
    }

    fn supports(&self, format: SourceFormat) -> bool {
        format == SourceFormat::Text
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        String::from_utf8(body.to_vec()).map_err(|e| Error::TextExtract(e.to_string()))
    }
}
