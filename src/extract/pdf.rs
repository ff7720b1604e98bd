//! PDF text extractors.
//!
//! [`PdfExtractor`] keeps the reading order produced by `pdf-extract` and is
//! tried first. [`LopdfExtractor`] walks pages with `lopdf` and skips pages
//! it cannot decode, which makes it the lower-fidelity fallback.

use std::panic::{self, AssertUnwindSafe};

use lopdf::Document as LopdfDocument;

use crate::detect::SourceFormat;
use crate::error::{Error, Result};

use super::TextExtractor;

/// Extractor backed by `pdf-extract`.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    _private: (),
}

impl PdfExtractor {
    /// Create a new `pdf-extract` based extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextExtractor for PdfExtractor {
    fn name(&self) -> &str {
        "pdf-extract"
    }

    fn supports(&self, format: SourceFormat) -> bool {
        format == SourceFormat::Pdf
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed fonts instead of returning an error.
        panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)))
            .map_err(|_| Error::TextExtract("pdf-extract panicked".into()))?
            .map_err(Error::from)
    }
}

/// Page-by-page extractor backed by `lopdf`.
#[derive(Debug, Clone, Default)]
pub struct LopdfExtractor {
    _private: (),
}

impl LopdfExtractor {
    /// Create a new `lopdf` based extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextExtractor for LopdfExtractor {
    fn name(&self) -> &str {
        "lopdf"
    }

    fn supports(&self, format: SourceFormat) -> bool {
        format == SourceFormat::Pdf
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let doc = LopdfDocument::load_mem(bytes)?;
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }

        let mut parts = Vec::new();
        for page_num in doc.get_pages().keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(text) => parts.push(text),
                Err(e) => log::warn!("Failed to extract text from page {}: {}", page_num, e),
            }
        }
        Ok(parts.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractors_support_only_pdf() {
        let extractors: [&dyn TextExtractor; 2] = [&PdfExtractor::new(), &LopdfExtractor::new()];
        for extractor in extractors {
            assert!(extractor.supports(SourceFormat::Pdf));
            assert!(!extractor.supports(SourceFormat::Text));
        }
    }

    #[test]
    fn test_lopdf_rejects_garbage() {
        let extractor = LopdfExtractor::new();
        assert!(extractor.extract_bytes(b"%PDF-1.4\nnot really a pdf").is_err());
    }
}
