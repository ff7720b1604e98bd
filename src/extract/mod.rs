//! Text extraction from source documents.
//!
//! Extraction is a pluggable step in front of the parser. Each
//! [`TextExtractor`] turns a document into best-effort raw text; an
//! [`ExtractorChain`] tries them in order of decreasing fidelity and keeps
//! the first non-empty result.
//!
//! # Example
//!
//! ```no_run
//! use resume_extract::extract::ExtractorChain;
//! use std::path::Path;
//!
//! fn main() -> resume_extract::Result<()> {
//!     let chain = ExtractorChain::with_defaults();
//!     let extraction = chain.extract_file(Path::new("resume.pdf"))?;
//!     println!("{} ({})", extraction.text, extraction.extractor);
//!     Ok(())
//! }
//! ```

#[cfg(feature = "pdf")]
mod pdf;
mod text;

#[cfg(feature = "pdf")]
pub use pdf::{LopdfExtractor, PdfExtractor};
pub use text::PlainTextExtractor;

use crate::detect::{detect_format_from_bytes, SourceFormat};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Trait for text extractors.
///
/// Implement this trait to add another extraction strategy.
pub trait TextExtractor: Send + Sync {
    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Check if this extractor can handle the given format.
    fn supports(&self, format: SourceFormat) -> bool;

    /// Extract text from the document bytes.
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String>;

    /// Extract text from a file.
    fn extract_file(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        self.extract_bytes(&bytes)
    }
}

/// Text produced by the chain, with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Raw extracted text (may be empty)
    pub text: String,

    /// Name of the extractor that produced the text
    pub extractor: String,

    /// Detected source format
    pub format: SourceFormat,
}

/// Ordered list of extractors tried one after another.
pub struct ExtractorChain {
    extractors: Vec<Arc<dyn TextExtractor>>,
}

impl ExtractorChain {
    /// Create a new empty chain.
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Create a chain with the built-in extractors, best first.
    pub fn with_defaults() -> Self {
        let mut chain = Self::new();
        #[cfg(feature = "pdf")]
        {
            chain.register(Arc::new(PdfExtractor::new()));
            chain.register(Arc::new(LopdfExtractor::new()));
        }
        chain.register(Arc::new(PlainTextExtractor::new()));
        chain
    }

    /// Append an extractor to the end of the chain.
    pub fn register(&mut self, extractor: Arc<dyn TextExtractor>) {
        self.extractors.push(extractor);
    }

    /// Names of the registered extractors, in order.
    pub fn names(&self) -> Vec<&str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Check if any extractor handles the format.
    pub fn supports(&self, format: SourceFormat) -> bool {
        self.extractors.iter().any(|e| e.supports(format))
    }

    /// Extract text from a file.
    ///
    /// A missing file is reported as [`Error::SourceNotFound`].
    pub fn extract_file(&self, path: &Path) -> Result<Extraction> {
        if !path.exists() {
            return Err(Error::SourceNotFound(path.to_path_buf()));
        }
        let bytes = fs::read(path)?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        self.extract_bytes(&bytes)
    }

    /// Extract text from in-memory document bytes.
    ///
    /// Extractors that fail are skipped with a warning. An empty result is
    /// kept only if no later extractor produces text.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<Extraction> {
        let format = detect_format_from_bytes(bytes)?;
        let mut empty: Option<Extraction> = None;
        let mut last_error: Option<Error> = None;

        for extractor in self.extractors.iter().filter(|e| e.supports(format)) {
            match extractor.extract_bytes(bytes) {
                Ok(text) if text.trim().is_empty() => {
                    log::warn!("Extractor {} produced no text", extractor.name());
                    empty.get_or_insert(Extraction {
                        text,
                        extractor: extractor.name().to_string(),
                        format,
                    });
                }
                Ok(text) => {
                    log::debug!(
                        "Extractor {} produced {} characters",
                        extractor.name(),
                        text.chars().count()
                    );
                    return Ok(Extraction {
                        text,
                        extractor: extractor.name().to_string(),
                        format,
                    });
                }
                Err(e) => {
                    log::warn!("Extractor {} failed: {}", extractor.name(), e);
                    last_error = Some(e);
                }
            }
        }

        if let Some(extraction) = empty {
            return Ok(extraction);
        }
        Err(last_error.unwrap_or_else(|| Error::NoExtractor(format.to_string())))
    }
}

impl Default for ExtractorChain {
    fn default() -> Self {
        Self::with_defaults()
    }
}
