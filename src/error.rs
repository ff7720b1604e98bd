//! Error types for resume-extract.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resume-extract operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting or writing a résumé.
///
/// Parsing itself never fails: missing or malformed sections degrade to
/// empty values. Only the collaborators around the parser report errors.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source document does not exist.
    #[error("Cannot find source document: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The source is neither a PDF nor readable text.
    #[error("Unknown file format: not a PDF or UTF-8 text")]
    UnknownFormat,

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// No extraction strategy accepted the source.
    #[error("No extractor available for {0}")]
    NoExtractor(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "pdf")]
impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(feature = "pdf")]
impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtract(err.to_string())
    }
}
