//! # resume-extract
//!
//! Turns the text extraction of a one-page résumé into a structured record
//! (name, contact, education, projects, skills) for a downstream renderer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resume_extract::{render, ParseOptions, ResumeParser};
//!
//! fn main() -> resume_extract::Result<()> {
//!     let options = ParseOptions::new()
//!         .with_subtitle("Software Engineer")
//!         .with_default_github("https://github.com/example");
//!     let parsed = ResumeParser::with_options(options).parse_file("resume.pdf")?;
//!
//!     let json = render::to_json(&parsed.record, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Extraction**: PDF or text → raw text, with fallbacks ([`extract`])
//! - **Normalization**: line endings, bullets, hyphenation ([`normalize`])
//! - **Segmentation**: ALL-CAPS headers split the lines into sections
//! - **Parsing**: contact line, education pairs, projects, skills
//! - **Rendering**: `resume.json` and `resume_raw.json` ([`render`])
//!
//! The layout is assumed to be fixed. Missing or malformed sections yield
//! empty fields rather than errors.

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, SourceFormat};
pub use error::{Error, Result};
pub use extract::{Extraction, ExtractorChain, TextExtractor};
pub use model::{
    ContactInfo, EducationEntry, ProjectEntry, RawRecord, ResumeLines, ResumeRecord, Skills,
};
pub use normalize::{normalize, NormalizeOptions, Normalizer};
pub use parser::{ParseOptions, ParsedResume, ResumeParser, SectionHeader};
pub use render::{JsonFormat, OutputPaths};

use std::path::Path;

/// Parse extracted résumé text with default options.
///
/// # Example
///
/// ```
/// let record = resume_extract::parse_text("Jane Doe\nEDUCATION\nUSC\nMS, 2024");
/// assert_eq!(record.name, "Jane Doe");
/// assert_eq!(record.education[0].school, "USC");
/// ```
pub fn parse_text(text: &str) -> ResumeRecord {
    ResumeParser::new().parse(text).record
}

/// Extract and parse a résumé file with default options.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParsedResume> {
    ResumeParser::new().parse_file(path)
}

/// Extract the raw text of a résumé file.
///
/// # Example
///
/// ```no_run
/// let text = resume_extract::extract_text("resume.pdf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let extraction = ExtractorChain::with_defaults().extract_file(path.as_ref())?;
    Ok(extraction.text)
}

/// Extract, parse and write both records.
///
/// # Example
///
/// ```no_run
/// use resume_extract::{convert_file, OutputPaths, ParseOptions};
///
/// let parsed = convert_file("resume.pdf", &OutputPaths::in_dir("site"), ParseOptions::default())?;
/// println!("{} projects", parsed.record.projects.len());
/// # Ok::<(), resume_extract::Error>(())
/// ```
pub fn convert_file<P: AsRef<Path>>(
    path: P,
    outputs: &OutputPaths,
    options: ParseOptions,
) -> Result<ParsedResume> {
    let parsed = ResumeParser::with_options(options).parse_file(path)?;
    render::write_outputs(&parsed, outputs, JsonFormat::Pretty)?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_defaults() {
        let record = parse_text("Jane Doe\nEDUCATION\nUSC\nMS, 2024");
        assert_eq!(record.source, "resume.pdf");
        assert_eq!(record.resume_url, "./resume.pdf");
        assert_eq!(record.contact.github, "");
        assert_eq!(record.education, vec![EducationEntry::new("USC", "MS, 2024")]);
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("no/such/resume.pdf");
        assert!(matches!(result, Err(Error::SourceNotFound(_))));
    }

    #[test]
    fn test_extract_text_from_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Jane Doe\n").unwrap();
        assert_eq!(extract_text(&path).unwrap(), "Jane Doe\n");
    }
}
