//! Résumé parsing: section segmentation and the per-section parsers.

pub mod contact;
pub mod education;
mod options;
pub mod projects;
mod resume_parser;
pub mod sections;
pub mod skills;

pub use options::{ParseOptions, DEFAULT_FALLBACK_NAME, DEFAULT_RESUME_URL, DEFAULT_SOURCE};
pub use resume_parser::{ParsedResume, ResumeParser};
pub use sections::{find_header, slice_section, SectionHeader};
