//! Data model for résumé extraction.
//!
//! [`ResumeLines`] is the line stream every parser consumes; the record
//! types are what the parsers produce and what gets serialized.

mod lines;
mod record;

pub use lines::ResumeLines;
pub use record::{ContactInfo, EducationEntry, ProjectEntry, RawRecord, ResumeRecord, Skills};
