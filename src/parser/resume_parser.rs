//! Résumé parser: runs every stage and assembles the records.

use std::path::Path;

use chrono::{DateTime, Utc};

use super::contact::{parse_contact, parse_name};
use super::education::parse_education;
use super::options::ParseOptions;
use super::projects::parse_projects;
use super::sections::{slice_section, SectionHeader};
use super::skills::parse_skills;
use crate::error::Result;
use crate::extract::ExtractorChain;
use crate::model::{RawRecord, ResumeLines, ResumeRecord};
use crate::normalize::Normalizer;

/// Output of one parser run: the structured record and the raw text record.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResume {
    /// Structured record for the renderer
    pub record: ResumeRecord,
    /// Normalized text, kept for debugging and reprocessing
    pub raw: RawRecord,
}

/// Résumé parser.
///
/// Parsing never fails on content: missing sections produce empty fields.
pub struct ResumeParser {
    options: ParseOptions,
    normalizer: Normalizer,
}

impl ResumeParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        let normalizer = Normalizer::new(options.normalize.clone());
        Self {
            options,
            normalizer,
        }
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Normalize raw text and split it into lines.
    pub fn lines(&self, text: &str) -> ResumeLines {
        ResumeLines::from_text(&self.normalizer.process(text))
    }

    /// Parse extracted text, stamping the records with the current time.
    pub fn parse(&self, text: &str) -> ParsedResume {
        self.parse_at(text, Utc::now())
    }

    /// Parse extracted text with a fixed generation timestamp.
    pub fn parse_at(&self, text: &str, generated_at: DateTime<Utc>) -> ParsedResume {
        let normalized = self.normalizer.process(text);
        let lines = ResumeLines::from_text(&normalized);
        log::debug!("Parsing {} lines", lines.len());

        let record = self.assemble(&lines, generated_at);
        let raw = RawRecord {
            generated_at,
            source: self.options.source.clone(),
            text: normalized,
        };
        ParsedResume { record, raw }
    }

    /// Extract text from a file with the default extractor chain, then parse it.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ParsedResume> {
        self.parse_file_with(path, &ExtractorChain::with_defaults())
    }

    /// Extract text from a file with a custom extractor chain, then parse it.
    pub fn parse_file_with<P: AsRef<Path>>(
        &self,
        path: P,
        chain: &ExtractorChain,
    ) -> Result<ParsedResume> {
        let extraction = chain.extract_file(path.as_ref())?;
        log::info!(
            "Extracted {} with {}",
            path.as_ref().display(),
            extraction.extractor
        );
        Ok(self.parse(&extraction.text))
    }

    fn assemble(&self, lines: &ResumeLines, generated_at: DateTime<Utc>) -> ResumeRecord {
        let lines = lines.as_slice();
        let options = &self.options;

        let summary = slice_section(lines, SectionHeader::Summary).join(" ");
        let education = parse_education(
            slice_section(lines, SectionHeader::Education),
            options.max_education,
        );
        let projects = parse_projects(
            slice_section(lines, SectionHeader::Projects),
            options.max_projects,
        );

        let mut skill_lines = slice_section(lines, SectionHeader::TechnicalSkills);
        if skill_lines.is_empty() {
            skill_lines = slice_section(lines, SectionHeader::Skills);
        }
        let skills = parse_skills(skill_lines);

        ResumeRecord {
            generated_at,
            source: options.source.clone(),
            name: parse_name(lines, options),
            subtitle: options.subtitle.clone(),
            summary,
            resume_url: options.resume_url.clone(),
            contact: parse_contact(lines, options),
            education,
            projects,
            skills,
        }
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}
