//! Parsing options and configuration.

use crate::normalize::NormalizeOptions;

/// Default source identifier written into both records.
pub const DEFAULT_SOURCE: &str = "resume.pdf";

/// Default relative link to the résumé file.
pub const DEFAULT_RESUME_URL: &str = "./resume.pdf";

/// Name used when the document has no lines at all.
pub const DEFAULT_FALLBACK_NAME: &str = "Your Name";

/// Options for turning extracted text into a [`ResumeRecord`](crate::ResumeRecord).
///
/// Everything person-specific (subtitle, GitHub homepage) lives here rather
/// than in the parsers, so the pipeline can run on synthetic input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Source identifier (`source` field)
    pub source: String,

    /// Fixed subtitle line (`subtitle` field)
    pub subtitle: String,

    /// Relative reference to the résumé file (`resumeUrl` field)
    pub resume_url: String,

    /// GitHub URL used when the contact line has none
    pub default_github: String,

    /// Name used for an empty document
    pub fallback_name: String,

    /// Maximum number of education entries (None = unlimited)
    pub max_education: Option<usize>,

    /// Maximum number of projects (None = unlimited)
    pub max_projects: Option<usize>,

    /// Split a name whose space was lost in extraction ("JaneDoe" → "Jane Doe")
    pub split_joined_name: bool,

    /// Text normalization stages
    pub normalize: NormalizeOptions,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the résumé file reference.
    pub fn with_resume_url(mut self, url: impl Into<String>) -> Self {
        self.resume_url = url.into();
        self
    }

    /// Set the fallback GitHub URL.
    pub fn with_default_github(mut self, url: impl Into<String>) -> Self {
        self.default_github = url.into();
        self
    }

    /// Set the name used for an empty document.
    pub fn with_fallback_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = name.into();
        self
    }

    /// Cap the number of education entries.
    pub fn with_max_education(mut self, max: Option<usize>) -> Self {
        self.max_education = max;
        self
    }

    /// Cap the number of projects.
    pub fn with_max_projects(mut self, max: Option<usize>) -> Self {
        self.max_projects = max;
        self
    }

    /// Enable or disable splitting of camel-joined names.
    pub fn with_split_joined_name(mut self, split: bool) -> Self {
        self.split_joined_name = split;
        self
    }

    /// Set normalization options.
    pub fn with_normalize(mut self, options: NormalizeOptions) -> Self {
        self.normalize = options;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            subtitle: String::new(),
            resume_url: DEFAULT_RESUME_URL.to_string(),
            default_github: String::new(),
            fallback_name: DEFAULT_FALLBACK_NAME.to_string(),
            max_education: Some(2),
            max_projects: None,
            split_joined_name: false,
            normalize: NormalizeOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_subtitle("Software Engineer")
            .with_default_github("https://github.com/jane")
            .with_max_projects(Some(6))
            .with_max_education(None)
            .with_split_joined_name(true);

        assert_eq!(options.subtitle, "Software Engineer");
        assert_eq!(options.default_github, "https://github.com/jane");
        assert_eq!(options.max_projects, Some(6));
        assert_eq!(options.max_education, None);
        assert!(options.split_joined_name);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.source, "resume.pdf");
        assert_eq!(options.resume_url, "./resume.pdf");
        assert_eq!(options.max_education, Some(2));
        assert_eq!(options.max_projects, None);
        assert!(!options.split_joined_name);
    }
}
