//! Structured résumé record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact details from the pipe-delimited contact line.
///
/// Unmatched fields are empty strings, never guessed from other fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub location: String,
}

impl ContactInfo {
    /// Contact info with every field empty except the github fallback.
    pub fn with_github(github: impl Into<String>) -> Self {
        Self {
            github: github.into(),
            ..Default::default()
        }
    }
}

/// One school/degree pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
}

impl EducationEntry {
    /// Create a new entry.
    pub fn new(school: impl Into<String>, degree: impl Into<String>) -> Self {
        Self {
            school: school.into(),
            degree: degree.into(),
        }
    }

    /// Check if both fields are empty.
    pub fn is_empty(&self) -> bool {
        self.school.is_empty() && self.degree.is_empty()
    }
}

/// One project with its date range and bullet points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub time: String,
    pub bullets: Vec<String>,
}

impl ProjectEntry {
    /// Create an entry with no bullets yet.
    pub fn new(title: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            time: time.into(),
            bullets: Vec::new(),
        }
    }
}

/// Skills grouped into the three containers the renderer shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    /// Databases, cloud/DevOps and general tools merged together.
    pub tools: Vec<String>,
}

impl Skills {
    /// Check if all containers are empty.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.frameworks.is_empty() && self.tools.is_empty()
    }
}

/// The assembled résumé handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub name: String,
    pub subtitle: String,
    pub summary: String,
    #[serde(rename = "resumeUrl")]
    pub resume_url: String,
    pub contact: ContactInfo,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Skills,
}

/// The normalized text kept alongside the record for debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub text: String,
}
