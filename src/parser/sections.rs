//! Section header detection and slicing.
//!
//! Headers are matched on a canonical key (uppercase, alphanumerics only),
//! so `Technical Skills`, `TECHNICAL-SKILLS` and `technical skills:` are the
//! same header. A slice runs from the line after its header to the next line
//! that is any recognized header.

use std::fmt;

/// The closed set of recognized section headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionHeader {
    Summary,
    Education,
    Experience,
    Projects,
    TechnicalSkills,
    Skills,
}

impl SectionHeader {
    /// Every recognized header.
    pub const ALL: [SectionHeader; 6] = [
        SectionHeader::Summary,
        SectionHeader::Education,
        SectionHeader::Experience,
        SectionHeader::Projects,
        SectionHeader::TechnicalSkills,
        SectionHeader::Skills,
    ];

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            SectionHeader::Summary => "SUMMARY",
            SectionHeader::Education => "EDUCATION",
            SectionHeader::Experience => "EXPERIENCE",
            SectionHeader::Projects => "PROJECTS",
            SectionHeader::TechnicalSkills => "TECHNICAL SKILLS",
            SectionHeader::Skills => "SKILLS",
        }
    }

    /// Canonical key used for matching.
    pub fn key(&self) -> &'static str {
        match self {
            SectionHeader::TechnicalSkills => "TECHNICALSKILLS",
            other => other.name(),
        }
    }

    /// Classify a line as a header, if it is one.
    pub fn from_line(line: &str) -> Option<Self> {
        let key = canonical_key(line);
        Self::ALL.into_iter().find(|header| header.key() == key)
    }
}

impl fmt::Display for SectionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uppercase a string and strip everything that is not alphanumeric.
pub fn canonical_key(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Check if a line is any recognized section header.
pub fn is_section_header(line: &str) -> bool {
    SectionHeader::from_line(line).is_some()
}

/// Find the index of the first line matching `header`.
pub fn find_header<S: AsRef<str>>(lines: &[S], header: SectionHeader) -> Option<usize> {
    lines
        .iter()
        .position(|line| canonical_key(line.as_ref()) == header.key())
}

/// Lines belonging to `header`, excluding the header itself.
///
/// Empty if the header is absent or directly followed by another header.
pub fn slice_section<S: AsRef<str>>(lines: &[S], header: SectionHeader) -> &[S] {
    let Some(start) = find_header(lines, header) else {
        log::debug!("Section {} not found", header);
        return &[];
    };

    let body = &lines[start + 1..];
    let end = body
        .iter()
        .position(|line| is_section_header(line.as_ref()))
        .unwrap_or(body.len());

    log::debug!(
        "Section {} at line {}, {} content lines",
        header,
        start,
        end
    );
    &body[..end]
}

/// One detected header with the size of its slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    /// Which header was found
    pub header: SectionHeader,
    /// Line index of the header
    pub start: usize,
    /// Number of content lines after the header
    pub len: usize,
}

/// List every recognized header in document order.
pub fn outline<S: AsRef<str>>(lines: &[S]) -> Vec<SectionSpan> {
    let positions: Vec<(usize, SectionHeader)> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| SectionHeader::from_line(line.as_ref()).map(|h| (idx, h)))
        .collect();

    positions
        .iter()
        .enumerate()
        .map(|(i, &(start, header))| {
            let end = positions.get(i + 1).map_or(lines.len(), |&(next, _)| next);
            SectionSpan {
                header,
                start,
                len: end - start - 1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<&'static str> {
        vec![
            "Jane Doe",
            "+1 323-555-0100 | jane@example.com",
            "SUMMARY",
            "Engineer who builds things.",
            "EDUCATION",
            "USC",
            "MS Spatial Data Science, 2024",
            "Projects:",
            "Route Optimizer May 2023",
            "Technical-Skills",
            "Languages: Rust",
        ]
    }

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key("Technical Skills"), "TECHNICALSKILLS");
        assert_eq!(canonical_key("TECHNICAL-SKILLS"), "TECHNICALSKILLS");
        assert_eq!(canonical_key("  technical skills: "), "TECHNICALSKILLS");
    }

    #[test]
    fn test_header_matching_ignores_case_and_punctuation() {
        for line in ["Technical Skills", "TECHNICAL-SKILLS", "technical skills"] {
            assert_eq!(
                SectionHeader::from_line(line),
                Some(SectionHeader::TechnicalSkills)
            );
        }
        assert_eq!(SectionHeader::from_line("Skills"), Some(SectionHeader::Skills));
        assert_eq!(SectionHeader::from_line("Skills and more"), None);
    }

    #[test]
    fn test_find_header() {
        let lines = sample();
        assert_eq!(find_header(&lines, SectionHeader::Education), Some(4));
        assert_eq!(find_header(&lines, SectionHeader::Projects), Some(7));
        assert_eq!(find_header(&lines, SectionHeader::Experience), None);
    }

    #[test]
    fn test_slice_stops_at_next_header() {
        let lines = sample();
        assert_eq!(
            slice_section(&lines, SectionHeader::Education),
            &["USC", "MS Spatial Data Science, 2024"]
        );
        assert_eq!(
            slice_section(&lines, SectionHeader::Summary),
            &["Engineer who builds things."]
        );
        assert_eq!(
            slice_section(&lines, SectionHeader::TechnicalSkills),
            &["Languages: Rust"]
        );
    }

    #[test]
    fn test_slice_never_contains_a_header() {
        let lines = sample();
        for header in SectionHeader::ALL {
            let slice = slice_section(&lines, header);
            assert!(slice.iter().all(|line| !is_section_header(line)));
        }
    }

    #[test]
    fn test_missing_or_empty_section() {
        let lines = vec!["Name", "EDUCATION", "PROJECTS", "thing"];
        assert!(slice_section(&lines, SectionHeader::Education).is_empty());
        assert!(slice_section(&lines, SectionHeader::Skills).is_empty());
        assert_eq!(slice_section(&lines, SectionHeader::Projects), &["thing"]);
    }

    #[test]
    fn test_outline() {
        let spans = outline(&sample());
        let headers: Vec<_> = spans.iter().map(|s| s.header).collect();
        assert_eq!(
            headers,
            vec![
                SectionHeader::Summary,
                SectionHeader::Education,
                SectionHeader::Projects,
                SectionHeader::TechnicalSkills,
            ]
        );
        assert_eq!(spans[1].start, 4);
        assert_eq!(spans[1].len, 2);
        assert_eq!(spans[3].len, 1);
    }
}
