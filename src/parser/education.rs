//! Education section parsing.
//!
//! Lines are consumed in pairs: a school line followed by a degree line.
//! There is no recovery when the source breaks that layout; an odd line
//! count leaves a trailing entry with an empty degree.

use once_cell::sync::Lazy;
use regex::Regex;

use super::sections::is_section_header;
use crate::model::EducationEntry;

static RE_SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Parse the education slice into school/degree pairs.
pub fn parse_education<S: AsRef<str>>(lines: &[S], max: Option<usize>) -> Vec<EducationEntry> {
    let mut entries = Vec::new();

    for pair in lines.chunks(2) {
        let school = pair[0].as_ref();
        if is_section_header(school) {
            log::debug!("Education slice ran into header {:?}", school);
            break;
        }

        let degree = match pair.get(1).map(|line| line.as_ref()) {
            Some(degree) if is_section_header(degree) => {
                entries.push(EducationEntry::new(collapse(school), String::new()));
                break;
            }
            Some(degree) => degree,
            None => "",
        };
        entries.push(EducationEntry::new(collapse(school), collapse(degree)));
    }

    entries.retain(|entry| !entry.is_empty());
    if let Some(max) = max {
        entries.truncate(max);
    }
    entries
}

fn collapse(s: &str) -> String {
    RE_SPACE_RUNS.replace_all(s.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs() {
        let lines = [
            "USC",
            "MS Spatial Data Science, 2024",
            "UCLA",
            "BS Computer Science, 2020",
        ];
        let entries = parse_education(&lines, None);
        assert_eq!(
            entries,
            vec![
                EducationEntry::new("USC", "MS Spatial Data Science, 2024"),
                EducationEntry::new("UCLA", "BS Computer Science, 2020"),
            ]
        );
    }

    #[test]
    fn test_truncated_to_max() {
        let lines = ["A", "a", "B", "b", "C", "c"];
        assert_eq!(parse_education(&lines, Some(2)).len(), 2);
        assert_eq!(parse_education(&lines, None).len(), 3);
    }

    #[test]
    fn test_odd_line_count_leaves_partial_entry() {
        let lines = ["USC", "MS, 2024", "UCLA"];
        let entries = parse_education(&lines, None);
        assert_eq!(entries[1], EducationEntry::new("UCLA", ""));
    }

    #[test]
    fn test_stops_at_header() {
        let lines = ["USC", "MS, 2024", "PROJECTS", "Thing"];
        let entries = parse_education(&lines, None);
        assert_eq!(entries, vec![EducationEntry::new("USC", "MS, 2024")]);

        let lines = ["USC", "Projects"];
        let entries = parse_education(&lines, None);
        assert_eq!(entries, vec![EducationEntry::new("USC", "")]);
    }

    #[test]
    fn test_whitespace_collapsed() {
        let lines = ["University  of   Somewhere", "BS   Math"];
        let entries = parse_education(&lines, None);
        assert_eq!(entries[0], EducationEntry::new("University of Somewhere", "BS Math"));
    }

    #[test]
    fn test_empty_slice() {
        let lines: [&str; 0] = [];
        assert!(parse_education(&lines, Some(2)).is_empty());
    }
}
