//! Skills section parsing.
//!
//! Skill lines look like `• Languages: Rust, Go, Python`. Five label groups
//! are recognized; databases, cloud and tools end up in one container.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Skills;

/// One label group with its accepted phrasings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillGroup {
    Languages,
    Frameworks,
    Databases,
    Cloud,
    Tools,
}

impl SkillGroup {
    /// Every label group, in lookup order.
    pub const ALL: [SkillGroup; 5] = [
        SkillGroup::Languages,
        SkillGroup::Frameworks,
        SkillGroup::Databases,
        SkillGroup::Cloud,
        SkillGroup::Tools,
    ];

    /// Label alternation, longest phrasing first.
    fn labels(&self) -> &'static str {
        match self {
            SkillGroup::Languages => r"Programming[ \t]+Languages|Languages|Language",
            SkillGroup::Frameworks => {
                r"Frameworks[ \t]*(?:&|/|and)[ \t]*Libraries|Frameworks|Libraries"
            }
            SkillGroup::Databases => {
                r"Databases[ \t]*(?:&|/|and)[ \t]*Caching|Databases|Database|Caching"
            }
            SkillGroup::Cloud => r"Cloud[ \t]*(?:&|/|and)[ \t]*DevOps|Cloud|DevOps",
            SkillGroup::Tools => {
                r"Tools[ \t]*(?:&|/|and)[ \t]*Testing|Developer[ \t]+Tools|Tools|Testing"
            }
        }
    }

    fn regex(&self) -> &'static Regex {
        static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
            SkillGroup::ALL
                .iter()
                .map(|group| {
                    Regex::new(&format!(
                        r"(?im)^[ \t]*(?:[•■◼*\-–—][ \t]*)?(?:{})[ \t]*:[ \t]*([^\n]*)$",
                        group.labels()
                    ))
                    .unwrap()
                })
                .collect()
        });
        &PATTERNS[*self as usize]
    }

    /// Values of the first line labelled with this group.
    pub fn grab(&self, text: &str) -> Vec<String> {
        let Some(caps) = self.regex().captures(text) else {
            return Vec::new();
        };
        split_values(&caps[1])
    }
}

/// Split a comma or semicolon separated value list.
pub fn split_values(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Remove case-insensitive duplicates, keeping the first spelling seen.
pub fn dedup_case_insensitive<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.to_lowercase()))
        .collect()
}

/// Parse the skills slice.
pub fn parse_skills<S: AsRef<str>>(lines: &[S]) -> Skills {
    let text = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<_>>()
        .join("\n");

    let languages = dedup_case_insensitive(SkillGroup::Languages.grab(&text));
    let frameworks = dedup_case_insensitive(SkillGroup::Frameworks.grab(&text));
    let tools = dedup_case_insensitive(
        [SkillGroup::Databases, SkillGroup::Cloud, SkillGroup::Tools]
            .iter()
            .flat_map(|group| group.grab(&text)),
    );

    Skills {
        languages,
        frameworks,
        tools,
    }
}
