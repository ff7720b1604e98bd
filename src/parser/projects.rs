//! Projects section parsing.
//!
//! A single pass over the slice with at most one project in progress:
//!
//! - a header line (no bullet, month name followed by a year) flushes the
//!   current project and opens a new one
//! - a bullet line adds a bullet to the current project
//! - any other line continues the last bullet, or starts one if there is
//!   none yet
//!
//! Lines before the first header are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::ProjectEntry;
use crate::normalize::BULLET;

/// Characters accepted as a bullet prefix.
pub const BULLET_PREFIXES: [char; 7] = [BULLET, '■', '◼', '-', '–', '—', '*'];

static RE_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:Jan|January|Feb|February|Mar|March|Apr|April|May|Jun|June|Jul|July|Aug|August|Sep|Sept|September|Oct|October|Nov|November|Dec|December)\b",
    )
    .unwrap()
});

static RE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// How a single line of the projects slice is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectLine<'a> {
    /// Opens a new project.
    Header { title: &'a str, time: &'a str },
    /// A bullet, with its marker stripped.
    Bullet(&'a str),
    /// Wrapped text belonging to the previous bullet.
    Continuation(&'a str),
}

impl<'a> ProjectLine<'a> {
    /// Classify a trimmed line.
    pub fn classify(line: &'a str) -> Self {
        if is_bullet(line) {
            return ProjectLine::Bullet(strip_bullet(line));
        }
        match split_header(line) {
            Some((title, time)) => ProjectLine::Header { title, time },
            None => ProjectLine::Continuation(line),
        }
    }
}

/// Check if a line starts with a bullet marker.
pub fn is_bullet(line: &str) -> bool {
    line.starts_with(BULLET_PREFIXES)
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(BULLET_PREFIXES).trim_start()
}

/// Split a project header into title and date range.
///
/// A line is a header when a month name has a year somewhere after it.
/// The split is at the first such month, so a range like `Jan - Mar 2024`
/// keeps its start month.
pub fn split_header(line: &str) -> Option<(&str, &str)> {
    let month = RE_MONTH
        .find_iter(line)
        .find(|m| RE_YEAR.is_match(&line[m.end()..]))?;

    let title = line[..month.start()].trim_end_matches(|c: char| {
        c.is_whitespace() || BULLET_PREFIXES.contains(&c) || matches!(c, '|' | ',' | ':')
    });
    let time = line[month.start()..].trim();
    Some((title.trim(), time))
}

/// Accumulator holding the finished projects and the one in progress.
#[derive(Debug, Default)]
struct ProjectAccumulator {
    current: Option<ProjectEntry>,
    done: Vec<ProjectEntry>,
}

impl ProjectAccumulator {
    fn open(&mut self, title: &str, time: &str) {
        self.flush();
        self.current = Some(ProjectEntry::new(title, time));
    }

    fn push_bullet(&mut self, text: &str) {
        if let Some(current) = self.current.as_mut() {
            current.bullets.push(text.to_string());
        }
    }

    fn continue_bullet(&mut self, text: &str) {
        let Some(current) = self.current.as_mut() else {
            return;
        };
        match current.bullets.last_mut() {
            Some(last) => {
                if !last.is_empty() {
                    last.push(' ');
                }
                last.push_str(text);
            }
            None => current.bullets.push(text.to_string()),
        }
    }

    fn flush(&mut self) {
        if let Some(mut entry) = self.current.take() {
            entry.bullets.retain(|bullet| !bullet.trim().is_empty());
            self.done.push(entry);
        }
    }

    fn finish(mut self) -> Vec<ProjectEntry> {
        self.flush();
        self.done
    }
}

/// Parse the projects slice.
pub fn parse_projects<S: AsRef<str>>(lines: &[S], max: Option<usize>) -> Vec<ProjectEntry> {
    let mut acc = ProjectAccumulator::default();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        match ProjectLine::classify(line) {
            ProjectLine::Header { title, time } => acc.open(title, time),
            ProjectLine::Bullet(text) => acc.push_bullet(text),
            ProjectLine::Continuation(text) => acc.continue_bullet(text),
        }
    }

    let mut projects = acc.finish();
    log::debug!("Parsed {} projects", projects.len());
    if let Some(max) = max {
        projects.truncate(max);
    }
    projects
}
