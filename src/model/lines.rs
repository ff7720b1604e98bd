//! Line stream built from normalized text.

use std::ops::Index;

/// Ordered sequence of non-empty, trimmed text lines.
///
/// This is the only view of the document the parsers receive; none of them
/// split text themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeLines {
    lines: Vec<String>,
}

impl ResumeLines {
    /// Build the line stream from normalized text.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.split('\n'))
    }

    /// Build the line stream from pre-split lines, trimming each and
    /// dropping the ones that end up empty.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        Self { lines }
    }

    /// Get the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Iterate over the lines in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Borrow the lines as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }
}

impl Index<usize> for ResumeLines {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.lines[index]
    }
}

impl AsRef<[String]> for ResumeLines {
    fn as_ref(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_drops_blank_lines() {
        let lines = ResumeLines::from_text("  Jane Doe \n\n   \n EDUCATION\nUSC");
        assert_eq!(lines.len(), 3);
        assert_eq!(&lines[0], "Jane Doe");
        assert_eq!(lines.get(1), Some("EDUCATION"));
        assert_eq!(lines.get(3), None);
    }

    #[test]
    fn test_empty() {
        assert!(ResumeLines::from_text("").is_empty());
        assert!(ResumeLines::from_lines(["", "  "]).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let lines = ResumeLines::from_lines(["b", "a", "c"]);
        let collected: Vec<_> = lines.iter().collect();
        assert_eq!(collected, vec!["b", "a", "c"]);
    }
}
