//! Name and contact line extraction.
//!
//! The name is the first line of the document and the contact block is the
//! second one, conventionally `phone | email | links | location`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::options::ParseOptions;
use crate::model::ContactInfo;

/// Index of the contact line in the line stream.
pub const CONTACT_LINE: usize = 1;

const MIN_PHONE_DIGITS: usize = 9;
const MIN_PHONE_TOKEN_DIGITS: usize = 7;

static RE_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\(?\d[\d\s().\-]{7,}\d").unwrap());

static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap());

static RE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://[^\s|]+|\b(?:www\.)?(?:linkedin|github)\.com(?:/[^\s|]*)?").unwrap()
});

static RE_CAMEL_JOIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\p{Ll})(\p{Lu})").unwrap());

/// Document title: the first line, or the configured fallback.
pub fn parse_name<S: AsRef<str>>(lines: &[S], options: &ParseOptions) -> String {
    let Some(first) = lines.first() else {
        return options.fallback_name.clone();
    };

    let name = first.as_ref().trim();
    if options.split_joined_name {
        split_joined_name(name)
    } else {
        name.to_string()
    }
}

/// Insert the space lost between joined name parts ("JaneDoe" → "Jane Doe").
///
/// Names that already contain a space are returned unchanged.
pub fn split_joined_name(name: &str) -> String {
    if name.contains(' ') {
        return name.to_string();
    }
    RE_CAMEL_JOIN.replace_all(name, "$1 $2").trim().to_string()
}

/// Contact details from the designated contact line.
pub fn parse_contact<S: AsRef<str>>(lines: &[S], options: &ParseOptions) -> ContactInfo {
    let Some(line) = lines.get(CONTACT_LINE) else {
        return ContactInfo::with_github(options.default_github.clone());
    };
    let mut contact = parse_contact_line(line.as_ref());
    if contact.github.is_empty() {
        contact.github = options.default_github.clone();
    }
    contact
}

/// Extract contact fields from one line. Fields with no match stay empty.
pub fn parse_contact_line(line: &str) -> ContactInfo {
    let location = line
        .split('|')
        .rev()
        .map(str::trim)
        .find(|segment| is_location_candidate(segment))
        .unwrap_or_default()
        .to_string();

    // Digits inside URLs, addresses and the location (ZIP codes) must not be
    // read as a phone number.
    let masked = RE_EMAIL.replace_all(line, "|");
    let mut masked = RE_URL.replace_all(&masked, "|").into_owned();
    if !location.is_empty() {
        masked = masked.replace(location.as_str(), "|");
    }
    let phone = RE_PHONE
        .find_iter(&masked)
        .map(|m| m.as_str().trim())
        .find(|candidate| digit_count(candidate) >= MIN_PHONE_DIGITS)
        .unwrap_or_default()
        .to_string();

    let email = RE_EMAIL
        .find(line)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let mut linkedin = String::new();
    let mut github = String::new();
    for url in RE_URL.find_iter(line).map(|m| clean_url(m.as_str())) {
        let lower = url.to_lowercase();
        if linkedin.is_empty() && lower.contains("linkedin.com") {
            linkedin = url.to_string();
        } else if github.is_empty() && lower.contains("github.com") {
            github = url.to_string();
        }
    }

    log::debug!(
        "Contact line parsed: phone={:?} email={:?} location={:?}",
        phone,
        email,
        location
    );

    ContactInfo {
        phone,
        email,
        linkedin,
        github,
        location,
    }
}

fn is_location_candidate(segment: &str) -> bool {
    !segment.is_empty()
        && !RE_EMAIL.is_match(segment)
        && !RE_URL.is_match(segment)
        && !looks_like_phone(segment)
}

fn looks_like_phone(segment: &str) -> bool {
    let short_token = digit_count(segment) >= MIN_PHONE_TOKEN_DIGITS
        && segment
            .chars()
            .all(|c| c.is_ascii_digit() || "+-(). ".contains(c));
    // Only a segment that is a phone number as a whole; "CA 90007-1234" is not.
    short_token
        || RE_PHONE
            .find(segment)
            .is_some_and(|m| m.as_str() == segment && digit_count(segment) >= MIN_PHONE_DIGITS)
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

fn clean_url(url: &str) -> &str {
    url.trim_end_matches(|c| matches!(c, ',' | ';' | '.' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ParseOptions {
        ParseOptions::new().with_default_github("https://github.com/example")
    }

    #[test]
    fn test_contact_fields_are_independent() {
        let lines = [
            "Jane Doe",
            "+1 323-555-0100 | jane@example.com | linkedin.com/in/jane | Los Angeles, CA",
        ];
        let contact = parse_contact(&lines, &options());
        assert_eq!(contact.phone, "+1 323-555-0100");
        assert_eq!(contact.email, "jane@example.com");
        assert!(contact.linkedin.contains("linkedin.com/in/jane"));
        assert_eq!(contact.location, "Los Angeles, CA");
        assert_eq!(contact.github, "https://github.com/example");
    }

    #[test]
    fn test_full_urls() {
        let contact = parse_contact_line(
            "jane@example.com | https://www.linkedin.com/in/jane/ | https://github.com/jane, | (323) 555-0100",
        );
        assert_eq!(contact.linkedin, "https://www.linkedin.com/in/jane/");
        assert_eq!(contact.github, "https://github.com/jane");
        assert_eq!(contact.phone, "(323) 555-0100");
        assert_eq!(contact.location, "");
    }

    #[test]
    fn test_found_github_beats_default() {
        let lines = ["Jane", "github.com/jane | Austin, TX"];
        let contact = parse_contact(&lines, &options());
        assert_eq!(contact.github, "github.com/jane");
        assert_eq!(contact.location, "Austin, TX");
    }

    #[test]
    fn test_url_digits_are_not_a_phone() {
        let contact = parse_contact_line("linkedin.com/in/jane-123456789 | Boston, MA");
        assert_eq!(contact.phone, "");
        assert_eq!(contact.location, "Boston, MA");
    }

    #[test]
    fn test_location_scan_stops_at_first_candidate() {
        let contact = parse_contact_line("Remote | Seattle, WA | 206.555.0100");
        assert_eq!(contact.location, "Seattle, WA");
        assert_eq!(contact.phone, "206.555.0100");
    }

    #[test]
    fn test_zip_code_stays_in_location() {
        let contact = parse_contact_line("jane@example.com | Los Angeles, CA 90007-1234");
        assert_eq!(contact.location, "Los Angeles, CA 90007-1234");
        assert_eq!(contact.phone, "");

        let contact =
            parse_contact_line("+1 323-555-0100 | jane@example.com | Los Angeles, CA 90007-1234");
        assert_eq!(contact.phone, "+1 323-555-0100");
        assert_eq!(contact.location, "Los Angeles, CA 90007-1234");
    }

    #[test]
    fn test_short_document() {
        let contact = parse_contact(&["Jane Doe"], &options());
        assert_eq!(contact, ContactInfo::with_github("https://github.com/example"));

        let empty: [&str; 0] = [];
        assert_eq!(parse_contact(&empty, &options()).phone, "");
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name(&["  Jane Doe  ", "x"], &options()), "Jane Doe");

        let empty: [&str; 0] = [];
        assert_eq!(parse_name(&empty, &options()), "Your Name");
    }

    #[test]
    fn test_split_joined_name() {
        assert_eq!(split_joined_name("ZhengshuZhang"), "Zhengshu Zhang");
        assert_eq!(split_joined_name("Jane McDonald"), "Jane McDonald");

        let options = options().with_split_joined_name(true);
        assert_eq!(parse_name(&["JaneDoe"], &options), "Jane Doe");
        assert_eq!(parse_name(&["JaneDoe"], &ParseOptions::default()), "JaneDoe");
    }
}
