//! Text normalization for raw résumé extractions.
//!
//! PDF text extractors disagree on line endings, bullet glyphs and how
//! wrapped words are split. Everything downstream assumes the canonical
//! form produced here:
//!
//! 1. Unicode NFC and ligature repair (optional)
//! 2. `\r\n` / `\r` → `\n`, non-breaking spaces → spaces
//! 3. Hyphenated line breaks rejoined (`data-\nintensive` → `data-intensive`)
//! 4. Bullet glyphs mapped to [`BULLET`]
//! 5. Trailing whitespace removed from every line
//! 6. Three or more line breaks collapsed to two
//! 7. Whole text trimmed
//!
//! Normalizing already-normalized text returns it unchanged.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Canonical bullet marker.
pub const BULLET: char = '•';

/// Glyphs that are mapped to [`BULLET`] wherever they appear.
const BULLET_GLYPHS: [char; 18] = [
    '■', '◼', '●', '○', '□', '◆', '◇', '▪', '▫', '►', '▻', '▸', '‣', '⁃', '∙', '·', '◦', '❖',
];

const LIGATURES: [(&str, &str); 7] = [
    ("\u{FB00}", "ff"),
    ("\u{FB01}", "fi"),
    ("\u{FB02}", "fl"),
    ("\u{FB03}", "ffi"),
    ("\u{FB04}", "ffl"),
    ("\u{FB05}", "st"),
    ("\u{FB06}", "st"),
];

static RE_HYPHEN_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w)-[^\S\n]*\n(\w)").unwrap());

// Dashes only count as bullets at the start of a line; a plain hyphen also
// needs trailing whitespace so "-5%" survives.
static RE_DASH_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*)(?:[‒–—―]|-([ \t]))").unwrap());

static RE_BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Options for text normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Fix ligatures (fi, fl, etc.)
    pub fix_ligatures: bool,

    /// Rejoin words hyphenated across a line break
    pub fix_hyphenation: bool,

    /// Map bullet glyph variants to the canonical marker
    pub standardize_bullets: bool,
}

impl NormalizeOptions {
    /// All stages enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the line-structure stages (line endings, trimming, blank lines).
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: false,
            fix_ligatures: false,
            fix_hyphenation: false,
            standardize_bullets: false,
        }
    }

    /// Enable or disable Unicode NFC normalization.
    pub fn with_unicode(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Enable or disable ligature repair.
    pub fn with_ligatures(mut self, enabled: bool) -> Self {
        self.fix_ligatures = enabled;
        self
    }

    /// Enable or disable hyphenation repair.
    pub fn with_hyphenation(mut self, enabled: bool) -> Self {
        self.fix_hyphenation = enabled;
        self
    }

    /// Enable or disable bullet standardization.
    pub fn with_bullets(mut self, enabled: bool) -> Self {
        self.standardize_bullets = enabled;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            fix_hyphenation: true,
            standardize_bullets: true,
        }
    }
}

/// Text normalization pipeline.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Create a new normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// Get the options this normalizer runs with.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Process text through the normalization pipeline.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.fix_ligatures {
            for (ligature, replacement) in LIGATURES {
                result = result.replace(ligature, replacement);
            }
        }

        result = normalize_line_endings(&result);

        if self.options.fix_hyphenation {
            result = fix_hyphenation(&result);
        }

        if self.options.standardize_bullets {
            result = standardize_bullets(&result);
        }

        result = trim_line_ends(&result);
        result = RE_BLANK_RUNS.replace_all(&result, "\n\n").into_owned();

        result.trim().to_string()
    }
}

/// Normalize text with all stages enabled.
pub fn normalize(text: &str) -> String {
    Normalizer::default().process(text)
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{00A0}', " ")
}

fn fix_hyphenation(text: &str) -> String {
    // Matches cannot overlap, so "a-\nb-\nc" needs a second round.
    let mut result = text.to_string();
    loop {
        let next = RE_HYPHEN_BREAK.replace_all(&result, "$1-$2").into_owned();
        if next == result {
            return result;
        }
        result = next;
    }
}

fn standardize_bullets(text: &str) -> String {
    let mapped: String = text
        .chars()
        .map(|c| if BULLET_GLYPHS.contains(&c) { BULLET } else { c })
        .collect();
    RE_DASH_BULLET
        .replace_all(&mapped, format!("${{1}}{}${{2}}", BULLET).as_str())
        .into_owned()
}

fn trim_line_ends(text: &str) -> String {
    text.split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
