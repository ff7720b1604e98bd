//! JSON rendering for résumé records.

use serde::Serialize;

use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a record to JSON.
pub fn to_json<T: Serialize>(record: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(record),
        JsonFormat::Compact => serde_json::to_string(record),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EducationEntry, RawRecord};
    use chrono::Utc;

    #[test]
    fn test_to_json_pretty() {
        let raw = RawRecord {
            generated_at: Utc::now(),
            source: "resume.pdf".to_string(),
            text: "Jane Doe".to_string(),
        };

        let json = to_json(&raw, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"text\": \"Jane Doe\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let entry = EducationEntry::new("USC", "MS");
        let json = to_json(&entry, JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"school":"USC","degree":"MS"}"#);
    }

    #[test]
    fn test_non_ascii_kept_verbatim() {
        let entry = EducationEntry::new("Université", "Diplôme • 2020");
        let json = to_json(&entry, JsonFormat::Compact).unwrap();
        assert!(json.contains("Université"));
        assert!(json.contains("•"));
    }
}
