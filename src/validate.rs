//! Structural validation of candidate presentation documents.
//!
//! Converts the loosely-typed JSON recovered by [`crate::extract`] into a
//! strongly-typed [`PresentationDocument`], or reports exactly which rule the
//! candidate broke. Validation is all-or-nothing; there is no auto-repair.

use crate::models::{PresentationDocument, Section, MIN_SECTIONS};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;

fn required_string(candidate: &Value, key: &str) -> Result<String> {
    match candidate.get(key).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        Some(_) => Err(Error::ValidationFailure(format!("field '{}' is empty", key))),
        None => Err(Error::ValidationFailure(format!(
            "field '{}' is missing or not a string",
            key
        ))),
    }
}

/// Check a candidate against the structural contract and produce the typed
/// document, stamped with the supplied generation time.
pub fn validate(candidate: &Value, generated_at: DateTime<Utc>) -> Result<PresentationDocument> {
    let title = required_string(candidate, "title")?;
    let one_liner = required_string(candidate, "oneLiner")?;

    // Optional metadata; a blank or non-string value is dropped rather than
    // failing the whole document.
    let language = candidate
        .get("language")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let entries = candidate
        .get("structure")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            Error::ValidationFailure("field 'structure' is missing or not an array".to_string())
        })?;

    if entries.len() < MIN_SECTIONS {
        return Err(Error::ValidationFailure(format!(
            "presentation structure is too short: {} sections, need at least {}",
            entries.len(),
            MIN_SECTIONS
        )));
    }

    let mut structure = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let section = required_string(entry, "section")
            .map_err(|e| Error::ValidationFailure(format!("structure[{}]: {}", index, e)))?;
        let content = required_string(entry, "content")
            .map_err(|e| Error::ValidationFailure(format!("structure[{}]: {}", index, e)))?;
        structure.push(Section { section, content });
    }

    Ok(PresentationDocument {
        title,
        one_liner,
        language,
        structure,
        generated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sections(count: usize) -> Vec<Value> {
        (0..count)
            .map(|i| json!({"section": format!("Heading {}", i), "content": format!("Body {}", i)}))
            .collect()
    }

    fn candidate_with_sections(count: usize) -> Value {
        json!({
            "title": "Bakery Vision",
            "oneLiner": "Inventory by camera",
            "language": "en",
            "structure": sections(count),
        })
    }

    #[test]
    fn test_validate_accepts_three_sections() {
        let doc = validate(&candidate_with_sections(3), Utc::now()).unwrap();
        assert_eq!(doc.title, "Bakery Vision");
        assert_eq!(doc.language.as_deref(), Some("en"));
        assert_eq!(doc.structure.len(), 3);
    }

    #[test]
    fn test_validate_rejects_two_sections() {
        let err = validate(&candidate_with_sections(2), Utc::now()).unwrap_err();
        assert!(matches!(err, Error::ValidationFailure(msg) if msg.contains("too short")));
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let mut candidate = candidate_with_sections(3);
        candidate["title"] = json!("   ");
        let err = validate(&candidate, Utc::now()).unwrap_err();
        assert!(matches!(err, Error::ValidationFailure(msg) if msg.contains("'title'")));
    }

    #[test]
    fn test_validate_rejects_missing_one_liner() {
        let mut candidate = candidate_with_sections(3);
        candidate.as_object_mut().unwrap().remove("oneLiner");
        let err = validate(&candidate, Utc::now()).unwrap_err();
        assert!(matches!(err, Error::ValidationFailure(msg) if msg.contains("'oneLiner'")));
    }

    #[test]
    fn test_validate_rejects_empty_section_content_and_names_the_index() {
        let mut candidate = candidate_with_sections(4);
        candidate["structure"][2]["content"] = json!("");
        let err = validate(&candidate, Utc::now()).unwrap_err();
        assert!(matches!(err, Error::ValidationFailure(msg) if msg.contains("structure[2]")));
    }

    #[test]
    fn test_validate_rejects_non_object_section_entry() {
        let mut candidate = candidate_with_sections(3);
        candidate["structure"][1] = json!("just a string");
        let err = validate(&candidate, Utc::now()).unwrap_err();
        assert!(matches!(err, Error::ValidationFailure(_)));
    }

    #[test]
    fn test_validate_drops_blank_language() {
        let mut candidate = candidate_with_sections(3);
        candidate["language"] = json!("");
        let doc = validate(&candidate, Utc::now()).unwrap();
        assert!(doc.language.is_none());
    }

    #[test]
    fn test_validate_stamps_the_supplied_timestamp() {
        let stamp = Utc::now();
        let doc = validate(&candidate_with_sections(3), stamp).unwrap();
        assert_eq!(doc.generated_at, stamp);
    }
}
