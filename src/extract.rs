//! Recovery of a JSON document from raw model output.
//!
//! Generative models routinely wrap JSON in prose or code fences. This module
//! deterministically strips that noise and parses the remainder, failing
//! explicitly instead of attempting partial recovery. The same input always
//! produces the same result.

use crate::{Error, Result};
use serde_json::Value;
use tracing::error;

/// Keys every candidate document must carry before validation even starts.
const REQUIRED_KEYS: &[&str] = &["title", "oneLiner", "structure"];

/// Upper bound on how much attempted text an error message retains.
const DIAGNOSTIC_CHARS: usize = 200;

fn truncate_for_diagnostics(text: &str) -> String {
    if text.chars().count() <= DIAGNOSTIC_CHARS {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(DIAGNOSTIC_CHARS).collect();
        format!("{}…", prefix)
    }
}

/// Remove a leading ```json or ``` fence and its trailing closing marker.
fn strip_code_fences(text: &str) -> &str {
    let body = if let Some(rest) = text.strip_prefix("```json") {
        rest
    } else if let Some(rest) = text.strip_prefix("```") {
        rest
    } else {
        return text;
    };

    let body = body.trim_start();
    match body.trim_end().strip_suffix("```") {
        Some(inner) => inner.trim_end(),
        None => body,
    }
}

/// Isolate the first `{` .. last `}` span, discarding surrounding prose.
fn slice_to_object(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Recover a candidate presentation document from raw model text.
///
/// The candidate has passed a shape gate (required keys present, `structure`
/// is an array) but is not yet validated; see [`crate::validate`].
pub fn extract(raw: &str) -> Result<Value> {
    let text = strip_code_fences(raw.trim());
    let candidate = slice_to_object(text);

    let parsed: Value = serde_json::from_str(candidate).map_err(|e| {
        error!("JSON parsing failed: {}", e);
        error!("Attempted to parse: {}", candidate);
        Error::MalformedResponse(format!(
            "could not parse model output as JSON: {} (attempted: {})",
            e,
            truncate_for_diagnostics(candidate)
        ))
    })?;

    for key in REQUIRED_KEYS {
        if parsed.get(key).is_none() {
            return Err(Error::MalformedResponse(format!(
                "model output is missing required key '{}'",
                key
            )));
        }
    }

    if !parsed["structure"].is_array() {
        return Err(Error::MalformedResponse(
            "model output field 'structure' is not an array".to_string(),
        ));
    }

    Ok(parsed)
}
