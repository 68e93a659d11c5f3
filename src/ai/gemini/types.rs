//! Shared Gemini payload types used by the generation and transcription
//! clients.

use serde::{Deserialize, Serialize};

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline media content parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 inline payload used for audio requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Request envelope for the `generateContent` endpoint.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
    #[serde(rename = "safetySettings")]
    pub safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_count: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

/// Safety settings disabling upstream content blocking for all categories.
pub fn permissive_safety_settings() -> Vec<SafetySetting> {
    [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ]
    .iter()
    .map(|category| SafetySetting {
        category: category.to_string(),
        threshold: "BLOCK_NONE".to_string(),
    })
    .collect()
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// The first text part of the first candidate, if any.
    pub fn first_text(&self) -> Option<String> {
        self.candidates.first().and_then(|c| {
            c.content.parts.iter().find_map(|p| match p {
                Part::Text { text } => Some(text.clone()),
                Part::InlineData { .. } => None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_text_skips_inline_data_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "inlineData": { "mimeType": "audio/wav", "data": "QUJD" } },
                        { "text": "hello" }
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(response.first_text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_missing_candidates_deserializes_to_empty() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.candidates.is_empty());
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_request_serializes_camel_case_config() {
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![],
            generation_config: GenerationConfig {
                temperature: 0.3,
                max_output_tokens: 8192,
                top_p: 0.8,
                top_k: 40,
                candidate_count: Some(1),
            },
            safety_settings: permissive_safety_settings(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"maxOutputTokens\":8192"));
        assert!(json.contains("\"topP\":0.8"));
        assert!(json.contains("\"candidateCount\":1"));
        assert!(json.contains("\"safetySettings\""));
        assert!(json.contains("\"BLOCK_NONE\""));
    }
}
