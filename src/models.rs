//! Data models and structures
//!
//! Defines the core data structures for generation requests, presentation
//! documents, transcription results, and runtime configuration.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum number of characters of source text required for generation.
pub const MIN_SOURCE_TEXT_CHARS: usize = 10;

/// Minimum number of sections an accepted presentation must have.
pub const MIN_SECTIONS: usize = 3;

/// Sentinel the transcription prompt instructs the model to return when the
/// audio carries no intelligible speech. Never surfaces to callers.
pub const NO_SPEECH_SENTINEL: &str = "TRANSCRIPTION_FAILED";

/// Immutable input to the generation pipeline.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    source_text: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Build a request from caller-supplied text, trimming surrounding
    /// whitespace and rejecting input too short to produce a useful document.
    pub fn new(source_text: &str) -> Result<Self> {
        let trimmed = source_text.trim();
        if trimmed.len() < MIN_SOURCE_TEXT_CHARS {
            return Err(Error::InvalidInput(format!(
                "source text is too short ({} chars, need at least {})",
                trimmed.len(),
                MIN_SOURCE_TEXT_CHARS
            )));
        }

        Ok(Self {
            source_text: trimmed.to_string(),
            temperature: None,
            max_output_tokens: None,
        })
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }
}

/// One heading/body pair of the generated presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub section: String,
    pub content: String,
}

/// Validated presentation, the terminal artifact of the generation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationDocument {
    pub title: String,
    pub one_liner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub structure: Vec<Section>,
    pub generated_at: DateTime<Utc>,
}

/// Accepted transcription; `text` is never empty and never the sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub text: String,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub generation_model: String,
    pub transcription_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| Error::Config("GEMINI_API_KEY not set".to_string()))?,
            generation_model: std::env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            transcription_model: std::env::var("TRANSCRIPTION_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
        })
    }
}
