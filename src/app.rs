//! Orchestration of the generation and transcription pipelines.
//!
//! `App` composes the transport clients with the extractor and validator:
//! caller input goes in, a validated document (or one typed error) comes out.
//! Each invocation is an independent unit of work; concurrent calls share
//! nothing mutable.

use crate::ai::{
    GeminiGenerationClient, GeminiTranscriptionClient, GenerationService, TranscriptionService,
};
use crate::classify::refine_category;
use crate::models::{
    Config, GenerationRequest, PresentationDocument, TranscriptionResult, NO_SPEECH_SENTINEL,
};
use crate::{extract, validate, Error, Result};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

pub struct App {
    generation: Box<dyn GenerationService>,
    transcription: Box<dyn TranscriptionService>,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub generation: Box<dyn GenerationService>,
    pub transcription: Box<dyn TranscriptionService>,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_services(services: AppServices) -> Self {
        Self {
            generation: services.generation,
            transcription: services.transcription,
        }
    }

    /// Construct an app from explicit configuration.
    pub fn from_config(config: &Config) -> Self {
        // Reuse one HTTP connection pool across both clients.
        let http_client = reqwest::Client::new();

        Self::with_services(AppServices {
            generation: Box::new(GeminiGenerationClient::new_with_client(
                config.gemini_api_key.clone(),
                config.generation_model.clone(),
                http_client.clone(),
            )),
            transcription: Box::new(GeminiTranscriptionClient::new_with_client(
                config.gemini_api_key.clone(),
                config.transcription_model.clone(),
                http_client,
            )),
        })
    }

    /// Turn free-form source text into a validated presentation document.
    pub async fn generate(&self, source_text: &str) -> Result<PresentationDocument> {
        let request = GenerationRequest::new(source_text)?;
        let request_id = Uuid::new_v4();

        info!(
            "[{}] Starting presentation generation ({} source chars)",
            request_id,
            request.source_text().len()
        );

        let raw = self
            .generation
            .generate_raw(&request)
            .await
            .map_err(refine_category)?;

        let candidate = extract::extract(&raw)?;
        let document = validate::validate(&candidate, Utc::now())?;

        info!(
            "[{}] Presentation generated: \"{}\" ({} sections, language {})",
            request_id,
            document.title,
            document.structure.len(),
            document.language.as_deref().unwrap_or("unknown")
        );

        Ok(document)
    }

    /// Transcribe recorded audio into text.
    ///
    /// The no-speech sentinel and empty output both fail as validation
    /// errors so callers never mistake silence for a successful transcript.
    pub async fn transcribe(&self, audio: &[u8]) -> Result<TranscriptionResult> {
        if audio.is_empty() {
            return Err(Error::InvalidInput("no audio data provided".to_string()));
        }

        let request_id = Uuid::new_v4();
        info!(
            "[{}] Starting transcription ({} audio bytes)",
            request_id,
            audio.len()
        );

        let raw = self
            .transcription
            .transcribe_raw(audio)
            .await
            .map_err(refine_category)?;

        let text = raw.trim();
        if text.is_empty() || text == NO_SPEECH_SENTINEL {
            return Err(Error::ValidationFailure(
                "audio unclear or empty".to_string(),
            ));
        }

        info!(
            "[{}] Transcription successful ({} chars)",
            request_id,
            text.len()
        );

        Ok(TranscriptionResult {
            text: text.to_string(),
        })
    }
}
