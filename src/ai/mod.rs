//! AI service integration for presentation generation and transcription.
//!
//! Provides the service seams the orchestrator composes over, plus the Gemini
//! implementations and in-memory mocks.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiGenerationClient, GeminiTranscriptionClient};
pub use mock::{MockGenerationClient, MockTranscriptionClient};

use crate::models::GenerationRequest;
use crate::Result;
use async_trait::async_trait;

/// Produces the raw model text for a presentation generation request.
///
/// Implementations own transport concerns (timeouts, retries, upstream error
/// classification); the returned text is handed to the extractor untouched.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate_raw(&self, request: &GenerationRequest) -> Result<String>;
}

/// Produces the raw transcript text for an audio payload.
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    async fn transcribe_raw(&self, audio: &[u8]) -> Result<String>;
}
