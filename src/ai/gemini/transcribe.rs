use super::client::GeminiHttpClient;
use super::types::{
    permissive_safety_settings, Content, GenerateContentRequest, GenerationConfig, InlineData, Part,
};
use crate::ai::TranscriptionService;
use crate::retry::RetryPolicy;
use crate::{prompts, Result};
use async_trait::async_trait;
use base64::Engine as _;
use std::time::Duration;

// Transcription completes faster than generation, so it gets a shorter
// per-attempt budget and one more retry.
const TIMEOUT: Duration = Duration::from_secs(45);
const MAX_RETRIES: usize = 3;
const INITIAL_DELAY: Duration = Duration::from_millis(1000);

// Deterministic decoding: transcription wants the most literal reading.
const TEMPERATURE: f32 = 0.0;
const MAX_OUTPUT_TOKENS: u32 = 4096;
const TOP_P: f32 = 0.8;
const TOP_K: u32 = 10;

const AUDIO_MIME_TYPE: &str = "audio/wav";

/// Gemini-backed audio transcription.
pub struct GeminiTranscriptionClient {
    http: GeminiHttpClient,
}

impl GeminiTranscriptionClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                TIMEOUT,
                RetryPolicy::new(MAX_RETRIES, INITIAL_DELAY),
                client,
            ),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    #[cfg(test)]
    fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.http = self.http.with_retry_policy(retry);
        self
    }

    fn build_request(audio: &[u8]) -> GenerateContentRequest {
        let encoded = base64::engine::general_purpose::STANDARD.encode(audio);

        GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::Text {
                        text: prompts::TRANSCRIPTION_INSTRUCTION.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: AUDIO_MIME_TYPE.to_string(),
                            data: encoded,
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
                top_p: TOP_P,
                top_k: TOP_K,
                candidate_count: None,
            },
            safety_settings: permissive_safety_settings(),
        }
    }
}

#[async_trait]
impl TranscriptionService for GeminiTranscriptionClient {
    async fn transcribe_raw(&self, audio: &[u8]) -> Result<String> {
        tracing::debug!(
            "Requesting transcription from Gemini model {} ({} audio bytes)",
            self.http.model(),
            audio.len()
        );
        self.http.generate_content(&Self::build_request(audio)).await
    }
}
