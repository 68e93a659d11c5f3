use super::client::GeminiHttpClient;
use super::types::{
    permissive_safety_settings, Content, GenerateContentRequest, GenerationConfig, Part,
};
use crate::ai::GenerationService;
use crate::models::GenerationRequest;
use crate::retry::RetryPolicy;
use crate::{prompts, Result};
use async_trait::async_trait;
use std::time::Duration;

// Generation is the slow call: a long per-attempt budget and a small retry
// count, so a stuck upstream fails within ~3 minutes wall-clock.
const TIMEOUT: Duration = Duration::from_secs(60);
const MAX_RETRIES: usize = 2;
const INITIAL_DELAY: Duration = Duration::from_millis(1000);

const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;
const TOP_P: f32 = 0.8;
const TOP_K: u32 = 40;

/// Gemini-backed presentation generation.
pub struct GeminiGenerationClient {
    http: GeminiHttpClient,
}

impl GeminiGenerationClient {
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

    fn build_request(request: &GenerationRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part::Text {
                    text: prompts::GENERATION_SYSTEM.to_string(),
                }],
            }),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::Text {
                    text: prompts::render(
                        prompts::GENERATION_USER,
                        &[("source_text", request.source_text())],
                    ),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
                max_output_tokens: request
                    .max_output_tokens
                    .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
                top_p: TOP_P,
                top_k: TOP_K,
                candidate_count: Some(1),
            },
            safety_settings: permissive_safety_settings(),
        }
    }
}

#[async_trait]
impl GenerationService for GeminiGenerationClient {
    async fn generate_raw(&self, request: &GenerationRequest) -> Result<String> {
        tracing::debug!(
            "Requesting presentation generation from Gemini model {} ({} source chars)",
            self.http.model(),
            request.source_text().len()
        );
        self.http.generate_content(&Self::build_request(request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use wiremock::matchers::{body_string_contains, method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PATH_REGEX: &str = r"/v1beta/models/.+:generateContent";

    fn make_client(server: &MockServer) -> GeminiGenerationClient {
        GeminiGenerationClient::new("test-key".to_string(), "gemini-1.5-flash".to_string())
            .with_base_url(server.uri())
            .with_retry_policy(RetryPolicy::new(2, Duration::from_millis(1)))
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("We built a tool for small bakeries").unwrap()
    }

    #[tokio::test]
    async fn test_generate_raw_sends_prompt_and_returns_model_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(PATH_REGEX))
            .and(body_string_contains("small bakeries"))
            .and(body_string_contains("system_instruction"))
            .and(body_string_contains("\"temperature\":0.3"))
            .and(body_string_contains("\"maxOutputTokens\":8192"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": "{\"title\":\"T\"}" }]
                    }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let raw = make_client(&server).generate_raw(&request()).await.unwrap();
        assert_eq!(raw, "{\"title\":\"T\"}");
    }

    #[tokio::test]
    async fn test_generate_raw_honors_parameter_overrides() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(PATH_REGEX))
            .and(body_string_contains("\"temperature\":0.7"))
            .and(body_string_contains("\"maxOutputTokens\":512"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "ok" }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tuned = request().with_temperature(0.7).with_max_output_tokens(512);
        make_client(&server).generate_raw(&tuned).await.unwrap();
    }

    #[tokio::test]
    async fn test_generate_raw_maps_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(PATH_REGEX))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&server)
            .await;

        let err = make_client(&server).generate_raw(&request()).await.unwrap_err();
        assert!(matches!(err, Error::AuthenticationFailure(_)));
    }
}
