use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::classify::{classify_http_failure, classify_request_error};
use crate::retry::RetryPolicy;
use crate::{Error, Result};
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini REST client shared by the generation and transcription modules.
///
/// Owns the transport policy for one kind of call: per-attempt timeout,
/// retry budget, and classification of upstream failures.
pub struct GeminiHttpClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl GeminiHttpClient {
    /// Construct a Gemini client.
    ///
    /// `model` should be the bare model ID (for example `gemini-1.5-flash`),
    /// not a `models/...`-prefixed path segment.
    pub fn new(api_key: String, model: String, timeout: Duration, retry: RetryPolicy) -> Self {
        Self::new_with_client(api_key, model, timeout, retry, Client::new())
    }

    pub fn new_with_client(
        api_key: String,
        model: String,
        timeout: Duration,
        retry: RetryPolicy,
        client: Client,
    ) -> Self {
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();

        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
            retry,
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    #[cfg(test)]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Returns the configured model ID without the `models/` prefix.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn attempt(&self, url: &str, request: &GenerateContentRequest) -> Result<String> {
        let response = self
            .client
            .post(url)
            .timeout(self.timeout)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Gemini: {}", e);
                classify_request_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error (status {}): {}", status, error_text);
            return Err(classify_http_failure(status, &error_text));
        }

        response.text().await.map_err(classify_request_error)
    }

    /// Calls Gemini's `generateContent` endpoint and returns the first text
    /// part of the first candidate.
    ///
    /// Transient upstream failures are retried per the configured policy;
    /// client-class failures propagate after the first attempt.
    pub async fn generate_content(&self, request: &GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let body = self
            .retry
            .run("generateContent", || self.attempt(&url, request))
            .await?;

        let envelope: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            Error::MalformedResponse(format!("unexpected Gemini response envelope: {}", e))
        })?;

        envelope.first_text().ok_or_else(|| {
            Error::MalformedResponse("no text candidate in Gemini response".to_string())
        })
    }
}
