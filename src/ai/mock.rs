use super::{GenerationService, TranscriptionService};
use crate::models::GenerationRequest;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scripted response for a mock service call.
enum Scripted {
    Raw(String),
    Fail(ErrorKind),
}

/// Cloneable stand-in for [`Error`] so mocks can script failures.
#[derive(Clone)]
pub enum ErrorKind {
    Timeout,
    QuotaExceeded,
    UpstreamServerError(String),
    MalformedResponse,
}

impl ErrorKind {
    fn into_error(self) -> Error {
        match self {
            ErrorKind::Timeout => Error::Timeout("mock timeout".to_string()),
            ErrorKind::QuotaExceeded => Error::QuotaExceeded("mock quota".to_string()),
            ErrorKind::UpstreamServerError(message) => Error::UpstreamServerError(message),
            ErrorKind::MalformedResponse => Error::MalformedResponse("mock junk".to_string()),
        }
    }
}

const DEFAULT_DOCUMENT: &str = r#"{
  "title": "Mock Presentation",
  "oneLiner": "A presentation from the mock service",
  "language": "en",
  "structure": [
    {"section": "Opening", "content": "Why we are here"},
    {"section": "Middle", "content": "What we found"},
    {"section": "Closing", "content": "Where we go next"}
  ]
}"#;

#[derive(Clone)]
pub struct MockGenerationClient {
    responses: Arc<Mutex<Vec<Scripted>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a raw model output to return on the next call.
    pub fn with_raw_response(self, response: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Scripted::Raw(response.to_string()));
        self
    }

    /// Queue a transport-level failure to return on the next call.
    pub fn with_failure(self, kind: ErrorKind) -> Self {
        self.responses.lock().unwrap().push(Scripted::Fail(kind));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationService for MockGenerationClient {
    async fn generate_raw(&self, _request: &GenerationRequest) -> Result<String> {
        *self.call_count.lock().unwrap() += 1;

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(DEFAULT_DOCUMENT.to_string());
        }
        match responses.remove(0) {
            Scripted::Raw(text) => Ok(text),
            Scripted::Fail(kind) => Err(kind.into_error()),
        }
    }
}

#[derive(Clone)]
pub struct MockTranscriptionClient {
    responses: Arc<Mutex<Vec<Scripted>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockTranscriptionClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_raw_response(self, response: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Scripted::Raw(response.to_string()));
        self
    }

    pub fn with_failure(self, kind: ErrorKind) -> Self {
        self.responses.lock().unwrap().push(Scripted::Fail(kind));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockTranscriptionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptionService for MockTranscriptionClient {
    async fn transcribe_raw(&self, _audio: &[u8]) -> Result<String> {
        *self.call_count.lock().unwrap() += 1;

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok("a mock transcript of the recording".to_string());
        }
        match responses.remove(0) {
            Scripted::Raw(text) => Ok(text),
            Scripted::Fail(kind) => Err(kind.into_error()),
        }
    }
}
