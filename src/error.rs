//! Error handling and custom error types
//!
//! Provides unified error handling across the pipeline using thiserror. Every
//! failure a caller can observe is one of these categories; raw transport
//! errors never cross the orchestrator boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailure(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Validation failed: {0}")]
    ValidationFailure(String),

    #[error("Upstream server error: {0}")]
    UpstreamServerError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether another transport attempt could change the outcome.
    ///
    /// Client-class failures (bad input, bad credentials, exhausted quota)
    /// are terminal; server errors, timeouts, and connectivity failures are
    /// worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Timeout(_) | Error::NetworkFailure(_) | Error::UpstreamServerError(_)
        )
    }

    /// Short, actionable message suitable for end-user display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => {
                "The input is too short or empty. Please provide more content."
            }
            Error::AuthenticationFailure(_) => {
                "Authentication failed. Please check API configuration."
            }
            Error::QuotaExceeded(_) => "API quota exceeded. Please try again in a few minutes.",
            Error::Timeout(_) => "The request timed out. Please try with shorter content.",
            Error::NetworkFailure(_) => "Could not reach the AI service. Please try again.",
            Error::MalformedResponse(_) => {
                "Failed to generate a valid presentation format. Please try again."
            }
            Error::ValidationFailure(_) => {
                "The generated presentation was incomplete. Please try again."
            }
            Error::UpstreamServerError(_) => "The AI service had a problem. Please try again.",
            Error::Io(_) | Error::Serialization(_) | Error::Config(_) => {
                "An internal error occurred. Please try again."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_categories() {
        assert!(Error::Timeout("t".to_string()).is_retryable());
        assert!(Error::NetworkFailure("n".to_string()).is_retryable());
        assert!(Error::UpstreamServerError("5xx".to_string()).is_retryable());

        assert!(!Error::InvalidInput("short".to_string()).is_retryable());
        assert!(!Error::AuthenticationFailure("key".to_string()).is_retryable());
        assert!(!Error::QuotaExceeded("quota".to_string()).is_retryable());
        assert!(!Error::MalformedResponse("junk".to_string()).is_retryable());
        assert!(!Error::ValidationFailure("rule".to_string()).is_retryable());
    }

    #[test]
    fn test_user_messages_are_non_empty() {
        let errors = [
            Error::InvalidInput(String::new()),
            Error::AuthenticationFailure(String::new()),
            Error::QuotaExceeded(String::new()),
            Error::Timeout(String::new()),
            Error::NetworkFailure(String::new()),
            Error::MalformedResponse(String::new()),
            Error::ValidationFailure(String::new()),
            Error::UpstreamServerError(String::new()),
        ];
        for error in errors {
            assert!(!error.user_message().is_empty());
        }
    }
}
