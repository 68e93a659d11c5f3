//! Centralized classification of upstream failures.
//!
//! Maps transport-level failures (HTTP status + response body, reqwest
//! errors) onto the error taxonomy in one place. The marker tables are the
//! documented mapping rules; nothing else in the crate inspects upstream
//! error text.

use crate::Error;
use reqwest::StatusCode;

/// Body substrings that indicate an exhausted quota or rate limit.
const QUOTA_MARKERS: &[&str] = &[
    "quota",
    "rate limit",
    "resource_exhausted",
    "too many requests",
];

/// Body substrings that indicate bad or missing credentials.
const AUTH_MARKERS: &[&str] = &[
    "api key",
    "authentication",
    "unauthorized",
    "permission_denied",
    "unauthenticated",
];

fn contains_any(haystack: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| haystack.contains(marker))
}

/// Classify a completed HTTP response that did not have a 2xx status.
///
/// 5xx responses become the retryable `UpstreamServerError` regardless of
/// body text; 4xx responses are terminal and are split into quota, auth, and
/// generic input defects by status code and body markers.
pub fn classify_http_failure(status: StatusCode, body: &str) -> Error {
    let detail = format!("status {}: {}", status.as_u16(), body.trim());

    if status.is_server_error() {
        return Error::UpstreamServerError(detail);
    }

    let lowered = body.to_lowercase();
    if status == StatusCode::TOO_MANY_REQUESTS || contains_any(&lowered, QUOTA_MARKERS) {
        Error::QuotaExceeded(detail)
    } else if status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
        || contains_any(&lowered, AUTH_MARKERS)
    {
        Error::AuthenticationFailure(detail)
    } else {
        Error::InvalidInput(detail)
    }
}

/// Classify a reqwest transport error (the request never completed).
pub fn classify_request_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else {
        Error::NetworkFailure(e.to_string())
    }
}

/// Refine the final error once retries are exhausted.
///
/// A 5xx body can still carry quota or auth text (e.g. an overloaded proxy);
/// after the retry loop gives up, promote the uncategorized server error to
/// the more specific category when its message matches a marker.
pub fn refine_category(error: Error) -> Error {
    match error {
        Error::UpstreamServerError(message) => {
            let lowered = message.to_lowercase();
            if contains_any(&lowered, QUOTA_MARKERS) {
                Error::QuotaExceeded(message)
            } else if contains_any(&lowered, AUTH_MARKERS) {
                Error::AuthenticationFailure(message)
            } else {
                Error::UpstreamServerError(message)
            }
        }
        other => other,
    }
}
