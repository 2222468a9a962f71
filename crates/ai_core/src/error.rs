//! Error types for chat completion

use thiserror::Error;

/// Errors that can occur when talking to a chat completion backend
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Backend configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Connection to the backend failed
    #[error("Failed to connect to inference backend: {0}")]
    ConnectionFailed(String),

    /// Request to the backend failed
    #[error("Inference request failed: {0}")]
    RequestFailed(String),

    /// The backend rejected the API credential
    #[error("Inference backend rejected the credential: {0}")]
    Unauthorized(String),

    /// The backend returned a server-side error
    #[error("Inference backend error: {0}")]
    ServerError(String),

    /// The backend returned a response we could not parse
    #[error("Invalid response from inference backend: {0}")]
    InvalidResponse(String),

    /// Request timed out
    #[error("Inference request timed out after {0}ms")]
    Timeout(u64),
}

impl InferenceError {
    /// Classify a transport error, reporting the timeout actually configured
    #[must_use]
    pub fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
