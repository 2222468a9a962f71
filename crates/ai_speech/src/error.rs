//! Error types for speech processing

use thiserror::Error;

/// Errors that can occur during speech processing
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Provider configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Connection to the provider failed
    #[error("Failed to connect to speech service: {0}")]
    ConnectionFailed(String),

    /// Request to the provider failed
    #[error("Speech request failed: {0}")]
    RequestFailed(String),

    /// The provider rejected the API credential
    #[error("Invalid or missing API credential: {0}")]
    InvalidCredential(String),

    /// Invalid audio data provided
    #[error("Invalid audio data: {0}")]
    InvalidAudio(String),

    /// Transcription produced no usable text
    #[error("Transcription produced no text")]
    EmptyTranscription,

    /// Transcription failed
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Speech synthesis failed
    #[error("Speech synthesis failed: {0}")]
    SynthesisFailed(String),

    /// The provider returned an unexpected response
    #[error("Invalid response from speech service: {0}")]
    InvalidResponse(String),

    /// Request timed out
    #[error("Speech request timed out after {0}ms")]
    Timeout(u64),
}

impl SpeechError {
    /// Check if this error indicates a credential problem
    ///
    /// Providers report bad keys either as HTTP 401 or as an error body
    /// mentioning the API key, so adapters need a single predicate.
    #[must_use]
    pub fn is_credential_error(&self) -> bool {
        match self {
            Self::InvalidCredential(_) => true,
            Self::RequestFailed(msg) | Self::TranscriptionFailed(msg) => {
                let lower = msg.to_lowercase();
                lower.contains("api key") || lower.contains("authentication")
            }
            _ => false,
        }
    }

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
