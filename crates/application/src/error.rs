//! Application layer errors

use domain::DomainError;
use thiserror::Error;

/// Errors surfaced by application services
///
/// The variants map onto the HTTP layer's status codes: `Validation` and
/// `Transcription` become client errors, the rest become server errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain rule violation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request validation failed
    #[error("{0}")]
    Validation(String),

    /// Transcription failed; the message is safe to return to the client
    #[error("{0}")]
    Transcription(String),

    /// Speech synthesis failed
    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    /// Reply generation failed
    #[error("Reply generation failed: {0}")]
    Inference(String),

    /// Service is misconfigured
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An external service failed
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Unexpected internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check whether this error is caused by the client's input
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Domain(_) | Self::Validation(_) | Self::Transcription(_)
        )
    }
}
