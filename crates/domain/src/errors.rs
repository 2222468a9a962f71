//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input failed validation before any processing
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Audio payload is malformed or unusable
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// A transcript violated its invariants (empty or whitespace-only)
    #[error("Invalid transcript: {0}")]
    InvalidTranscript(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_message() {
        let err = DomainError::validation("audio is required");
        assert_eq!(err.to_string(), "Validation failed: audio is required");
    }

    #[test]
    fn invalid_audio_error_message() {
        let err = DomainError::InvalidAudio("zero bytes".to_string());
        assert_eq!(err.to_string(), "Invalid audio: zero bytes");
    }

    #[test]
    fn invalid_transcript_error_message() {
        let err = DomainError::InvalidTranscript("blank".to_string());
        assert_eq!(err.to_string(), "Invalid transcript: blank");
    }
}
