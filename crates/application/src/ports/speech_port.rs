//! Speech processing port

use crate::error::ApplicationError;
use async_trait::async_trait;
use domain::AudioFormat;

/// Result of transcribing an audio clip
#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    /// Transcribed text, trimmed and non-empty
    pub text: String,
    /// Language the transcription used, if known
    pub language: Option<String>,
}

/// Result of synthesizing speech from text
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Encoded audio bytes
    pub audio: Vec<u8>,
    /// Format of the audio bytes
    pub format: AudioFormat,
}

/// Port for speech-to-text and text-to-speech
#[cfg_attr(any(test, feature = "test-mocks"), mockall::automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Transcribe audio bytes to text
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Transcription` with a client-safe message
    /// when transcription fails for any reason.
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        format: AudioFormat,
    ) -> Result<TranscriptionResult, ApplicationError>;

    /// Synthesize speech from text
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Synthesis` when synthesis fails. Callers
    /// treat this as non-fatal.
    async fn synthesize(&self, text: String) -> Result<SynthesisResult, ApplicationError>;

    /// Whether transcription has a usable credential
    fn transcription_configured(&self) -> bool;

    /// Whether synthesis has a usable credential
    fn synthesis_configured(&self) -> bool;
}
