//! Speech port adapter
//!
//! Wraps the OpenAI speech provider behind the application's `SpeechPort`
//! and translates provider errors into the client-facing messages the API
//! has always returned. The adapter also covers the unconfigured case: a
//! gateway without an OpenAI key still constructs, but transcription and
//! synthesis report their unavailability.

use ai_speech::{AudioData, OpenAiSpeechProvider, SpeechConfig, SpeechError, SpeechToText, TextToSpeech};
use application::error::ApplicationError;
use application::ports::{SpeechPort, SynthesisResult, TranscriptionResult};
use async_trait::async_trait;
use domain::AudioFormat;
use tracing::instrument;

const MSG_STT_NOT_CONFIGURED: &str =
    "OpenAI API key not configured. Please add your OpenAI API key to use speech recognition.";
const MSG_STT_EMPTY: &str =
    "Could not understand the audio. Please speak clearly and ensure your microphone is working.";
const MSG_STT_BAD_CREDENTIAL: &str =
    "OpenAI API key is invalid or not configured. Please check your API key.";

/// Adapter binding `SpeechPort` to the OpenAI speech provider
pub struct SpeechAdapter {
    provider: Option<OpenAiSpeechProvider>,
}

impl SpeechAdapter {
    /// Create the adapter; `api_key` of `None` yields an unconfigured adapter
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the provider cannot be
    /// constructed.
    pub fn new(api_key: Option<String>) -> Result<Self, ApplicationError> {
        let provider = match api_key {
            Some(key) if !key.is_empty() => Some(
                OpenAiSpeechProvider::new(SpeechConfig::with_api_key(key))
                    .map_err(|e| ApplicationError::Configuration(e.to_string()))?,
            ),
            _ => None,
        };
        Ok(Self { provider })
    }

    /// Create an adapter with no credential
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { provider: None }
    }

    fn to_provider_format(format: AudioFormat) -> ai_speech::AudioFormat {
        match format {
            AudioFormat::Wav => ai_speech::AudioFormat::Wav,
            AudioFormat::Mp3 => ai_speech::AudioFormat::Mp3,
            AudioFormat::Webm => ai_speech::AudioFormat::Webm,
            AudioFormat::Ogg => ai_speech::AudioFormat::Ogg,
            AudioFormat::M4a => ai_speech::AudioFormat::M4a,
        }
    }

    fn from_provider_format(format: ai_speech::AudioFormat) -> AudioFormat {
        match format {
            ai_speech::AudioFormat::Wav => AudioFormat::Wav,
            ai_speech::AudioFormat::Mp3 => AudioFormat::Mp3,
            ai_speech::AudioFormat::Webm => AudioFormat::Webm,
            ai_speech::AudioFormat::Ogg => AudioFormat::Ogg,
            ai_speech::AudioFormat::M4a => AudioFormat::M4a,
        }
    }

    fn map_transcription_error(err: &SpeechError) -> ApplicationError {
        let message = match err {
            SpeechError::EmptyTranscription => MSG_STT_EMPTY.to_string(),
            SpeechError::Configuration(_) => MSG_STT_NOT_CONFIGURED.to_string(),
            e if e.is_credential_error() => MSG_STT_BAD_CREDENTIAL.to_string(),
            e => format!("Failed to transcribe audio: {e}"),
        };
        ApplicationError::Transcription(message)
    }
}

#[async_trait]
impl SpeechPort for SpeechAdapter {
    #[instrument(skip(self, audio), fields(size = audio.len(), format = %format))]
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        format: AudioFormat,
    ) -> Result<TranscriptionResult, ApplicationError> {
        let Some(provider) = &self.provider else {
            return Err(ApplicationError::Transcription(
                MSG_STT_NOT_CONFIGURED.to_string(),
            ));
        };

        let data = AudioData::new(audio, Self::to_provider_format(format));
        let transcription = provider
            .transcribe(data)
            .await
            .map_err(|e| Self::map_transcription_error(&e))?;

        Ok(TranscriptionResult {
            text: transcription.text,
            language: transcription.language,
        })
    }

    #[instrument(skip(self, text), fields(chars = text.len()))]
    async fn synthesize(&self, text: String) -> Result<SynthesisResult, ApplicationError> {
        let Some(provider) = &self.provider else {
            return Err(ApplicationError::Synthesis(
                "no synthesis credential configured".to_string(),
            ));
        };

        let audio = provider
            .synthesize(&text)
            .await
            .map_err(|e| ApplicationError::Synthesis(e.to_string()))?;

        let format = Self::from_provider_format(audio.format());
        Ok(SynthesisResult {
            audio: audio.into_data(),
            format,
        })
    }

    fn transcription_configured(&self) -> bool {
        self.provider.is_some()
    }

    fn synthesis_configured(&self) -> bool {
        self.provider.is_some()
    }
}
