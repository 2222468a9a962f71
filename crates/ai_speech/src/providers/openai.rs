//! OpenAI speech provider
//!
//! Implements both ports against the OpenAI API:
//! - `SpeechToText` via `POST /audio/transcriptions` (Whisper)
//! - `TextToSpeech` via `POST /audio/speech`
//!
//! Transcription requests use `response_format=text` so the body is the
//! transcript itself rather than a JSON envelope.

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::{SpeechToText, TextToSpeech};
use crate::types::{AudioData, Transcription};
use async_trait::async_trait;
use reqwest::multipart;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// OpenAI speech provider for transcription and synthesis
#[derive(Debug, Clone)]
pub struct OpenAiSpeechProvider {
    client: reqwest::Client,
    config: SpeechConfig,
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    speed: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the message from an OpenAI JSON error body, falling back to the
/// raw body when it is not the expected envelope
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map_or_else(|_| body.to_string(), |envelope| envelope.error.message)
}

impl OpenAiSpeechProvider {
    /// Create a new provider from configuration
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid
    /// or the HTTP client cannot be constructed.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SpeechError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Check if the provider carries an API credential
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn api_key(&self) -> Result<&str, SpeechError> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| SpeechError::Configuration("no API key configured".to_string()))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl SpeechToText for OpenAiSpeechProvider {
    #[instrument(skip(self, audio), fields(format = %audio.format().extension(), size = audio.size_bytes()))]
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError> {
        let api_key = self.api_key()?.to_string();

        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("audio data is empty".to_string()));
        }

        let filename = audio.filename("audio");
        let mime = audio.mime_type();
        let language = self.config.language.clone();

        let part = multipart::Part::bytes(audio.into_data())
            .file_name(filename)
            .mime_str(mime)
            .map_err(|e| SpeechError::InvalidAudio(e.to_string()))?;

        let form = multipart::Form::new()
            .part("file", part)
            .text("model", self.config.stt_model.clone())
            .text("language", language)
            .text("response_format", "text");

        debug!(model = %self.config.stt_model, "sending transcription request");

        let response = self
            .client
            .post(self.endpoint("audio/transcriptions"))
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SpeechError::from_reqwest(e, self.config.timeout_ms))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            let message = error_message(&response.text().await.unwrap_or_default());
            return Err(SpeechError::InvalidCredential(message));
        }
        if !status.is_success() {
            let message = error_message(&response.text().await.unwrap_or_default());
            warn!(status = %status, "transcription request failed");
            let lower = message.to_lowercase();
            if lower.contains("api key") || lower.contains("authentication") {
                return Err(SpeechError::InvalidCredential(message));
            }
            return Err(SpeechError::TranscriptionFailed(format!("HTTP {status}: {message}")));
        }

        let text = response
            .text()
            .await
            .map_err(|e| SpeechError::from_reqwest(e, self.config.timeout_ms))?;
        let transcription = Transcription::new(text).with_language(self.config.language.clone());

        if transcription.is_empty() {
            return Err(SpeechError::EmptyTranscription);
        }

        debug!(chars = transcription.text.len(), "transcription complete");
        Ok(transcription)
    }

    fn model_name(&self) -> &str {
        &self.config.stt_model
    }
}

#[async_trait]
impl TextToSpeech for OpenAiSpeechProvider {
    #[instrument(skip(self, text), fields(chars = text.len()))]
    async fn synthesize(&self, text: &str) -> Result<AudioData, SpeechError> {
        let api_key = self.api_key()?.to_string();

        if text.trim().is_empty() {
            return Err(SpeechError::SynthesisFailed("input text is empty".to_string()));
        }

        // OpenAI treats 1.0 as the default; omit it to keep the request minimal.
        let speed = (self.config.speed - 1.0).abs() > f32::EPSILON;
        let request = SpeechRequest {
            model: &self.config.tts_model,
            input: text,
            voice: &self.config.voice,
            response_format: self.config.output_format.extension(),
            speed: speed.then_some(self.config.speed),
        };

        debug!(model = %self.config.tts_model, voice = %self.config.voice, "sending synthesis request");

        let response = self
            .client
            .post(self.endpoint("audio/speech"))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SpeechError::from_reqwest(e, self.config.timeout_ms))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            let message = error_message(&response.text().await.unwrap_or_default());
            return Err(SpeechError::InvalidCredential(message));
        }
        if !status.is_success() {
            let message = error_message(&response.text().await.unwrap_or_default());
            warn!(status = %status, "synthesis request failed");
            return Err(SpeechError::SynthesisFailed(format!("HTTP {status}: {message}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::from_reqwest(e, self.config.timeout_ms))?;
        if bytes.is_empty() {
            return Err(SpeechError::InvalidResponse("empty audio response".to_string()));
        }

        debug!(bytes = bytes.len(), "synthesis complete");
        Ok(AudioData::new(bytes.to_vec(), self.config.output_format))
    }

    fn model_name(&self) -> &str {
        &self.config.tts_model
    }
}
