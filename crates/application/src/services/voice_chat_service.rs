//! Voice chat pipeline orchestration
//!
//! Runs one request through the full pipeline: validate the audio,
//! transcribe it, generate a reply, then synthesize the reply. Synthesis
//! failure is non-fatal; the exchange is returned without audio.

use crate::error::ApplicationError;
use crate::ports::SpeechPort;
use crate::services::ReplyService;
use domain::{AudioFormat, VoiceExchange};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Orchestrates the transcribe, reply, synthesize pipeline
pub struct VoiceChatService {
    speech: Arc<dyn SpeechPort>,
    reply: Arc<ReplyService>,
}

impl VoiceChatService {
    /// Create the service from its ports
    #[must_use]
    pub fn new(speech: Arc<dyn SpeechPort>, reply: Arc<ReplyService>) -> Self {
        Self { speech, reply }
    }

    /// Process one voice chat request end to end
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` for empty audio and
    /// `ApplicationError::Transcription` when the transcript cannot be
    /// produced. Reply generation and synthesis never fail the request.
    #[instrument(skip(self, audio), fields(size = audio.len(), format = %format))]
    pub async fn process(
        &self,
        audio: Vec<u8>,
        format: AudioFormat,
    ) -> Result<VoiceExchange, ApplicationError> {
        if audio.is_empty() {
            return Err(ApplicationError::Validation(
                "Empty audio file received".to_string(),
            ));
        }

        let transcription = self.speech.transcribe(audio, format).await?;
        info!(chars = transcription.text.len(), "audio transcribed");

        let reply = self.reply.respond(&transcription.text).await;

        let audio = match self.speech.synthesize(reply.text.clone()).await {
            Ok(synthesis) => Some(synthesis.audio),
            Err(err) => {
                warn!(error = %err, "speech synthesis failed, returning text only");
                None
            }
        };

        Ok(VoiceExchange::new(transcription.text, reply, audio))
    }

    /// Whether transcription has a usable credential
    #[must_use]
    pub fn transcription_configured(&self) -> bool {
        self.speech.transcription_configured()
    }

    /// Whether synthesis has a usable credential
    #[must_use]
    pub fn synthesis_configured(&self) -> bool {
        self.speech.synthesis_configured()
    }
}
