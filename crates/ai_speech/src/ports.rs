//! Port traits for speech processing
//!
//! These traits decouple the rest of the system from concrete speech
//! providers. Implementations live in the `providers` module.

use crate::error::SpeechError;
use crate::types::{AudioData, Transcription};
use async_trait::async_trait;

/// Speech-to-Text port
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if transcription fails or produces no text.
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError>;

    /// Name of the transcription model in use
    fn model_name(&self) -> &str;
}

/// Text-to-Speech port
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize speech audio from text
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(&self, text: &str) -> Result<AudioData, SpeechError>;

    /// Name of the synthesis model in use
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AudioFormat;

    struct MockStt;

    #[async_trait]
    impl SpeechToText for MockStt {
        async fn transcribe(&self, _audio: AudioData) -> Result<Transcription, SpeechError> {
            Ok(Transcription::new("hello world").with_language("en"))
        }

        fn model_name(&self) -> &str {
            "mock-stt"
        }
    }

    struct MockTts;

    #[async_trait]
    impl TextToSpeech for MockTts {
        async fn synthesize(&self, text: &str) -> Result<AudioData, SpeechError> {
            Ok(AudioData::new(text.as_bytes().to_vec(), AudioFormat::Mp3))
        }

        fn model_name(&self) -> &str {
            "mock-tts"
        }
    }

    #[tokio::test]
    async fn stt_trait_is_object_safe() {
        let stt: Box<dyn SpeechToText> = Box::new(MockStt);
        let audio = AudioData::new(vec![0; 16], AudioFormat::Wav);
        let result = stt.transcribe(audio).await.unwrap();
        assert_eq!(result.text, "hello world");
        assert_eq!(stt.model_name(), "mock-stt");
    }

    #[tokio::test]
    async fn tts_trait_is_object_safe() {
        let tts: Box<dyn TextToSpeech> = Box::new(MockTts);
        let audio = tts.synthesize("hi").await.unwrap();
        assert_eq!(audio.format(), AudioFormat::Mp3);
        assert!(!audio.is_empty());
    }
}
