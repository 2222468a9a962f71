//! Speech provider configuration

use crate::types::AudioFormat;
use serde::{Deserialize, Serialize};

/// Configuration for the OpenAI speech provider
///
/// Covers both transcription (Whisper) and synthesis (TTS). The API key is
/// optional so a gateway without credentials can still start in degraded
/// mode; callers check [`SpeechConfig::is_configured`] before use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// OpenAI API key; absent means the provider is unconfigured
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for transcription
    #[serde(default = "default_stt_model")]
    pub stt_model: String,

    /// Model used for synthesis
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    /// Voice used for synthesis
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Language hint passed to transcription (ISO 639-1)
    #[serde(default = "default_language")]
    pub language: String,

    /// Output format for synthesized audio
    #[serde(default = "default_output_format")]
    pub output_format: AudioFormat,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Speech speed multiplier (0.25 to 4.0)
    #[serde(default = "default_speed")]
    pub speed: f32,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_stt_model() -> String {
    "whisper-1".to_string()
}

fn default_tts_model() -> String {
    "tts-1".to_string()
}

fn default_voice() -> String {
    "alloy".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

const fn default_output_format() -> AudioFormat {
    AudioFormat::Mp3
}

const fn default_timeout_ms() -> u64 {
    30_000
}

const fn default_speed() -> f32 {
    1.0
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            stt_model: default_stt_model(),
            tts_model: default_tts_model(),
            voice: default_voice(),
            language: default_language(),
            output_format: default_output_format(),
            timeout_ms: default_timeout_ms(),
            speed: default_speed(),
        }
    }
}

impl SpeechConfig {
    /// Create a configuration with an API key and defaults for the rest
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Check if the provider has a credential
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error description if a field is out of range.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.stt_model.is_empty() {
            return Err("stt_model must not be empty".to_string());
        }
        if self.tts_model.is_empty() {
            return Err("tts_model must not be empty".to_string());
        }
        if !(0.25..=4.0).contains(&self.speed) {
            return Err(format!("speed must be between 0.25 and 4.0, got {}", self.speed));
        }
        if self.timeout_ms == 0 {
            return Err("timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_but_unconfigured() {
        let config = SpeechConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.is_configured());
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.stt_model, "whisper-1");
        assert_eq!(config.tts_model, "tts-1");
        assert_eq!(config.voice, "alloy");
        assert_eq!(config.language, "en");
        assert_eq!(config.output_format, AudioFormat::Mp3);
    }

    #[test]
    fn with_api_key_is_configured() {
        let config = SpeechConfig::with_api_key("sk-test");
        assert!(config.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_speed_fails_validation() {
        let config = SpeechConfig {
            speed: 5.0,
            ..SpeechConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let config = SpeechConfig {
            timeout_ms: 0,
            ..SpeechConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: SpeechConfig = toml::from_str("api_key = \"sk-test\"").unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.stt_model, "whisper-1");
        assert_eq!(config.timeout_ms, 30_000);
    }
}
