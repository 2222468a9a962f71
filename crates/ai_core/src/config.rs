//! Chat backend configuration

use serde::{Deserialize, Serialize};

/// Base URL of the Groq OpenAI-compatible endpoint
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default model on the OpenAI backend
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default model on the Groq backend
pub const GROQ_DEFAULT_MODEL: &str = "mixtral-8x7b-32768";

/// Configuration for an OpenAI-compatible chat backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// API key for the backend
    pub api_key: String,

    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens to generate per reply
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    OPENAI_DEFAULT_MODEL.to_string()
}

const fn default_max_tokens() -> u32 {
    500
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_timeout_ms() -> u64 {
    30_000
}

impl ChatConfig {
    /// Configuration for the OpenAI backend with its default model
    #[must_use]
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            model: OPENAI_DEFAULT_MODEL.to_string(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Configuration for the Groq backend with its default model
    #[must_use]
    pub fn groq(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: GROQ_BASE_URL.to_string(),
            model: GROQ_DEFAULT_MODEL.to_string(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error description if a field is out of range.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("api_key must not be empty".to_string());
        }
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.model.is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }
        Ok(())
    }
}
