//! Port trait and request/response types for chat completion

use crate::error::InferenceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Optional system prompt
    pub system: Option<String>,
    /// User message
    pub message: String,
    /// Sampling temperature override
    pub temperature: Option<f32>,
    /// Maximum tokens override
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a request with just a user message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            system: None,
            message: message.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the system prompt
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Token accounting reported by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens generated in the completion
    pub completion_tokens: u32,
    /// Total tokens billed
    pub total_tokens: u32,
}

/// A chat completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated text, trimmed
    pub content: String,
    /// Model that produced the response
    pub model: String,
    /// Token usage if the backend reported it
    pub usage: Option<TokenUsage>,
}

/// Chat completion port
#[async_trait]
pub trait ChatCompletionEngine: Send + Sync {
    /// Generate a completion for the given request
    ///
    /// # Errors
    ///
    /// Returns `InferenceError` if the backend is unreachable, rejects the
    /// request, or returns an unparseable response.
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, InferenceError>;

    /// Name of the model in use
    fn model_name(&self) -> &str;
}
