//! Reply generation port

use crate::error::ApplicationError;
use async_trait::async_trait;

/// Result of generating a reply through the remote backend
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// Generated text, trimmed and non-empty
    pub content: String,
    /// Model that produced the text
    pub model: String,
}

/// Port for remote reply generation
#[cfg_attr(any(test, feature = "test-mocks"), mockall::automock)]
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate a reply for a user message under a system prompt
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Inference` when the backend fails.
    async fn generate(
        &self,
        system: &str,
        message: &str,
    ) -> Result<InferenceResult, ApplicationError>;

    /// Identifier of the model in use
    fn current_model(&self) -> String;
}
