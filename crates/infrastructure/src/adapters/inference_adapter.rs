//! Inference port adapter
//!
//! Binds the application's `InferencePort` to the OpenAI-compatible chat
//! engine. The backend is chosen once, from configuration, when the adapter
//! is constructed.

use crate::config::{ProviderConfig, ResponseBackend};
use ai_core::{ChatCompletionEngine, ChatConfig, ChatRequest, OpenAiChatEngine};
use application::error::ApplicationError;
use application::ports::{InferencePort, InferenceResult};
use async_trait::async_trait;
use tracing::instrument;

/// Adapter binding `InferencePort` to a chat completion engine
pub struct ChatInferenceAdapter {
    engine: OpenAiChatEngine,
}

impl ChatInferenceAdapter {
    /// Build the adapter for the backend the configuration resolves to
    ///
    /// Returns `None` when no backend is configured, in which case replies
    /// come from the rule-based fallback only.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the resolved backend's
    /// engine cannot be constructed.
    pub fn from_config(providers: &ProviderConfig) -> Result<Option<Self>, ApplicationError> {
        let chat_config = match providers.response_backend() {
            ResponseBackend::Groq => providers
                .groq_api_key
                .as_deref()
                .map(ChatConfig::groq),
            ResponseBackend::OpenAi => providers
                .openai_api_key
                .as_deref()
                .map(ChatConfig::openai),
            ResponseBackend::Fallback => None,
        };

        chat_config
            .map(|config| {
                OpenAiChatEngine::new(config)
                    .map(|engine| Self { engine })
                    .map_err(|e| ApplicationError::Configuration(e.to_string()))
            })
            .transpose()
    }
}

#[async_trait]
impl InferencePort for ChatInferenceAdapter {
    #[instrument(skip(self, system, message), fields(model = %self.engine.model_name()))]
    async fn generate(
        &self,
        system: &str,
        message: &str,
    ) -> Result<InferenceResult, ApplicationError> {
        let request = ChatRequest::new(message).with_system(system);

        let response = self
            .engine
            .complete(request)
            .await
            .map_err(|e| ApplicationError::Inference(e.to_string()))?;

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
        })
    }

    fn current_model(&self) -> String {
        self.engine.model_name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_backend_yields_no_adapter() {
        let providers = ProviderConfig::default();
        assert!(ChatInferenceAdapter::from_config(&providers).unwrap().is_none());
    }

    #[test]
    fn openai_key_yields_openai_model() {
        let providers = ProviderConfig {
            openai_api_key: Some("sk-test".to_string()),
            ..ProviderConfig::default()
        };
        let adapter = ChatInferenceAdapter::from_config(&providers).unwrap().unwrap();
        assert_eq!(adapter.current_model(), "gpt-3.5-turbo");
    }

    #[test]
    fn groq_preference_yields_groq_model() {
        let providers = ProviderConfig {
            openai_api_key: Some("sk-test".to_string()),
            use_groq: true,
            groq_api_key: Some("gsk-test".to_string()),
        };
        let adapter = ChatInferenceAdapter::from_config(&providers).unwrap().unwrap();
        assert_eq!(adapter.current_model(), "mixtral-8x7b-32768");
    }
}
