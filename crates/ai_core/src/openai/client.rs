//! OpenAI-compatible chat completions client
//!
//! Speaks `POST {base_url}/chat/completions` with bearer authentication.
//! Works against both api.openai.com and api.groq.com since Groq exposes
//! the same protocol.

use crate::config::ChatConfig;
use crate::error::InferenceError;
use crate::ports::{ChatCompletionEngine, ChatRequest, ChatResponse, TokenUsage};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Chat completion engine backed by an OpenAI-compatible API
#[derive(Debug, Clone)]
pub struct OpenAiChatEngine {
    client: reqwest::Client,
    config: ChatConfig,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireResponseMessage,
}

#[derive(Debug, Deserialize)]
struct WireResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

impl OpenAiChatEngine {
    /// Create a new engine from configuration
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::Configuration` if the configuration is
    /// invalid or the HTTP client cannot be constructed.
    pub fn new(config: ChatConfig) -> Result<Self, InferenceError> {
        config.validate().map_err(InferenceError::Configuration)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                InferenceError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatCompletionEngine for OpenAiChatEngine {
    #[instrument(skip(self, request), fields(model = %self.config.model))]
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, InferenceError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system.as_deref() {
            messages.push(WireMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(WireMessage {
            role: "user",
            content: &request.message,
        });

        let wire = WireRequest {
            model: &self.config.model,
            messages,
            max_tokens: request.max_tokens.unwrap_or(self.config.max_tokens),
            temperature: request.temperature.unwrap_or(self.config.temperature),
        };

        debug!("sending chat completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&wire)
            .send()
            .await
            .map_err(|e| InferenceError::from_reqwest(e, self.config.timeout_ms))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Unauthorized(body));
        }
        if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "inference backend returned server error");
            return Err(InferenceError::ServerError(format!("HTTP {status}: {body}")));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::RequestFailed(format!("HTTP {status}: {body}")));
        }

        let parsed: WireResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let content = parsed
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                InferenceError::InvalidResponse("response contained no completion text".to_string())
            })?
            .to_string();

        debug!(chars = content.len(), "chat completion received");

        Ok(ChatResponse {
            content,
            model: parsed.model.unwrap_or_else(|| self.config.model.clone()),
            usage: parsed.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{bearer_token, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn engine_for(server: &MockServer) -> OpenAiChatEngine {
        let config = ChatConfig {
            base_url: server.uri(),
            ..ChatConfig::openai("sk-test")
        };
        OpenAiChatEngine::new(config).unwrap()
    }

    #[tokio::test]
    async fn complete_parses_first_choice() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(bearer_token("sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "gpt-3.5-turbo-0125",
                "choices": [
                    {"message": {"role": "assistant", "content": "  Hi there!  "}}
                ],
                "usage": {"prompt_tokens": 20, "completion_tokens": 4, "total_tokens": 24}
            })))
            .mount(&server)
            .await;

        let engine = engine_for(&server);
        let response = engine.complete(ChatRequest::new("hello")).await.unwrap();

        assert_eq!(response.content, "Hi there!");
        assert_eq!(response.model, "gpt-3.5-turbo-0125");
        assert_eq!(response.usage.unwrap().total_tokens, 24);
    }

    #[tokio::test]
    async fn complete_sends_system_prompt_first() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({
                "model": "gpt-3.5-turbo",
                "max_tokens": 500,
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hello"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "ok"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let engine = engine_for(&server);
        let request = ChatRequest::new("hello").with_system("be brief");
        engine.complete(request).await.unwrap();
    }

    #[tokio::test]
    async fn complete_401_is_unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let engine = engine_for(&server);
        let result = engine.complete(ChatRequest::new("hello")).await;

        assert!(matches!(result, Err(InferenceError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn complete_500_is_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let engine = engine_for(&server);
        let result = engine.complete(ChatRequest::new("hello")).await;

        assert!(matches!(result, Err(InferenceError::ServerError(_))));
    }

    #[tokio::test]
    async fn complete_timeout_reports_configured_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"choices": [{"message": {"content": "ok"}}]}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = ChatConfig {
            base_url: server.uri(),
            timeout_ms: 100,
            ..ChatConfig::openai("sk-test")
        };
        let engine = OpenAiChatEngine::new(config).unwrap();
        let result = engine.complete(ChatRequest::new("hello")).await;

        assert!(matches!(result, Err(InferenceError::Timeout(100))));
    }

    #[tokio::test]
    async fn complete_empty_choices_is_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let engine = engine_for(&server);
        let result = engine.complete(ChatRequest::new("hello")).await;

        assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
    }

    #[test]
    fn model_name_comes_from_config() {
        let engine = OpenAiChatEngine::new(ChatConfig::groq("gsk-test")).unwrap();
        assert_eq!(engine.model_name(), "mixtral-8x7b-32768");
    }
}
