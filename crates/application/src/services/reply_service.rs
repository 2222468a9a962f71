//! Reply generation with deterministic fallback
//!
//! Generates a reply for a transcript. When a remote backend is bound it is
//! tried first; when it is absent or fails, a fixed set of keyword rules
//! produces a canned reply. The service is therefore infallible: every
//! transcript gets some reply.

use crate::ports::InferencePort;
use domain::Reply;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// System prompt sent with every remote request
pub const SYSTEM_PROMPT: &str =
    "You are a helpful, friendly AI assistant. Provide clear, concise, and accurate responses.";

/// Keyword rules, evaluated in order; the first match wins.
///
/// Matching is case-insensitive substring containment over the transcript.
const FALLBACK_RULES: &[(&[&str], &str)] = &[
    (
        &["hello", "hi", "hey"],
        "Hello! I'm your AI assistant. How can I help you today?",
    ),
    (
        &["how are you", "how do you do"],
        "I'm doing great, thank you for asking! I'm here to help you with any questions you have.",
    ),
    (
        &["name", "who are you"],
        "I'm an AI voice assistant, designed to help answer your questions and have conversations with you.",
    ),
    (
        &["bye", "goodbye", "see you"],
        "Goodbye! It was nice talking to you. Have a great day!",
    ),
];

/// Generates replies, preferring the remote backend when one is bound
pub struct ReplyService {
    inference: Option<Arc<dyn InferencePort>>,
}

impl ReplyService {
    /// Create a service with a bound remote backend
    #[must_use]
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self {
            inference: Some(inference),
        }
    }

    /// Create a service that only uses the rule-based fallback
    #[must_use]
    pub const fn fallback_only() -> Self {
        Self { inference: None }
    }

    /// Whether replies can only come from the fallback rules
    #[must_use]
    pub const fn is_fallback_only(&self) -> bool {
        self.inference.is_none()
    }

    /// Identifier of the model replies come from
    #[must_use]
    pub fn current_model(&self) -> String {
        self.inference
            .as_ref()
            .map_or_else(|| "fallback".to_string(), |i| i.current_model())
    }

    /// Generate a reply for a transcript
    ///
    /// Never fails: remote backend errors are logged and downgraded to the
    /// rule-based fallback.
    #[instrument(skip(self, transcript), fields(chars = transcript.len()))]
    pub async fn respond(&self, transcript: &str) -> Reply {
        if let Some(inference) = &self.inference {
            match inference.generate(SYSTEM_PROMPT, transcript).await {
                Ok(result) => {
                    debug!(model = %result.model, "remote reply generated");
                    return Reply::remote(result.content);
                }
                Err(err) => {
                    warn!(error = %err, "remote reply failed, using fallback");
                }
            }
        }

        Reply::fallback(Self::fallback_reply(transcript))
    }

    /// Evaluate the keyword rules against a transcript
    fn fallback_reply(transcript: &str) -> String {
        let lower = transcript.to_lowercase();

        for (keywords, reply) in FALLBACK_RULES {
            if keywords.iter().any(|k| lower.contains(k)) {
                return (*reply).to_string();
            }
        }

        format!(
            "I heard you say: '{transcript}'. I'm a demo chatbot. To enable full AI \
             capabilities, please configure an OpenAI or Groq API key."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::{InferenceResult, MockInferencePort};
    use domain::ReplySource;

    #[tokio::test]
    async fn greeting_keywords_match_first_rule() {
        let service = ReplyService::fallback_only();

        for transcript in ["Hello there", "hi", "Hey, you!"] {
            let reply = service.respond(transcript).await;
            assert_eq!(reply.text, "Hello! I'm your AI assistant. How can I help you today?");
            assert_eq!(reply.source, ReplySource::Fallback);
        }
    }

    #[tokio::test]
    async fn wellbeing_keywords_match() {
        let service = ReplyService::fallback_only();
        let reply = service.respond("How are you today?").await;
        assert_eq!(
            reply.text,
            "I'm doing great, thank you for asking! I'm here to help you with any questions you have."
        );
    }

    #[tokio::test]
    async fn identity_keywords_match() {
        let service = ReplyService::fallback_only();
        let reply = service.respond("What is your name?").await;
        assert_eq!(
            reply.text,
            "I'm an AI voice assistant, designed to help answer your questions and have conversations with you."
        );
    }

    #[tokio::test]
    async fn farewell_keywords_match() {
        let service = ReplyService::fallback_only();
        let reply = service.respond("Okay, goodbye now").await;
        assert_eq!(reply.text, "Goodbye! It was nice talking to you. Have a great day!");
    }

    #[tokio::test]
    async fn unmatched_transcript_gets_echo_reply() {
        let service = ReplyService::fallback_only();
        let reply = service.respond("what is 2+2").await;
        assert_eq!(
            reply.text,
            "I heard you say: 'what is 2+2'. I'm a demo chatbot. To enable full AI \
             capabilities, please configure an OpenAI or Groq API key."
        );
        assert!(reply.is_fallback());
    }

    #[tokio::test]
    async fn echo_reply_preserves_original_casing() {
        let service = ReplyService::fallback_only();
        let reply = service.respond("Explain Quantum Physics").await;
        assert!(reply.text.starts_with("I heard you say: 'Explain Quantum Physics'."));
    }

    #[tokio::test]
    async fn first_matching_rule_wins() {
        let service = ReplyService::fallback_only();
        // Contains both a greeting and a farewell keyword; greeting rule is first.
        let reply = service.respond("hi, bye").await;
        assert_eq!(reply.text, "Hello! I'm your AI assistant. How can I help you today?");
    }

    #[tokio::test]
    async fn remote_backend_is_preferred() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate()
            .withf(|system, message| system == SYSTEM_PROMPT && message == "hello")
            .returning(|_, _| {
                Ok(InferenceResult {
                    content: "Hi! What can I do for you?".to_string(),
                    model: "gpt-3.5-turbo".to_string(),
                })
            });

        let service = ReplyService::new(Arc::new(mock));
        let reply = service.respond("hello").await;

        assert_eq!(reply.text, "Hi! What can I do for you?");
        assert_eq!(reply.source, ReplySource::Remote);
    }

    #[tokio::test]
    async fn remote_failure_downgrades_to_fallback() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate()
            .returning(|_, _| Err(ApplicationError::Inference("backend down".to_string())));

        let service = ReplyService::new(Arc::new(mock));
        let reply = service.respond("hello").await;

        assert_eq!(reply.text, "Hello! I'm your AI assistant. How can I help you today?");
        assert_eq!(reply.source, ReplySource::Fallback);
    }

    #[test]
    fn current_model_reports_fallback_when_unbound() {
        let service = ReplyService::fallback_only();
        assert_eq!(service.current_model(), "fallback");
        assert!(service.is_fallback_only());
    }

    #[test]
    fn current_model_reports_backend_model() {
        let mut mock = MockInferencePort::new();
        mock.expect_current_model()
            .returning(|| "mixtral-8x7b-32768".to_string());

        let service = ReplyService::new(Arc::new(mock));
        assert_eq!(service.current_model(), "mixtral-8x7b-32768");
        assert!(!service.is_fallback_only());
    }
}
