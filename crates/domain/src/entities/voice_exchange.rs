//! Voice exchange entity
//!
//! The assembled result of one request through the pipeline: the transcript
//! of the user's audio, the generated reply, and optionally synthesized
//! audio. Constructed once per request and immutable afterwards.

use serde::{Deserialize, Serialize};

/// Where a reply came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    /// Generated by the remote chat-completion backend
    Remote,
    /// Produced by the deterministic rule-based fallback
    Fallback,
}

/// A generated reply with explicit provenance
///
/// Carrying the source in the type lets callers and tests distinguish a
/// remote-generated reply from a fallback one without relying on logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Reply text, always non-null once the pipeline reaches this stage
    pub text: String,
    /// Provenance of the reply
    pub source: ReplySource,
}

impl Reply {
    /// Create a reply generated by the remote backend
    #[must_use]
    pub fn remote(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Remote,
        }
    }

    /// Create a reply produced by the rule-based fallback
    #[must_use]
    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Fallback,
        }
    }

    /// Check whether this reply came from the fallback rules
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, ReplySource::Fallback)
    }
}

/// One completed voice exchange
#[derive(Debug, Clone)]
pub struct VoiceExchange {
    /// Transcript of the user's audio, non-empty by construction upstream
    pub transcript: String,
    /// Generated reply
    pub reply: Reply,
    /// Synthesized reply audio; `None` is a valid terminal state when
    /// synthesis failed or was skipped
    pub audio: Option<Vec<u8>>,
}

impl VoiceExchange {
    /// Assemble a voice exchange
    #[must_use]
    pub fn new(transcript: impl Into<String>, reply: Reply, audio: Option<Vec<u8>>) -> Self {
        Self {
            transcript: transcript.into(),
            reply,
            audio,
        }
    }

    /// Check whether this exchange carries synthesized audio
    #[must_use]
    pub const fn has_audio(&self) -> bool {
        self.audio.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_reply_has_remote_source() {
        let reply = Reply::remote("Sure, here you go.");
        assert_eq!(reply.source, ReplySource::Remote);
        assert!(!reply.is_fallback());
    }

    #[test]
    fn fallback_reply_has_fallback_source() {
        let reply = Reply::fallback("Hello!");
        assert_eq!(reply.source, ReplySource::Fallback);
        assert!(reply.is_fallback());
    }

    #[test]
    fn exchange_with_audio() {
        let exchange = VoiceExchange::new("hi", Reply::remote("hello"), Some(vec![1, 2, 3]));
        assert!(exchange.has_audio());
        assert_eq!(exchange.transcript, "hi");
    }

    #[test]
    fn exchange_without_audio_is_valid() {
        let exchange = VoiceExchange::new("hi", Reply::fallback("hello"), None);
        assert!(!exchange.has_audio());
        assert_eq!(exchange.reply.text, "hello");
    }

    #[test]
    fn reply_source_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ReplySource::Remote).unwrap(), "\"remote\"");
        assert_eq!(serde_json::to_string(&ReplySource::Fallback).unwrap(), "\"fallback\"");
    }
}
