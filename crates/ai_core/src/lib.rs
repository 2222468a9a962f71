//! AI Core - Chat completion abstractions
//!
//! Provides the `ChatCompletionEngine` trait and the OpenAI-compatible
//! client implementation. Both the OpenAI and Groq backends speak the same
//! wire protocol, so a single client covers both; only the base URL and
//! model differ.

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::ChatConfig;
pub use error::InferenceError;
pub use openai::OpenAiChatEngine;
pub use ports::{ChatCompletionEngine, ChatRequest, ChatResponse, TokenUsage};
