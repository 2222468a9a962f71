//! OpenAI-compatible chat completion client

mod client;

pub use client::OpenAiChatEngine;
