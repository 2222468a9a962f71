//! Application layer - services and ports for the voice gateway
//!
//! Orchestrates the voice-chat pipeline (transcribe, reply, synthesize)
//! behind port traits. Infrastructure adapters implement the ports; the
//! HTTP layer drives the services.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{InferencePort, InferenceResult, SpeechPort, SynthesisResult, TranscriptionResult};
pub use services::{ReplyService, VoiceChatService};
