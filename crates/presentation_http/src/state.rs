//! Shared application state

use application::VoiceChatService;
use std::sync::Arc;

/// Provider availability, resolved once at startup
///
/// Health reporting reads these flags; it never probes the providers.
#[derive(Debug, Clone)]
pub struct ProviderStatus {
    /// Label of the reply backend ("openai", "groq", or "fallback")
    pub llm_provider: String,
    /// Model replies come from
    pub llm_model: String,
    /// Whether transcription has a credential
    pub stt_configured: bool,
    /// Whether synthesis has a credential
    pub tts_configured: bool,
}

/// State shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// The voice chat pipeline
    pub voice_chat: Arc<VoiceChatService>,
    /// Provider availability snapshot
    pub status: Arc<ProviderStatus>,
}
