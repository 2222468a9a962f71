//! Infrastructure layer - configuration loading and port adapters
//!
//! Binds the application ports to concrete providers and loads runtime
//! configuration from file and environment.

pub mod adapters;
pub mod config;

pub use adapters::{ChatInferenceAdapter, SpeechAdapter};
pub use config::{AppConfig, ProviderConfig, ResponseBackend, ServerConfig};
