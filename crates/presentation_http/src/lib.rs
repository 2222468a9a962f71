//! HTTP presentation layer for the voice gateway
//!
//! Exposes the voice chat pipeline over HTTP:
//! - `POST /api/voice-chat` - full transcribe/reply/synthesize pipeline
//! - `GET /health` - configuration-derived service status
//! - `POST /api/test-audio` - upload diagnostics
//! - `GET /` - service banner

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, ProviderStatus};
