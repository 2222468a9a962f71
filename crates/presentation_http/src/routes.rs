//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState, max_body_size_bytes: usize) -> Router {
    Router::new()
        // Service banner and health
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        // Voice chat pipeline
        .route("/api/voice-chat", post(handlers::voice_chat::voice_chat))
        // Upload diagnostics
        .route("/api/test-audio", post(handlers::diagnostics::test_audio))
        // Audio uploads exceed axum's 2MB default body limit
        .layer(DefaultBodyLimit::max(max_body_size_bytes))
        .with_state(state)
}
