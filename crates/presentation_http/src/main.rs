//! Voice Gateway HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use application::{ReplyService, VoiceChatService};
use infrastructure::{AppConfig, ChatInferenceAdapter, ResponseBackend, SpeechAdapter};
use presentation_http::{
    routes,
    state::{AppState, ProviderStatus},
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voice_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Voice Gateway v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    let backend = config.providers.response_backend();
    info!(
        host = %config.server.host,
        port = %config.server.port,
        llm_provider = backend.label(),
        "Configuration loaded"
    );

    if backend == ResponseBackend::Fallback {
        info!("No LLM credential configured; replies use the rule-based fallback");
    }
    if !config.providers.transcription_configured() {
        info!("No OpenAI key configured; transcription and synthesis are unavailable");
    }

    // Bind the ports to providers, once, from configuration
    let speech = SpeechAdapter::new(config.providers.openai_api_key.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize speech provider: {e}"))?;
    let speech: Arc<dyn application::ports::SpeechPort> = Arc::new(speech);

    let reply_service = match ChatInferenceAdapter::from_config(&config.providers)
        .map_err(|e| anyhow::anyhow!("Failed to initialize inference backend: {e}"))?
    {
        Some(adapter) => ReplyService::new(Arc::new(adapter)),
        None => ReplyService::fallback_only(),
    };
    let reply_service = Arc::new(reply_service);

    let status = ProviderStatus {
        llm_provider: backend.label().to_string(),
        llm_model: reply_service.current_model(),
        stt_configured: speech.transcription_configured(),
        tts_configured: speech.synthesis_configured(),
    };

    let voice_chat = VoiceChatService::new(speech, Arc::clone(&reply_service));

    let state = AppState {
        voice_chat: Arc::new(voice_chat),
        status: Arc::new(status),
    };

    // Build router
    let app = routes::create_router(state, config.server.max_body_size_bytes);

    // Configure CORS layer
    let cors_layer = match &config.server.frontend_origin {
        Some(origin) => {
            use axum::http::{HeaderValue, Method};
            let origins: Vec<HeaderValue> = [origin.as_str(), "http://127.0.0.1:3000"]
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any)
        }
        None => {
            // Development mode: allow all origins
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    // Add middleware (order matters: first added = outermost)
    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
