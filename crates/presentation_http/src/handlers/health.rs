//! Health and banner handlers
//!
//! Health status is derived from configuration captured at startup. No
//! provider is probed; a configured credential counts as operational.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

const STATUS_OPERATIONAL: &str = "operational";
const STATUS_FALLBACK: &str = "fallback_mode";

/// Service banner response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub services: ServicesStatus,
    pub config: ConfigStatus,
}

/// Per-stage availability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesStatus {
    pub stt: String,
    pub llm: String,
    pub tts: String,
}

/// Provider configuration summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigStatus {
    pub llm_provider: String,
    pub model: String,
}

/// Service banner
pub async fn root() -> Json<BannerResponse> {
    Json(BannerResponse {
        status: "ok".to_string(),
        service: "voice-gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

const fn stage_status(configured: bool) -> &'static str {
    if configured {
        STATUS_OPERATIONAL
    } else {
        STATUS_FALLBACK
    }
}

/// Health check
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = &state.status;
    let llm_remote = status.llm_provider != "fallback";

    Json(HealthResponse {
        status: "healthy".to_string(),
        services: ServicesStatus {
            stt: stage_status(status.stt_configured).to_string(),
            llm: stage_status(llm_remote).to_string(),
            tts: stage_status(status.tts_configured).to_string(),
        },
        config: ConfigStatus {
            llm_provider: status.llm_provider.clone(),
            model: status.llm_model.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_status_reflects_configuration() {
        assert_eq!(stage_status(true), "operational");
        assert_eq!(stage_status(false), "fallback_mode");
    }

    #[tokio::test]
    async fn root_reports_service_name() {
        let response = root().await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.service, "voice-gateway");
        assert!(!response.version.is_empty());
    }

    #[test]
    fn health_response_serialization() {
        let resp = HealthResponse {
            status: "healthy".to_string(),
            services: ServicesStatus {
                stt: "operational".to_string(),
                llm: "fallback_mode".to_string(),
                tts: "operational".to_string(),
            },
            config: ConfigStatus {
                llm_provider: "fallback".to_string(),
                model: "fallback".to_string(),
            },
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["services"]["llm"], "fallback_mode");
        assert_eq!(json["config"]["llm_provider"], "fallback");
    }
}
