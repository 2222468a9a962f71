//! API error handling
//!
//! Error responses use a `{"detail": "..."}` body. Client errors carry the
//! specific cause; server errors carry a fixed message and the real cause
//! is only logged.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request itself was invalid
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Reply generation failed
    #[error("Reply generation failed: {0}")]
    ReplyGeneration(String),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable cause
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::ReplyGeneration(msg) => {
                error!(cause = %msg, "reply generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate response".to_string(),
                )
            }
            Self::Internal(msg) => {
                error!(cause = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Validation(msg) | ApplicationError::Transcription(msg) => {
                Self::BadRequest(msg)
            }
            ApplicationError::Inference(msg) => Self::ReplyGeneration(msg),
            ApplicationError::Synthesis(msg)
            | ApplicationError::Configuration(msg)
            | ApplicationError::ExternalService(msg)
            | ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_returns_400_with_detail() {
        let err = ApiError::BadRequest("Empty audio file received".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn reply_generation_returns_500() {
        let err = ApiError::ReplyGeneration("backend down".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_returns_500() {
        let err = ApiError::Internal("oops".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_converts_to_bad_request() {
        let err: ApiError =
            ApplicationError::Validation("Empty audio file received".to_string()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn transcription_converts_to_bad_request() {
        let err: ApiError = ApplicationError::Transcription("could not hear".to_string()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn inference_converts_to_reply_generation() {
        let err: ApiError = ApplicationError::Inference("backend down".to_string()).into();
        assert!(matches!(err, ApiError::ReplyGeneration(_)));
    }

    #[test]
    fn synthesis_converts_to_internal() {
        let err: ApiError = ApplicationError::Synthesis("tts down".to_string()).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn error_response_serializes_detail() {
        let resp = ErrorResponse {
            detail: "Empty audio file received".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"detail":"Empty audio file received"}"#);
    }
}
