//! Upload diagnostics handler
//!
//! Echoes back what the server received, without running the pipeline.
//! Useful when a browser recording arrives mangled: the hex prefix shows
//! whether the container header survived the upload.

use axum::{Json, extract::Multipart, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Bytes of the upload echoed back as hex; covers a WAV header
const PREFIX_LEN: usize = 44;

/// Diagnostics response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestAudioResponse {
    /// Client-supplied filename, if any
    pub filename: Option<String>,
    /// Client-supplied content type, if any
    pub content_type: Option<String>,
    /// Upload size in bytes
    pub size: usize,
    /// Hex dump of the first bytes of the upload
    pub first_bytes: String,
    /// Whether transcription has a credential
    pub whisper_available: bool,
}

/// Inspect an uploaded audio file
#[instrument(skip(state, multipart))]
pub async fn test_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TestAudioResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("audio") {
            continue;
        }

        let filename = field.file_name().map(ToString::to_string);
        let content_type = field.content_type().map(ToString::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read audio field: {e}")))?;

        let prefix = &data[..data.len().min(PREFIX_LEN)];

        return Ok(Json(TestAudioResponse {
            filename,
            content_type,
            size: data.len(),
            first_bytes: hex::encode(prefix),
            whisper_available: state.voice_chat.transcription_configured(),
        }));
    }

    Err(ApiError::BadRequest(
        "Missing 'audio' field in multipart body".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serialization() {
        let resp = TestAudioResponse {
            filename: Some("clip.webm".to_string()),
            content_type: Some("audio/webm".to_string()),
            size: 1024,
            first_bytes: "1a45dfa3".to_string(),
            whisper_available: false,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["filename"], "clip.webm");
        assert_eq!(json["size"], 1024);
        assert_eq!(json["first_bytes"], "1a45dfa3");
        assert_eq!(json["whisper_available"], false);
    }
}
