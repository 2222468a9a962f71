//! Voice chat handler
//!
//! Accepts a multipart upload with an `audio` field, runs the pipeline, and
//! returns the transcript, the reply text, and the reply audio as base64.
//! A missing audio part and an empty file are both client errors; a failed
//! synthesis is not, the response just carries `audio_base64: null`.

use axum::{Json, extract::Multipart, extract::State};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use domain::AudioFormat;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Voice chat response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceChatResponse {
    /// What the user said
    pub transcript: String,
    /// The generated reply text
    pub llm_response: String,
    /// Base64-encoded reply audio, or null when synthesis was unavailable
    pub audio_base64: Option<String>,
}

/// One uploaded audio part
struct AudioUpload {
    data: Vec<u8>,
    format: AudioFormat,
}

/// Pull the `audio` part out of a multipart body
async fn extract_audio(multipart: &mut Multipart) -> Result<AudioUpload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("audio") {
            continue;
        }

        let format = field
            .content_type()
            .and_then(AudioFormat::from_mime_type)
            .or_else(|| field.file_name().and_then(AudioFormat::from_extension))
            .unwrap_or(AudioFormat::Wav);

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read audio field: {e}")))?;

        return Ok(AudioUpload {
            data: data.to_vec(),
            format,
        });
    }

    Err(ApiError::BadRequest(
        "Missing 'audio' field in multipart body".to_string(),
    ))
}

/// Run one voice chat exchange
#[instrument(skip(state, multipart))]
pub async fn voice_chat(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<VoiceChatResponse>, ApiError> {
    let upload = extract_audio(&mut multipart).await?;

    let exchange = state
        .voice_chat
        .process(upload.data, upload.format)
        .await?;

    info!(
        source = ?exchange.reply.source,
        has_audio = exchange.has_audio(),
        "voice chat exchange complete"
    );

    Ok(Json(VoiceChatResponse {
        transcript: exchange.transcript,
        llm_response: exchange.reply.text,
        audio_base64: exchange.audio.map(|bytes| BASE64.encode(bytes)),
    }))
}
