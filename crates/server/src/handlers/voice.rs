//! Voice endpoints
//!
//! Speech-to-text accepts a multipart audio upload; text-to-speech writes
//! the synthesized MP3 under the configured directory and answers with the
//! URL of the static route that serves it back.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use janseva_core::SpeechError;

use crate::response::{envelope, ApiError};
use crate::state::AppState;

fn map_transcription_error(err: SpeechError) -> ApiError {
    match err {
        SpeechError::UnrecognizedAudio => ApiError::bad_request("Could not understand audio"),
        SpeechError::NotConfigured => ApiError::internal("Speech recognition is not configured"),
        SpeechError::EngineUnavailable(detail) => {
            ApiError::internal(format!("Speech recognition API error: {}", detail))
        }
        SpeechError::Synthesis(detail) => ApiError::internal(format!("Processing error: {}", detail)),
    }
}

/// POST /api/voice-to-text (multipart: audio, optional language)
pub async fn voice_to_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut audio: Option<Vec<u8>> = None;
    let mut language = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart body: {}", e)))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("audio") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("invalid audio upload: {}", e)))?;
                audio = Some(bytes.to_vec());
            }
            Some("language") => {
                language = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("invalid form field: {}", e)))?;
            }
            _ => {}
        }
    }

    let audio = audio
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| ApiError::bad_request("No audio file uploaded with key 'audio'"))?;

    let language = {
        let trimmed = language.trim().to_ascii_lowercase();
        if trimmed.is_empty() {
            "en".to_string()
        } else {
            trimmed
        }
    };

    let text = state
        .stt
        .transcribe(&audio, &language)
        .await
        .map_err(map_transcription_error)?;

    Ok(envelope(json!({ "text": text, "language": language })))
}

#[derive(Debug, Deserialize)]
pub struct TextToSpeechRequest {
    #[serde(default)]
    text: String,
    language: Option<String>,
}

/// POST /api/text-to-speech
pub async fn text_to_speech(
    State(state): State<AppState>,
    Json(request): Json<TextToSpeechRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let text = request.text.trim().to_string();
    if text.is_empty() {
        return Err(ApiError::bad_request("text is required"));
    }

    let language = request
        .language
        .map(|l| l.trim().to_ascii_lowercase())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| "en".to_string());

    let audio = state
        .tts
        .synthesize(&text, &language)
        .await
        .map_err(|e| match e {
            SpeechError::NotConfigured => ApiError::internal("Text-to-speech is not configured"),
            other => ApiError::internal(format!("TTS error: {}", other)),
        })?;

    let filename = format!("tts_{}.mp3", Uuid::new_v4().simple());
    let path = state.tts_dir.join(&filename);
    tokio::fs::write(&path, &audio)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to write audio file: {}", e)))?;

    tracing::info!(filename = %filename, bytes = audio.len(), "Synthesized audio written");

    Ok(envelope(json!({
        "audio_url": format!("/tts/{}", filename),
        "filename": filename,
    })))
}
