//! Chatbot, translation and history endpoints
//!
//! The chat flow is a single pass: resolve languages, translate the message
//! to English when needed, ask the chat model, translate the reply to the
//! target language when needed, then append the turn to the history. A
//! history write failure is logged and does not affect the reply.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use janseva_core::{normalize_lang, DEFAULT_LANG};

use crate::response::{envelope, ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    message: String,
    session_id: Option<String>,
    source_language: Option<String>,
    target_language: Option<String>,
}

/// Fresh opaque session identifier (random 128 bits as hex).
fn generate_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// POST /api/chat
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let message = request.message.trim().to_string();
    if message.is_empty() {
        return Err(ApiError::bad_request("message is required"));
    }

    let session_id = request
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(generate_session_id);

    let source_language = match request
        .source_language
        .as_deref()
        .and_then(normalize_lang)
    {
        Some(lang) => lang,
        None => state.translator.detect_language(&message).await,
    };
    let target_language = request
        .target_language
        .as_deref()
        .and_then(normalize_lang)
        .unwrap_or_else(|| source_language.clone());

    // The chat model works in English; translate inbound only when needed.
    let text_for_model = if source_language != DEFAULT_LANG {
        state
            .translator
            .translate(&message, &source_language, DEFAULT_LANG)
            .await
    } else {
        message.clone()
    };

    let reply_en = state.chat.ask(&text_for_model).await;

    let final_reply = if target_language != DEFAULT_LANG {
        state
            .translator
            .translate(&reply_en, DEFAULT_LANG, &target_language)
            .await
    } else {
        reply_en
    };

    // Best-effort: the reply is already computed, a failed write only loses
    // history.
    if let Err(e) = state
        .records
        .chat
        .append(
            &session_id,
            &message,
            &final_reply,
            &source_language,
            &target_language,
        )
        .await
    {
        tracing::warn!(error = %e, session_id = %session_id, "Failed to save chat turn");
    }

    Ok(envelope(json!({
        "session_id": session_id,
        "source_language": source_language,
        "target_language": target_language,
        "bot_reply": final_reply,
    })))
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    text: String,
    source_language: Option<String>,
    target_language: Option<String>,
}

/// POST /api/translate
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let text = request.text.trim().to_string();
    if text.is_empty() {
        return Err(ApiError::bad_request("text is required"));
    }

    let source_language = request
        .source_language
        .as_deref()
        .and_then(normalize_lang)
        .unwrap_or_else(|| DEFAULT_LANG.to_string());
    let target_language = request
        .target_language
        .as_deref()
        .and_then(normalize_lang)
        .unwrap_or_else(|| DEFAULT_LANG.to_string());

    let translated = state
        .translator
        .translate(&text, &source_language, &target_language)
        .await;

    Ok(envelope(json!({
        "translated_text": translated,
        "source_language": source_language,
        "target_language": target_language,
    })))
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    session_id: Option<String>,
}

/// GET /api/history?session_id=
pub async fn history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let session_id = params
        .session_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("session_id is required"))?;

    let history = state.records.chat.history_for_session(&session_id).await?;

    Ok(envelope(json!({
        "session_id": session_id,
        "history": history,
    })))
}
