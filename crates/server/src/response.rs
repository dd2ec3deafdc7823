//! Uniform JSON envelope
//!
//! Every endpoint answers `{"ok": true, …}` on success and
//! `{"ok": false, "error": "…"}` with a matching status code on failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Value};

use janseva_persistence::PersistenceError;

/// Wrap a payload object in the success envelope.
pub fn envelope(payload: Value) -> Json<Value> {
    let mut body = json!({ "ok": true });
    if let (Some(body_map), Value::Object(payload_map)) = (body.as_object_mut(), payload) {
        for (key, value) in payload_map {
            body_map.insert(key, value);
        }
    }
    Json(body)
}

/// An error answered in the envelope shape.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({ "ok": false, "error": self.message })),
        )
            .into_response()
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        tracing::error!(error = %err, "Storage operation failed");
        Self::internal(format!("Internal server error: {}", err))
    }
}
