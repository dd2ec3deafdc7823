//! Complaint endpoints

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::response::{envelope, ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateComplaintRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    contact: String,
    #[serde(default)]
    issue: String,
}

/// POST /api/complaints
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateComplaintRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let issue = request.issue.trim();
    if issue.is_empty() {
        return Err(ApiError::bad_request("issue is required"));
    }

    let id = state
        .records
        .complaints
        .create(request.name.trim(), request.contact.trim(), issue)
        .await?;

    Ok(envelope(json!({ "id": id, "status": "open" })))
}

/// GET /api/complaints
pub async fn list(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let complaints = state.records.complaints.list().await?;
    Ok(envelope(json!({ "complaints": complaints })))
}

/// GET /api/complaints/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let complaint = state
        .records
        .complaints
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("not found"))?;

    Ok(envelope(json!({ "complaint": complaint })))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    status: String,
}

/// PATCH /api/complaints/{id}
///
/// The update is unconditional: an unknown id affects zero rows and still
/// answers 200.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let status = request.status.trim().to_string();
    if status.is_empty() {
        return Err(ApiError::bad_request("status is required"));
    }

    let affected = state.records.complaints.update_status(id, &status).await?;
    if affected == 0 {
        tracing::debug!(id, "Status update matched no complaint");
    }

    Ok(envelope(json!({ "id": id, "status": status })))
}
