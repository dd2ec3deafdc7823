//! Application, services and document endpoints
//!
//! Two creation surfaces write the same applications table: the JSON
//! `POST /api/applications` and the multipart `POST /api/apply` which may
//! carry an uploaded document stored inline. Both verify the referenced
//! service with a pre-insert existence query; the ticket number is
//! generated without consulting the store.

use std::collections::BTreeMap;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use rand::Rng;
use serde::Deserialize;
use serde_json::json;

use janseva_persistence::{ApplicationFile, NewApplication};

use crate::response::{envelope, ApiError};
use crate::state::AppState;

/// Random 8-character uppercase alphanumeric ticket. Uniqueness is
/// probabilistic (36^8 space); the store is never consulted.
fn generate_ticket_number() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();
    (0..8)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

/// Reject empty required fields with a field-specific message.
fn require_field<'a>(value: &'a str, field: &str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request(format!("{} is required", field)));
    }
    Ok(trimmed)
}

#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    #[serde(default)]
    service_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    phone: Option<String>,
    #[serde(default)]
    purpose: String,
    #[serde(default)]
    details: BTreeMap<String, String>,
}

/// POST /api/applications
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateApplicationRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let service_id = require_field(&request.service_id, "service_id")?.to_string();
    let name = require_field(&request.name, "name")?.to_string();
    let email = require_field(&request.email, "email")?.to_string();
    let purpose = require_field(&request.purpose, "purpose")?.to_string();

    if !state.records.services.exists(&service_id).await? {
        return Err(ApiError::not_found("unknown service_id"));
    }

    let new = NewApplication {
        service_id,
        name,
        email,
        phone: request.phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()),
        purpose,
        details: request.details,
        ticket_number: generate_ticket_number(),
        file: None,
    };

    let id = state.records.applications.create(&new).await?;

    Ok(envelope(json!({
        "id": id,
        "ticket_number": new.ticket_number,
        "status": "Submitted",
    })))
}

/// GET /api/applications
pub async fn list(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let applications = state.records.applications.list().await?;
    Ok(envelope(json!({ "applications": applications })))
}

/// GET /api/applications/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let application = state
        .records
        .applications
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("not found"))?;

    Ok(envelope(json!({ "application": application })))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    status: String,
}

/// PATCH /api/applications/{id}
///
/// Unconditional, like the complaint transition: an unknown id affects zero
/// rows and still answers 200.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let status = request.status.trim().to_string();
    if status.is_empty() {
        return Err(ApiError::bad_request("status is required"));
    }

    let affected = state.records.applications.update_status(id, &status).await?;
    if affected == 0 {
        tracing::debug!(id, "Status update matched no application");
    }

    Ok(envelope(json!({ "id": id, "status": status })))
}

/// POST /api/apply (multipart form)
pub async fn apply(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut service_id = String::new();
    let mut name = String::new();
    let mut email = String::new();
    let mut phone = String::new();
    let mut purpose = String::new();
    let mut file: Option<ApplicationFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart body: {}", e)))?
    {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };

        match field_name.as_str() {
            "service_id" => service_id = read_text(field).await?,
            "name" => name = read_text(field).await?,
            "email" => email = read_text(field).await?,
            "phone" => phone = read_text(field).await?,
            "purpose" => purpose = read_text(field).await?,
            "document" => {
                let file_name = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("invalid document: {}", e)))?;
                if let Some(file_name) = file_name.filter(|n| !n.is_empty()) {
                    if !data.is_empty() {
                        file = Some(ApplicationFile {
                            name: file_name,
                            data: data.to_vec(),
                        });
                    }
                }
            }
            _ => {}
        }
    }

    let service_id = require_field(&service_id, "service_id")?.to_string();
    let name = require_field(&name, "name")?.to_string();
    let email = require_field(&email, "email")?.to_string();
    let purpose = require_field(&purpose, "purpose")?.to_string();

    if !state.records.services.exists(&service_id).await? {
        return Err(ApiError::not_found("unknown service_id"));
    }

    let new = NewApplication {
        service_id,
        name,
        email,
        phone: Some(phone.trim().to_string()).filter(|p| !p.is_empty()),
        purpose,
        details: BTreeMap::new(),
        ticket_number: generate_ticket_number(),
        file,
    };

    state.records.applications.create(&new).await?;

    Ok(envelope(json!({ "ticket_number": new.ticket_number })))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid form field: {}", e)))
}

/// GET /api/services
pub async fn services(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let services = state.records.services.list().await?;
    Ok(envelope(json!({ "services": services })))
}

#[derive(Debug, Deserialize)]
pub struct SavedFilesParams {
    email: Option<String>,
}

/// GET /api/saved_files?email=
pub async fn saved_files(
    State(state): State<AppState>,
    Query(params): Query<SavedFilesParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let email = params
        .email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());

    let files = state
        .records
        .applications
        .list_with_files(email.as_deref())
        .await?;

    Ok(envelope(json!({ "files": files })))
}

/// GET /api/download/{id}
///
/// Streams the stored bytes back byte-exact with the stored filename.
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let file = state
        .records
        .applications
        .get_file(id)
        .await?
        .ok_or_else(|| ApiError::not_found("no file attached"))?;

    let disposition = format!("attachment; filename=\"{}\"", file.name.replace('"', ""));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.data,
    )
        .into_response())
}
