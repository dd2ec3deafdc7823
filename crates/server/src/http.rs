//! HTTP Endpoints
//!
//! REST API for the citizen-services backend.

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::Html,
    routing::get,
    routing::post,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{applications, chat, complaints, voice};
use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.settings.server.cors_origins,
        state.settings.server.cors_enabled,
    );

    Router::new()
        // Frontend placeholder
        .route("/", get(home))
        // Chat and translation
        .route("/api/chat", post(chat::chat))
        .route("/api/translate", post(chat::translate))
        .route("/api/history", get(chat::history))
        // Complaints
        .route(
            "/api/complaints",
            post(complaints::create).get(complaints::list),
        )
        .route(
            "/api/complaints/:id",
            get(complaints::get).patch(complaints::update_status),
        )
        // Applications
        .route(
            "/api/applications",
            post(applications::create).get(applications::list),
        )
        .route(
            "/api/applications/:id",
            get(applications::get).patch(applications::update_status),
        )
        .route("/api/apply", post(applications::apply))
        .route("/api/services", get(applications::services))
        .route("/api/saved_files", get(applications::saved_files))
        .route("/api/download/:id", get(applications::download))
        // Voice
        .route("/api/voice-to-text", post(voice::voice_to_text))
        .route("/api/text-to-speech", post(voice::text_to_speech))
        // Synthesized audio is served back as static files
        .nest_service("/tts", ServeDir::new(&state.tts_dir))
        // Health check
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns a permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000 for safety
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return localhost_cors_layer();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::error!("All configured CORS origins are invalid, falling back to localhost");
        return localhost_cors_layer();
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers(Any)
}

fn localhost_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers(Any)
}

/// Placeholder page shown when no frontend is mounted.
async fn home() -> Html<&'static str> {
    Html(
        "<h2>Citizen Services Assistant (Backend Running)</h2>\
         <p>Frontend not added yet. The JSON API lives under <code>/api/</code>.</p>",
    )
}

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
