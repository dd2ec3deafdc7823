//! HTTP API server for the citizen-services backend
//!
//! The orchestration layer: each handler validates its input, invokes the
//! injected adapters in a fixed sequence, persists a record where
//! applicable, and serializes a `{ok, …}` JSON envelope.

pub mod handlers;
pub mod http;
pub mod response;
pub mod state;

pub use http::create_router;
pub use state::AppState;
