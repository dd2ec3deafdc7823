//! Hosted text-generation adapters
//!
//! Two adapters share one backend trait:
//! - [`ChatAdapter`] wraps the hosted chat-completion model
//! - [`TranslationAdapter`] wraps the hosted translation/detection model
//!
//! Both are capability-checked once at construction and never let a remote
//! fault escape: the chat adapter answers with fixed fallback text, the
//! translation adapter drops to a deterministic mock substitution.

pub mod backend;
pub mod chat;
pub mod translate;

pub use backend::{GeminiBackend, OpenRouterBackend, TextBackend};
pub use chat::ChatAdapter;
pub use translate::TranslationAdapter;

use thiserror::Error;

/// Errors raised by the model backends. These stop at the adapter boundary.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Network(err.to_string())
    }
}
