//! Chat adapter over the hosted chat-completion model

use async_trait::async_trait;
use std::sync::Arc;

use janseva_config::ChatModelConfig;
use janseva_core::ChatModel;

use crate::backend::{GeminiBackend, TextBackend};
use crate::LlmError;

/// Reply used when no API key is configured.
const UNAVAILABLE_REPLY: &str =
    "The chat assistant is not configured. Please set a chat API key and try again.";

/// Reply used when the remote call fails.
const TROUBLE_REPLY: &str =
    "The assistant is having trouble connecting right now. Please try again in a moment.";

/// Adapter wrapping a hosted chat model behind [`ChatModel`].
///
/// Configuration is decided once at construction: with no API key the
/// adapter carries no backend and answers with a fixed unavailability
/// message. A remote fault never propagates past `ask`.
pub struct ChatAdapter {
    backend: Option<Arc<dyn TextBackend>>,
}

impl ChatAdapter {
    /// Build from configuration. An absent API key yields an unconfigured
    /// adapter rather than an error.
    pub fn from_config(config: &ChatModelConfig) -> Result<Self, LlmError> {
        match &config.api_key {
            Some(key) => {
                let backend = GeminiBackend::new(
                    config.endpoint.clone(),
                    config.model.clone(),
                    key.clone(),
                    config.timeout(),
                )?;
                tracing::info!(model = %config.model, "Chat adapter configured");
                Ok(Self::with_backend(Arc::new(backend)))
            }
            None => {
                tracing::warn!("No chat API key set; chat adapter runs unconfigured");
                Ok(Self::unconfigured())
            }
        }
    }

    /// Wrap an existing backend (used by tests to inject fakes).
    pub fn with_backend(backend: Arc<dyn TextBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// An adapter with no backend; every `ask` returns the fixed message.
    pub fn unconfigured() -> Self {
        Self { backend: None }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }
}

#[async_trait]
impl ChatModel for ChatAdapter {
    async fn ask(&self, prompt: &str) -> String {
        let Some(backend) = &self.backend else {
            return UNAVAILABLE_REPLY.to_string();
        };

        match backend.complete("", prompt).await {
            Ok(reply) => reply.trim().to_string(),
            Err(e) => {
                tracing::warn!(model = backend.model_name(), error = %e, "Chat call failed");
                TROUBLE_REPLY.to_string()
            }
        }
    }
}
