//! Configuration management for the citizen-services backend
//!
//! Supports loading configuration from:
//! - YAML files (`config/default.yaml`, then `config/{env}.yaml`)
//! - Environment variables (`JANSEVA_` prefix, `__` separator)
//!
//! Adapter credentials additionally fall back to the conventional
//! environment variables (`GEMINI_API_KEY`, `OPENROUTER_API_KEY`,
//! `SPEECH_API_KEY`) so a bare `.env` is enough for local development.

pub mod settings;

pub use settings::{
    load_settings, ChatModelConfig, MediaConfig, ObservabilityConfig, ServerConfig, Settings,
    SpeechConfig, StorageConfig, TranslationConfig,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
