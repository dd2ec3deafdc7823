//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat model configuration
    #[serde(default)]
    pub chat: ChatModelConfig,

    /// Translation model configuration
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Speech engine configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Record store configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Generated media configuration
    #[serde(default)]
    pub media: MediaConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// When false, CORS is fully permissive (development only).
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins. Empty defaults to localhost.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_true(),
            cors_origins: Vec::new(),
        }
    }
}

/// Hosted chat-completion model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatModelConfig {
    /// API key. Absent means the chat adapter runs unconfigured.
    #[serde(default = "default_chat_api_key")]
    pub api_key: Option<String>,

    #[serde(default = "default_chat_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_chat_model")]
    pub model: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ChatModelConfig {
    fn default() -> Self {
        Self {
            api_key: default_chat_api_key(),
            endpoint: default_chat_endpoint(),
            model: default_chat_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ChatModelConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Hosted translation model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// API key. Absent means the translation adapter runs in mock mode.
    #[serde(default = "default_translation_api_key")]
    pub api_key: Option<String>,

    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_translation_model")]
    pub model: String,

    /// Low temperature keeps translations close to deterministic.
    #[serde(default = "default_translation_temperature")]
    pub temperature: f32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_key: default_translation_api_key(),
            endpoint: default_translation_endpoint(),
            model: default_translation_model(),
            temperature: default_translation_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TranslationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Hosted speech engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Recognition API key. Absent means transcription reports NotConfigured.
    #[serde(default = "default_speech_api_key")]
    pub api_key: Option<String>,

    #[serde(default = "default_stt_endpoint")]
    pub stt_endpoint: String,

    #[serde(default = "default_tts_endpoint")]
    pub tts_endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: default_speech_api_key(),
            stt_endpoint: default_stt_endpoint(),
            tts_endpoint: default_tts_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SpeechConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// sqlx connection string. `mode=rwc` creates the file on first run.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Seed the services reference table at startup.
    #[serde(default = "default_true")]
    pub seed_services: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            seed_services: default_true(),
        }
    }
}

/// Generated media configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Directory where synthesized audio files are written and served from.
    #[serde(default = "default_tts_dir")]
    pub tts_dir: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            tts_dir: default_tts_dir(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_chat_api_key() -> Option<String> {
    std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty())
}

fn default_chat_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_chat_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_translation_api_key() -> Option<String> {
    std::env::var("OPENROUTER_API_KEY").ok().filter(|k| !k.is_empty())
}

fn default_translation_endpoint() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_translation_model() -> String {
    "google/gemma-3-27b-it-free".to_string()
}

fn default_translation_temperature() -> f32 {
    0.3
}

fn default_speech_api_key() -> Option<String> {
    std::env::var("SPEECH_API_KEY").ok().filter(|k| !k.is_empty())
}

fn default_stt_endpoint() -> String {
    "http://www.google.com/speech-api/v2/recognize".to_string()
}

fn default_tts_endpoint() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

fn default_database_url() -> String {
    "sqlite://data.db?mode=rwc".to_string()
}

fn default_tts_dir() -> String {
    "tts".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port must be non-zero".to_string(),
            });
        }

        if self.storage.database_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.database_url".to_string(),
                message: "Database URL must not be empty".to_string(),
            });
        }

        if self.media.tts_dir.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "media.tts_dir".to_string(),
                message: "TTS directory must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Load settings from files and environment.
///
/// Priority: env vars > config/{env}.yaml > config/default.yaml > defaults.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    if Path::new("config/default.yaml").exists() {
        builder = builder.add_source(File::with_name("config/default"));
    }

    if let Some(env_name) = env {
        let env_path = format!("config/{}", env_name);
        builder = builder.add_source(File::with_name(&env_path).required(false));
    }

    builder = builder.add_source(Environment::with_prefix("JANSEVA").separator("__"));

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.chat.model, "gemini-1.5-flash");
        assert_eq!(settings.translation.model, "google/gemma-3-27b-it-free");
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn empty_database_url_is_rejected() {
        let mut settings = Settings::default();
        settings.storage.database_url = String::new();
        assert!(settings.validate().is_err());
    }
}
