//! Translation adapter over the hosted translation model

use async_trait::async_trait;
use std::sync::Arc;

use janseva_config::TranslationConfig;
use janseva_core::{Translator, DEFAULT_LANG};

use crate::backend::{OpenRouterBackend, TextBackend};
use crate::LlmError;

const TRANSLATE_SYSTEM: &str = "You are a helpful translation assistant.";
const DETECT_SYSTEM: &str = "You are a language detection assistant.";

/// Bracketed mock tags per target language, used whenever the hosted model
/// is unconfigured or unreachable. Codes outside this table pass the text
/// through unchanged.
const MOCK_TAGS: &[(&str, &str)] = &[
    ("hi", "[हिंदी अनुवाद]"),
    ("ta", "[தமிழ் மொழிபெயர்ப்பு]"),
    ("te", "[తెలుగు అనువాదం]"),
    ("bn", "[বাংলা অনুবাদ]"),
    ("mr", "[मराठी अनुवाद]"),
    ("gu", "[ગુજરાતી અનુવાદ]"),
    ("kn", "[ಕನ್ನಡ ಅನುವಾದ]"),
    ("ml", "[മലയാളം വിവർത്തനം]"),
    ("pa", "[ਪੰਜਾਬੀ ਅਨੁਵਾਦ]"),
];

/// Adapter wrapping a hosted translation model behind [`Translator`].
///
/// Every remote fault is downgraded: translation drops to the deterministic
/// mock substitution, detection to "en". Nothing escapes this boundary.
pub struct TranslationAdapter {
    backend: Option<Arc<dyn TextBackend>>,
}

impl TranslationAdapter {
    /// Build from configuration. An absent API key yields the mock-mode
    /// adapter rather than an error.
    pub fn from_config(config: &TranslationConfig) -> Result<Self, LlmError> {
        match &config.api_key {
            Some(key) => {
                let backend = OpenRouterBackend::new(
                    config.endpoint.clone(),
                    config.model.clone(),
                    key.clone(),
                    config.temperature,
                    config.timeout(),
                )?;
                tracing::info!(model = %config.model, "Translation adapter configured");
                Ok(Self::with_backend(Arc::new(backend)))
            }
            None => {
                tracing::warn!("No translation API key set; translation runs in mock mode");
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

    /// An adapter with no backend; translation uses the mock substitution.
    pub fn unconfigured() -> Self {
        Self { backend: None }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Deterministic local substitution: a fixed bracketed tag per known
    /// target language prefixed to the text, or the text unchanged.
    fn mock_translate(text: &str, target: &str) -> String {
        for (code, tag) in MOCK_TAGS {
            if target.eq_ignore_ascii_case(code) {
                return format!("{} {}", tag, text);
            }
        }
        text.to_string()
    }

    /// Reduce a raw detection reply to a two-letter code.
    ///
    /// Replies longer than two characters are scanned for the first
    /// exactly-two-character whitespace-separated token; anything else
    /// falls back to "en".
    fn extract_lang_code(raw: &str) -> String {
        let cleaned = raw.trim().to_lowercase();
        if cleaned.chars().count() == 2 {
            return cleaned;
        }
        cleaned
            .split_whitespace()
            .find(|token| token.chars().count() == 2)
            .map(|token| token.to_string())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }
}

#[async_trait]
impl Translator for TranslationAdapter {
    async fn translate(&self, text: &str, source: &str, target: &str) -> String {
        if target.is_empty() || target.eq_ignore_ascii_case(source) {
            return text.to_string();
        }

        let Some(backend) = &self.backend else {
            return Self::mock_translate(text, target);
        };

        let prompt = format!(
            "Translate the following text from {} to {}. \
             Only return the translated text, nothing else:\n\n{}",
            source, target, text
        );

        match backend.complete(TRANSLATE_SYSTEM, &prompt).await {
            Ok(translated) => translated.trim().to_string(),
            Err(e) => {
                tracing::warn!(
                    model = backend.model_name(),
                    target,
                    error = %e,
                    "Translation call failed; using mock substitution"
                );
                Self::mock_translate(text, target)
            }
        }
    }

    async fn detect_language(&self, text: &str) -> String {
        let Some(backend) = &self.backend else {
            return DEFAULT_LANG.to_string();
        };

        let prompt = format!(
            "Detect the language of the following text and respond with only \
             the ISO 639-1 language code (e.g., 'en', 'hi', 'ta'):\n\n{}",
            text
        );

        match backend.complete(DETECT_SYSTEM, &prompt).await {
            Ok(raw) => Self::extract_lang_code(&raw),
            Err(e) => {
                tracing::warn!(error = %e, "Language detection failed; defaulting to en");
                DEFAULT_LANG.to_string()
            }
        }
    }
}
