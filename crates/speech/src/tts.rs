//! HTTP text-to-speech engine

use async_trait::async_trait;
use reqwest::Client;

use janseva_config::SpeechConfig;
use janseva_core::{SpeechError, TextToSpeech};

use crate::locale::synthesizer_lang;

/// Hosted synthesis engine. Fetches MP3 bytes for a text in one request.
pub struct HttpTtsEngine {
    client: Option<Client>,
    endpoint: String,
}

impl HttpTtsEngine {
    pub fn from_config(config: &SpeechConfig) -> Result<Self, SpeechError> {
        if config.tts_endpoint.is_empty() {
            tracing::warn!("No TTS endpoint set; synthesis is unavailable");
            return Ok(Self {
                client: None,
                endpoint: String::new(),
            });
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SpeechError::Synthesis(format!("HTTP client: {}", e)))?;

        tracing::info!(endpoint = %config.tts_endpoint, "Speech synthesis configured");
        Ok(Self {
            client: Some(client),
            endpoint: config.tts_endpoint.clone(),
        })
    }
}

#[async_trait]
impl TextToSpeech for HttpTtsEngine {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SpeechError> {
        let Some(client) = &self.client else {
            return Err(SpeechError::NotConfigured);
        };

        let lang = synthesizer_lang(language);
        let response = client
            .get(&self.endpoint)
            .query(&[("ie", "UTF-8"), ("client", "tw-ob"), ("tl", lang), ("q", text)])
            .send()
            .await
            .map_err(|e| SpeechError::Synthesis(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::Synthesis(format!(
                "synthesis service returned {}",
                status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Synthesis(e.to_string()))?;

        if bytes.is_empty() {
            return Err(SpeechError::Synthesis("empty audio response".to_string()));
        }

        tracing::debug!(lang, bytes = bytes.len(), "Synthesis complete");
        Ok(bytes.to_vec())
    }
}
