//! HTTP speech-to-text engine
//!
//! Sends raw audio to a hosted recognition service and extracts the best
//! transcript from its JSON reply. The service answers one JSON object per
//! line; lines without a result are skipped.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use janseva_config::SpeechConfig;
use janseva_core::{SpeechError, SpeechToText};

use crate::locale::recognizer_locale;

/// Hosted recognition engine.
///
/// Built unconfigured when no API key is present; every call then reports
/// [`SpeechError::NotConfigured`] so the HTTP layer can answer 500 without
/// attempting a remote call.
pub struct HttpSttEngine {
    client: Option<Client>,
    endpoint: String,
    api_key: String,
}

impl HttpSttEngine {
    pub fn from_config(config: &SpeechConfig) -> Result<Self, SpeechError> {
        let Some(key) = config.api_key.clone().filter(|k| !k.is_empty()) else {
            tracing::warn!("No speech API key set; transcription is unavailable");
            return Ok(Self {
                client: None,
                endpoint: config.stt_endpoint.clone(),
                api_key: String::new(),
            });
        };

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SpeechError::EngineUnavailable(format!("HTTP client: {}", e)))?;

        tracing::info!(endpoint = %config.stt_endpoint, "Speech recognition configured");
        Ok(Self {
            client: Some(client),
            endpoint: config.stt_endpoint.clone(),
            api_key: key,
        })
    }

    fn recognize_url(&self, locale: &str) -> String {
        format!(
            "{}?client=chromium&lang={}&key={}",
            self.endpoint, locale, self.api_key
        )
    }

    /// Pull the highest-confidence transcript out of the line-delimited
    /// JSON reply. An empty reply means the engine heard nothing.
    fn best_transcript(body: &str) -> Option<String> {
        for line in body.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Ok(parsed) = serde_json::from_str::<RecognizeResponse>(line) else {
                continue;
            };
            for result in parsed.result {
                if let Some(alternative) = result.alternative.into_iter().next() {
                    if !alternative.transcript.is_empty() {
                        return Some(alternative.transcript);
                    }
                }
            }
        }
        None
    }
}

#[async_trait]
impl SpeechToText for HttpSttEngine {
    async fn transcribe(&self, audio: &[u8], language: &str) -> Result<String, SpeechError> {
        let Some(client) = &self.client else {
            return Err(SpeechError::NotConfigured);
        };

        let locale = recognizer_locale(language);
        let response = client
            .post(self.recognize_url(locale))
            .header("Content-Type", "audio/l16; rate=16000")
            .body(audio.to_vec())
            .send()
            .await
            .map_err(|e| SpeechError::EngineUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::EngineUnavailable(format!(
                "recognition service returned {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SpeechError::EngineUnavailable(e.to_string()))?;

        match Self::best_transcript(&body) {
            Some(text) => {
                tracing::debug!(locale, chars = text.len(), "Transcription complete");
                Ok(text)
            }
            None => Err(SpeechError::UnrecognizedAudio),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    result: Vec<RecognizeResult>,
}

#[derive(Debug, Deserialize)]
struct RecognizeResult {
    #[serde(default)]
    alternative: Vec<RecognizeAlternative>,
}

#[derive(Debug, Deserialize)]
struct RecognizeAlternative {
    #[serde(default)]
    transcript: String,
}
