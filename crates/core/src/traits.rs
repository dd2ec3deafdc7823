//! Adapter traits for the hosted collaborators
//!
//! Every external capability sits behind one of these traits so the server
//! can be handed fakes in tests. Construction decides once whether an
//! adapter is configured; the chat and translation adapters degrade to fixed
//! fallback text instead of surfacing remote faults, while the speech
//! adapters report a typed [`SpeechError`](crate::SpeechError).

use async_trait::async_trait;

use crate::SpeechError;

/// Hosted chat-completion model.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send a prompt and return the reply text.
    ///
    /// Never fails: an unconfigured or unreachable model yields a fixed
    /// unavailability message instead.
    async fn ask(&self, prompt: &str) -> String;
}

/// Hosted translation/detection model.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` to `target`.
    ///
    /// Returns `text` unchanged when `target` is empty or equals `source`
    /// (case-insensitive). Never fails: remote faults degrade to a
    /// deterministic local substitution.
    async fn translate(&self, text: &str, source: &str, target: &str) -> String;

    /// Detect the language of `text`, returning a two-letter ISO 639-1 code.
    ///
    /// Never fails: defaults to "en" when detection is unavailable.
    async fn detect_language(&self, text: &str) -> String;
}

/// Hosted speech-to-text engine.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe raw audio bytes, using `language` as a recognition hint.
    async fn transcribe(&self, audio: &[u8], language: &str) -> Result<String, SpeechError>;
}

/// Hosted text-to-speech engine.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize `text` into audio bytes (single-shot, non-streaming).
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SpeechError>;
}
