//! Speech adapter error taxonomy

use thiserror::Error;

/// Errors surfaced by the speech adapters.
///
/// Unlike the chat/translation adapters, the speech engines report failures
/// to the caller so the HTTP layer can distinguish a 400 (nothing to
/// transcribe) from a 500 (backend down).
#[derive(Error, Debug)]
pub enum SpeechError {
    /// The engine has no credential or endpoint configured.
    #[error("speech engine is not configured")]
    NotConfigured,

    /// The engine ran but could not extract speech from the audio.
    #[error("could not understand audio")]
    UnrecognizedAudio,

    /// The recognition backend itself failed (network, auth, bad status).
    #[error("speech recognition backend error: {0}")]
    EngineUnavailable(String),

    /// The synthesis backend failed.
    #[error("speech synthesis error: {0}")]
    Synthesis(String),
}
