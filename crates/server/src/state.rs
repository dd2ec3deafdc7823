//! Application State
//!
//! Shared state across all handlers. The adapters arrive as trait objects,
//! constructed once at startup, so tests can substitute fakes without any
//! process-wide state.

use std::path::PathBuf;
use std::sync::Arc;

use janseva_config::Settings;
use janseva_core::{ChatModel, SpeechToText, TextToSpeech, Translator};
use janseva_persistence::PersistenceLayer;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup
    pub settings: Arc<Settings>,
    /// Record store
    pub records: PersistenceLayer,
    /// Hosted chat model
    pub chat: Arc<dyn ChatModel>,
    /// Hosted translation/detection model
    pub translator: Arc<dyn Translator>,
    /// Hosted speech recognition engine
    pub stt: Arc<dyn SpeechToText>,
    /// Hosted speech synthesis engine
    pub tts: Arc<dyn TextToSpeech>,
    /// Directory where synthesized audio files are written and served from
    pub tts_dir: PathBuf,
}

impl AppState {
    pub fn new(
        settings: Arc<Settings>,
        records: PersistenceLayer,
        chat: Arc<dyn ChatModel>,
        translator: Arc<dyn Translator>,
        stt: Arc<dyn SpeechToText>,
        tts: Arc<dyn TextToSpeech>,
    ) -> Self {
        let tts_dir = PathBuf::from(&settings.media.tts_dir);
        Self {
            settings,
            records,
            chat,
            translator,
            stt,
            tts,
            tts_dir,
        }
    }
}
