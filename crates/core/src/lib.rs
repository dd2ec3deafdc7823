//! Core traits and types for the citizen-services backend
//!
//! This crate provides the seams shared by all other crates:
//! - Adapter traits for the hosted collaborators (chat model, translation
//!   model, speech engines)
//! - Language code helpers
//! - Speech error taxonomy

pub mod error;
pub mod language;
pub mod traits;

pub use error::SpeechError;
pub use language::{normalize_lang, DEFAULT_LANG};
pub use traits::{ChatModel, SpeechToText, TextToSpeech, Translator};
