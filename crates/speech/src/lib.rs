//! Hosted speech engine adapters
//!
//! - [`HttpSttEngine`] sends audio to a hosted recognition service
//! - [`HttpTtsEngine`] fetches synthesized audio from a hosted service
//! - [`locale`] maps application language codes to engine locales

pub mod locale;
pub mod stt;
pub mod tts;

pub use locale::{recognizer_locale, synthesizer_lang};
pub use stt::HttpSttEngine;
pub use tts::HttpTtsEngine;
