//! Static language-code tables for the speech engines

/// ISO 639-1 code to recognizer locale. Codes outside the table use the
/// first entry as fallback.
const RECOGNIZER_LOCALES: &[(&str, &str)] = &[
    ("en", "en-IN"),
    ("hi", "hi-IN"),
    ("ta", "ta-IN"),
    ("te", "te-IN"),
    ("kn", "kn-IN"),
    ("bn", "bn-IN"),
    ("mr", "mr-IN"),
    ("gu", "gu-IN"),
    ("ml", "ml-IN"),
    ("pa", "pa-IN"),
];

/// Languages the synthesizer accepts as-is. Anything else falls back to "en".
const SYNTHESIZER_LANGS: &[&str] = &["en", "hi", "ta", "te", "kn", "bn", "mr", "gu", "ml", "pa"];

/// Map an application language code to the recognition engine's locale.
pub fn recognizer_locale(lang: &str) -> &'static str {
    RECOGNIZER_LOCALES
        .iter()
        .find(|(code, _)| lang.eq_ignore_ascii_case(code))
        .map(|(_, locale)| *locale)
        .unwrap_or("en-IN")
}

/// Map an application language code to the synthesis engine's code.
pub fn synthesizer_lang(lang: &str) -> &'static str {
    SYNTHESIZER_LANGS
        .iter()
        .find(|code| lang.eq_ignore_ascii_case(code))
        .copied()
        .unwrap_or("en")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_indian_locales() {
        assert_eq!(recognizer_locale("hi"), "hi-IN");
        assert_eq!(recognizer_locale("TA"), "ta-IN");
        assert_eq!(recognizer_locale("en"), "en-IN");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(recognizer_locale("fr"), "en-IN");
        assert_eq!(recognizer_locale(""), "en-IN");
        assert_eq!(synthesizer_lang("fr"), "en");
    }

    #[test]
    fn synthesizer_passes_known_codes_through() {
        assert_eq!(synthesizer_lang("bn"), "bn");
        assert_eq!(synthesizer_lang("PA"), "pa");
    }
}
