//! Language code helpers

/// Default language used whenever detection or resolution comes up empty.
pub const DEFAULT_LANG: &str = "en";

/// Normalize a caller-supplied language code: trim and ASCII-lowercase.
///
/// Returns `None` for an empty (or whitespace-only) input so callers can
/// chain their own defaulting rules.
pub fn normalize_lang(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_lang(" HI "), Some("hi".to_string()));
        assert_eq!(normalize_lang("en"), Some("en".to_string()));
    }

    #[test]
    fn empty_input_is_none() {
        assert_eq!(normalize_lang(""), None);
        assert_eq!(normalize_lang("   "), None);
    }
}
