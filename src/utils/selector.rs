//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_unsafe_valid() {
        let _ = parse_selector_unsafe("loc", "test");
    }

    #[test]
    #[should_panic(expected = "programming error")]
    fn test_parse_selector_unsafe_invalid_panics() {
        let _ = parse_selector_unsafe("[[[", "test");
    }
}
