//! Field extraction from dictionary pages.
//!
//! Each dictionary variant keeps its CSS selectors in a table of constants and
//! compiles them once. Extraction is total: a missing node yields the field's
//! fallback (the looked-up word, an empty string, or nothing) and never an error.
//!
//! - [`monolingual::extract`]: heading, definition blocks, Wikipedia excerpt
//! - [`bilingual::extract`]: query, summary, example pairs, more-examples link

pub mod bilingual;
pub mod monolingual;

use scraper::Selector;

/// Compile a built-in selector. The strings are constants, so failure is a bug.
fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {:?}: {:?}", css, e))
}

/// Trim `text`, keeping it only when something is left.
fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  意味1 \n"), Some("意味1".to_string()));
        assert_eq!(non_empty(" \t\n "), None);
        assert_eq!(non_empty(""), None);
    }

    #[test]
    #[should_panic(expected = "invalid built-in selector")]
    fn test_compile_rejects_malformed_selector() {
        compile("div >");
    }
}
