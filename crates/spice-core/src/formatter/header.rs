//! Section header detection
//!
//! Two header conventions are recognized on a trimmed line:
//! - a line wrapped in bold markers, e.g. `**Top 3 Options:**`
//! - a capitalized "simple" title ending in a colon, e.g. `Key Findings:`
//!
//! The simple form also matches ordinary prose that happens to end in a colon.
//! That is accepted as-is.

use std::sync::OnceLock;

use regex::Regex;

fn bold_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\*\*([^*]+)\*\*\s*:?\s*$").expect("valid regex"))
}

fn simple_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z][A-Za-z0-9 ()/#&+-]*:\s*$").expect("valid regex"))
}

/// Return the header title if `line` is a section header.
///
/// The returned title may be empty (e.g. `**  **`); callers treat an empty
/// title as "no title".
pub fn header_title(line: &str) -> Option<String> {
    if let Some(caps) = bold_header_re().captures(line) {
        let inner = caps[1].trim();
        let inner = inner.strip_suffix(':').unwrap_or(inner);
        return Some(inner.trim().to_string());
    }

    if simple_header_re().is_match(line) {
        let title = line.trim_end();
        let title = title.strip_suffix(':').unwrap_or(title);
        return Some(title.trim().to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_header_with_inner_colon() {
        assert_eq!(
            header_title("**Top 3 Options:**"),
            Some("Top 3 Options".to_string())
        );
    }

    #[test]
    fn test_bold_header_with_outer_colon() {
        assert_eq!(
            header_title("**Brand Signals**:"),
            Some("Brand Signals".to_string())
        );
        assert_eq!(
            header_title("**Market Reality** :  "),
            Some("Market Reality".to_string())
        );
    }

    #[test]
    fn test_bold_header_rejects_inner_bold_and_trailing_text() {
        assert_eq!(header_title("**Acme**: great tool"), None);
        assert_eq!(header_title("**A **b** c**"), None);
        assert_eq!(header_title("**unterminated"), None);
    }

    #[test]
    fn test_simple_header() {
        assert_eq!(
            header_title("Key Findings:"),
            Some("Key Findings".to_string())
        );
        assert_eq!(
            header_title("Pros & Cons (2024) / Q#1 +more-ish:"),
            Some("Pros & Cons (2024) / Q#1 +more-ish".to_string())
        );
    }

    #[test]
    fn test_simple_header_requirements() {
        // must start uppercase
        assert_eq!(header_title("key findings:"), None);
        // nothing after the colon
        assert_eq!(header_title("Confidence: 8/10"), None);
        // punctuation outside the allowed set
        assert_eq!(header_title("Note, please:"), None);
        // list prefixes are not headers
        assert_eq!(header_title("- Risks:"), None);
    }

    #[test]
    fn test_prose_ending_in_colon_is_a_header() {
        assert_eq!(
            header_title("Here are the options we found:"),
            Some("Here are the options we found".to_string())
        );
    }

    #[test]
    fn test_blank_bold_header_has_empty_title() {
        assert_eq!(header_title("**   **"), Some(String::new()));
    }
}
