//! Cleanup of text produced by PDF extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SPACE_RUN: Regex = Regex::new(r"[ ]{2,}").unwrap();
    static ref BLANK_LINES: Regex = Regex::new(r"\n{2,}").unwrap();
}

/// Normalize spacing artifacts left by PDF text extraction.
///
/// Non-breaking spaces become plain spaces, runs of spaces collapse to one,
/// runs of newlines collapse to one, and the result is trimmed.
pub fn normalize(text: &str) -> String {
    let text = text.replace('\u{a0}', " ");
    let text = SPACE_RUN.replace_all(&text, " ");
    let text = BLANK_LINES.replace_all(&text, "\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_spacing() {
        let raw = "  AXIS\u{a0}BANK   Credit Card\n\n\nStatement Period  01/04/2024 ";
        assert_eq!(
            normalize(raw),
            "AXIS BANK Credit Card\nStatement Period 01/04/2024"
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\n\n  \n"), "");
    }
}
