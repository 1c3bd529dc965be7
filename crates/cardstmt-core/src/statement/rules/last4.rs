//! Card last-4 fallback shared across issuers.

use super::patterns::{FOUR_DIGITS, YEAR_LIKE};

/// Last standalone four-digit token that does not look like a year.
///
/// Falls back to the very last four-digit token when all of them look
/// like years (`20xx`).
pub fn last_standalone_four(text: &str) -> Option<String> {
    let tokens: Vec<&str> = FOUR_DIGITS
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    tokens
        .iter()
        .rev()
        .find(|t| !YEAR_LIKE.is_match(t))
        .or_else(|| tokens.last())
        .map(|t| t.to_string())
}
