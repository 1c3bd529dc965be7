//! Date token scanning.
//!
//! Dates are returned exactly as printed; statements mix formats even
//! within one issuer, so no calendar parsing is attempted.

use regex::Regex;

use super::patterns::SLASH_DATE_TOKEN;
use super::FieldExtractor;

/// Finds date-shaped tokens in text.
pub struct DateTokens {
    pattern: &'static Regex,
}

impl DateTokens {
    /// Scanner for an arbitrary date pattern.
    pub fn new(pattern: &'static Regex) -> Self {
        Self { pattern }
    }

    /// Scanner for `DD/MM/YYYY`-style dates.
    pub fn slash() -> Self {
        Self::new(&SLASH_DATE_TOKEN)
    }
}

impl FieldExtractor for DateTokens {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.pattern.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
