//! Rupee amount parsing.

use rust_decimal::Decimal;
use std::str::FromStr;

use regex::Regex;

use super::FieldExtractor;

/// Extracts the amount captured (group 1) by a labelled amount pattern.
pub struct AmountAfterLabel {
    pattern: &'static Regex,
}

impl AmountAfterLabel {
    pub fn new(pattern: &'static Regex) -> Self {
        Self { pattern }
    }
}

impl FieldExtractor for AmountAfterLabel {
    type Output = Decimal;

    /// The first labelled amount that parses.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.pattern
            .captures(text)
            .and_then(|caps| parse_rupee_amount(&caps[1]))
    }
}

/// Parse an Indian-formatted rupee amount (e.g. "Rs. 1,23,456.78").
///
/// Thousands separators, the "Rs." marker, the rupee sign and whitespace
/// are ignored. Anything else that is not a number yields `None`.
pub fn parse_rupee_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    let s = s
        .strip_prefix("Rs.")
        .or_else(|| s.strip_prefix("Rs"))
        .or_else(|| s.strip_prefix('₹'))
        .unwrap_or(s);

    let cleaned: String = s
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    // "1,234." at the end of a sentence
    let cleaned = cleaned.trim_end_matches('.');
    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;

    lazy_static! {
        static ref DUE: Regex = Regex::new(r"(?i)Due\s*Rs\.?\s*([\d,]+\.?\d*)").unwrap();
    }

    #[test]
    fn test_parse_rupee_amount() {
        assert_eq!(
            parse_rupee_amount("1,23,456.78"),
            Some(Decimal::from_str("123456.78").unwrap())
        );
        assert_eq!(
            parse_rupee_amount("Rs. 25,000"),
            Some(Decimal::from_str("25000").unwrap())
        );
        assert_eq!(
            parse_rupee_amount("₹ 999.50"),
            Some(Decimal::from_str("999.50").unwrap())
        );
        assert_eq!(
            parse_rupee_amount("1,234."),
            Some(Decimal::from_str("1234").unwrap())
        );
    }

    #[test]
    fn test_parse_rupee_amount_rejects_non_numeric() {
        assert_eq!(parse_rupee_amount(","), None);
        assert_eq!(parse_rupee_amount(""), None);
        assert_eq!(parse_rupee_amount("N/A"), None);
    }

    #[test]
    fn test_amount_after_label() {
        let extractor = AmountAfterLabel::new(&DUE);
        assert_eq!(
            extractor.extract("Due Rs. 4,500.00"),
            Some(Decimal::from_str("4500.00").unwrap())
        );
        assert_eq!(extractor.extract("Due Rs. ,"), None);
    }
}
