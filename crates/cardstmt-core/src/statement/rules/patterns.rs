//! Regex patterns shared by every issuer's extractor set.
//!
//! Issuer-specific layouts live next to the issuer in `statement::issuers`.

use lazy_static::lazy_static;
use regex::Regex;

/// Numeric day/month/year with slashes (Axis, ICICI).
pub const SLASH_DATE: &str = r"\d{1,2}/\d{1,2}/\d{2,4}";

/// Numeric day/month/year with dashes or slashes (Kotak).
pub const NUMERIC_DATE: &str = r"\d{1,2}[-/]\d{1,2}[-/]\d{2,4}";

/// Day, abbreviated month and year: `05 Mar 2024`, `05 Mar, 2024`, `05-Mar-2024` (HDFC).
pub const SPACED_MONTH_DATE: &str = r"\d{1,2}(?:\s+|[-/]\s*)[A-Za-z]{3}(?:,?\s+|[-/,]\s*)\d{4}";

/// Day, abbreviated month and year joined by dashes or slashes: `05-Mar-2024` (Kotak).
pub const DASHED_MONTH_DATE: &str = r"\d{1,2}[-/][A-Za-z]{3}[-/]\d{4}";

lazy_static! {
    // Masked card numbers (asterisk style)
    pub static ref MASKED_BIN_STARS: Regex = Regex::new(
        r"\b\d{6}\*+\d{4}\b"
    ).unwrap();

    pub static ref MASKED_FOUR_STARS: Regex = Regex::new(
        r"\b\d{4}\*+\d{4}\b"
    ).unwrap();

    pub static ref MASKED_STARS_ONLY: Regex = Regex::new(
        r"\*+\d{4}\b"
    ).unwrap();

    // Standalone four-digit tokens
    pub static ref FOUR_DIGITS: Regex = Regex::new(
        r"\b(\d{4})\b"
    ).unwrap();

    pub static ref YEAR_LIKE: Regex = Regex::new(
        r"^20\d{2}$"
    ).unwrap();

    // Card networks
    pub static ref NETWORKS: Regex = Regex::new(
        r"(?i)\b(Visa|Master\s?Card|Mastercard|American Express|Amex|Discover|RuPay)\b"
    ).unwrap();

    // "<Name> Credit Card Statement" heading
    pub static ref STATEMENT_HEADING: Regex = Regex::new(
        r"(?i)([A-Za-z ]+) Credit Card Statement"
    ).unwrap();

    // Bare date ranges anywhere in the text
    pub static ref SLASH_DATE_RANGE: Regex = Regex::new(&format!(
        r"({d})\s*(?:-|–|to)\s*({d})", d = SLASH_DATE
    )).unwrap();

    pub static ref NUMERIC_DATE_RANGE: Regex = Regex::new(&format!(
        r"({d})\s*(?:-|–|to)\s*({d})", d = NUMERIC_DATE
    )).unwrap();

    pub static ref SPACED_MONTH_DATE_RANGE: Regex = Regex::new(&format!(
        r"({d})\s*(?:-|–|to)\s*({d})", d = SPACED_MONTH_DATE
    )).unwrap();

    // Date tokens
    pub static ref SLASH_DATE_TOKEN: Regex = Regex::new(SLASH_DATE).unwrap();
}
