//! Kotak Mahindra Bank statements.
//!
//! Kotak prints both `05-Apr-2024` and `05/04/2024` dates, masks card
//! numbers with spaced X groups (`4147 XXXX XXXX 5678`) and often names
//! the card product instead of the network.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use crate::models::issuer::Issuer;
use crate::statement::rules::patterns::{
    DASHED_MONTH_DATE, MASKED_BIN_STARS, MASKED_FOUR_STARS, MASKED_STARS_ONLY, NETWORKS,
    NUMERIC_DATE, NUMERIC_DATE_RANGE, STATEMENT_HEADING,
};
use crate::statement::rules::{first_match, last_standalone_four, AmountAfterLabel, Candidate, FieldExtractor};
use crate::statement::{ExtractorSet, FieldSpec};

lazy_static! {
    static ref BANK_NAME: Regex = Regex::new(r"(?i)KOTAK").unwrap();

    static ref MASKED_X: Regex = Regex::new(r"\d{4}\s*X{4,8}\s*X{0,4}\s*(\d{4})").unwrap();

    static ref PRIMARY_CARD: Regex = Regex::new(
        r"(?i)Primary Card Number\s*\d{4}\s*X+\s*X+\s*(\d{4})"
    ).unwrap();

    static ref NEAR_LABEL: Regex = Regex::new(r"(?i)(?:ending|number|card)\D{0,10}(\d{4})").unwrap();

    static ref CARD_PRODUCT: Regex = Regex::new(
        r"(?i)Feast Gold|Dream Different|Solitaire|Urbane Gold|PVR|Mojo Platinum|Royale Signature|Zen Signature|White Signature|League Platinum"
    ).unwrap();

    static ref LABELLED_PERIOD: Regex = Regex::new(&format!(
        r"(?i)(?:Statement|Billing) Period\s*[:\-]?\s*({m}|{n})\s*(?:-|–|to)\s*({m}|{n})",
        m = DASHED_MONTH_DATE,
        n = NUMERIC_DATE
    )).unwrap();

    static ref FROM_TO_PERIOD: Regex = Regex::new(&format!(
        r"(?i)from\s+({d})\s+to\s+({d})",
        d = DASHED_MONTH_DATE
    )).unwrap();

    static ref STATEMENT_DATE: Regex = Regex::new(&format!(
        r"(?i)Statement Date\s*:?\s*({m}|{n})",
        m = DASHED_MONTH_DATE,
        n = NUMERIC_DATE
    )).unwrap();

    static ref DUE_DATE: Regex = Regex::new(&format!(
        r"(?i)(?:pay by|due date|payment due)\s*:?\s*({m}|{n})",
        m = DASHED_MONTH_DATE,
        n = NUMERIC_DATE
    )).unwrap();

    static ref DUE_NEARBY: Regex = Regex::new(&format!(
        r"(?i)due[^\d]{{0,10}}({})",
        NUMERIC_DATE
    )).unwrap();

    static ref TOTAL_DUE: Regex = Regex::new(r"(?i)Total Amount Due.*?Rs\.?\s*([\d,]+\.?\d*)").unwrap();

    static ref MINIMUM_DUE: Regex = Regex::new(r"(?i)Minimum Amount Due.*?Rs\.?\s*([\d,]+\.?\d*)").unwrap();

    static ref CREDIT_LIMIT: Regex = Regex::new(r"(?i)Total Credit Limit[:\s]*Rs\.?\s*([\d,]+\.?\d*)").unwrap();

    static ref CRN_LONG: Regex = Regex::new(r"(?i)Customer Relationship Number[:\-\s]*(\d+)").unwrap();

    static ref CRN_SHORT: Regex = Regex::new(r"(?i)CRN[:\s]*(\d+)").unwrap();
}

/// Kotak Mahindra Bank field set.
pub static KOTAK: ExtractorSet = ExtractorSet {
    issuer: Issuer::Kotak,
    route_key: "kotak",
    fields: &[
        FieldSpec::Text("issuer", extract_issuer),
        FieldSpec::Text("card_last4", extract_last4),
        FieldSpec::Text("card_type", extract_card_type),
        FieldSpec::Text("billing_period", extract_billing_period),
        FieldSpec::Amount("credit_limit", extract_credit_limit),
        FieldSpec::Text("crn", extract_crn),
    ],
};

pub fn extract_issuer(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Literal(&BANK_NAME, Issuer::Kotak.display_name()),
            Candidate::Capture(&STATEMENT_HEADING, 1),
        ],
    )
}

pub fn extract_last4(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Capture(&MASKED_X, 1),
            Candidate::Capture(&PRIMARY_CARD, 1),
            Candidate::Tail(&MASKED_BIN_STARS),
            Candidate::Tail(&MASKED_FOUR_STARS),
            Candidate::Tail(&MASKED_STARS_ONLY),
            Candidate::Capture(&NEAR_LABEL, 1),
            Candidate::Custom(last_standalone_four),
        ],
    )
}

/// Card network, else the Kotak product name as printed.
pub fn extract_card_type(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Network(&NETWORKS),
            Candidate::Capture(&CARD_PRODUCT, 0),
        ],
    )
}

pub fn extract_billing_period(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Range(&LABELLED_PERIOD, " to "),
            Candidate::Range(&FROM_TO_PERIOD, " to "),
            Candidate::Range(&NUMERIC_DATE_RANGE, " to "),
        ],
    )
}

/// Statement date. Not part of the Kotak field set.
pub fn extract_statement_date(text: &str) -> Option<String> {
    first_match(text, &[Candidate::Capture(&STATEMENT_DATE, 1)])
}

/// Payment due date. Not part of the Kotak field set.
pub fn extract_due_date(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Capture(&DUE_DATE, 1),
            Candidate::Capture(&DUE_NEARBY, 1),
        ],
    )
}

/// Total amount due. Not part of the Kotak field set.
pub fn extract_total_amount_due(text: &str) -> Option<Decimal> {
    AmountAfterLabel::new(&TOTAL_DUE).extract(text)
}

/// Minimum amount due. Not part of the Kotak field set.
pub fn extract_minimum_amount_due(text: &str) -> Option<Decimal> {
    AmountAfterLabel::new(&MINIMUM_DUE).extract(text)
}

pub fn extract_credit_limit(text: &str) -> Option<Decimal> {
    AmountAfterLabel::new(&CREDIT_LIMIT).extract(text)
}

/// Customer Relationship Number.
pub fn extract_crn(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Capture(&CRN_LONG, 1),
            Candidate::Capture(&CRN_SHORT, 1),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::result::FieldValue;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    const SAMPLE: &str = "\
Kotak Mahindra Bank
Primary Card Number 4147 XXXX XXXX 5678
Statement Period 06-Mar-2024 to 05-Apr-2024
Statement Date 05-Apr-2024
Pay by 25-Apr-2024
Total Amount Due Rs. 12,345.67
Minimum Amount Due Rs. 620.00
Total Credit Limit: Rs. 1,50,000
CRN: 123456789
Zen Signature";

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_full_statement() {
        let result = KOTAK.extract(SAMPLE, 800);
        assert_eq!(result.text("issuer"), Some("Kotak Mahindra Bank"));
        assert_eq!(result.text("card_last4"), Some("5678"));
        assert_eq!(result.text("card_type"), Some("Zen Signature"));
        assert_eq!(result.text("billing_period"), Some("06-Mar-2024 to 05-Apr-2024"));
        assert_eq!(result.get("credit_limit"), Some(&FieldValue::Amount(dec("150000"))));
        assert_eq!(result.text("crn"), Some("123456789"));
        assert_eq!(result.confidence(), 1.0);
    }

    #[test]
    fn test_extras_outside_field_set() {
        assert_eq!(extract_statement_date(SAMPLE), Some("05-Apr-2024".to_string()));
        assert_eq!(extract_due_date(SAMPLE), Some("25-Apr-2024".to_string()));
        assert_eq!(extract_total_amount_due(SAMPLE), Some(dec("12345.67")));
        assert_eq!(extract_minimum_amount_due(SAMPLE), Some(dec("620.00")));
    }

    #[test]
    fn test_last4_masked_variants() {
        assert_eq!(extract_last4("Card 411111******1234"), Some("1234".to_string()));
        assert_eq!(extract_last4("4147XXXXXXXX9999"), Some("9999".to_string()));
    }

    #[test]
    fn test_card_type_network_before_product() {
        assert_eq!(extract_card_type("PVR Visa card"), Some("Visa".to_string()));
        assert_eq!(extract_card_type("League Platinum"), Some("League Platinum".to_string()));
        assert_eq!(extract_card_type("plain card"), None);
    }

    #[test]
    fn test_billing_period_fallbacks() {
        assert_eq!(
            extract_billing_period("for the period from 06/Mar/2024 to 05/Apr/2024"),
            Some("06/Mar/2024 to 05/Apr/2024".to_string())
        );
        assert_eq!(
            extract_billing_period("06-03-2024 - 05-04-2024"),
            Some("06-03-2024 to 05-04-2024".to_string())
        );
    }

    #[test]
    fn test_amounts_reject_non_numeric() {
        assert_eq!(extract_credit_limit("Total Credit Limit: Rs. ,"), None);
        assert_eq!(extract_credit_limit("no limit printed"), None);
    }

    #[test]
    fn test_due_date_numeric() {
        assert_eq!(
            extract_due_date("Payment due 25/04/2024"),
            Some("25/04/2024".to_string())
        );
        assert_eq!(
            extract_due_date("Amount due by: 25-04-2024"),
            Some("25-04-2024".to_string())
        );
        assert_eq!(
            extract_due_date("Pay by 25/04/2024"),
            Some("25/04/2024".to_string())
        );
    }

    #[test]
    fn test_crn_short_label() {
        assert_eq!(extract_crn("CRN 99887766"), Some("99887766".to_string()));
        assert_eq!(
            extract_crn("Customer Relationship Number - 1234"),
            Some("1234".to_string())
        );
    }
}
