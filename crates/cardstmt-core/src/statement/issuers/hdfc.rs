//! HDFC Bank statements.
//!
//! Dates spell the month: `05 Apr, 2024`, `05 Apr 2024` or `05-Apr-2024`.
//! Card numbers are masked with X (`552260XXXXXX4321`).

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::issuer::Issuer;
use crate::statement::rules::patterns::{
    MASKED_BIN_STARS, MASKED_FOUR_STARS, MASKED_STARS_ONLY, NETWORKS, SPACED_MONTH_DATE,
    SPACED_MONTH_DATE_RANGE, STATEMENT_HEADING,
};
use crate::statement::rules::{first_match, last_standalone_four, Candidate};
use crate::statement::{ExtractorSet, FieldSpec};

lazy_static! {
    static ref BANK_NAME: Regex = Regex::new(r"(?i)HDFC").unwrap();

    static ref MASKED_X: Regex = Regex::new(r"\d{6}X{6}(\d{4})").unwrap();

    static ref CARD_NO_LABEL: Regex = Regex::new(r"(?i)Credit Card No\.\s*\d{6}X+(\d{4})").unwrap();

    static ref NEAR_LABEL: Regex = Regex::new(r"(?i)(?:ending|number|card)\D{0,10}(\d{4})").unwrap();

    static ref BIZ_PRODUCT: Regex = Regex::new(r"(?i)(UPI RuPay Biz Credit Card)").unwrap();

    static ref PRODUCT_HEADING: Regex = Regex::new(r"(?i)(\w+\s+\w+)\s+Credit Card Statement").unwrap();

    static ref LABELLED_PERIOD: Regex = Regex::new(&format!(
        r"(?i)Billing Period\s*:?\s*({d})\s*(?:-|–|to)\s*({d})",
        d = SPACED_MONTH_DATE
    )).unwrap();

    static ref STATEMENT_DATE: Regex = Regex::new(&format!(
        r"(?i)Statement Date\s*:?\s*({})",
        SPACED_MONTH_DATE
    )).unwrap();

    static ref DUE_DATE: Regex = Regex::new(&format!(
        r"(?i)(?:Payment Due Date|Due Date|Pay by)\s*:?\s*({})",
        SPACED_MONTH_DATE
    )).unwrap();

    static ref DUE_NEARBY: Regex = Regex::new(&format!(
        r"(?i)due[^\d]{{0,10}}({})",
        SPACED_MONTH_DATE
    )).unwrap();

    static ref GSTIN: Regex = Regex::new(r"(?i)GSTIN[:\s]*([\dA-Z]+)").unwrap();

    static ref ALTERNATE_ACCOUNT: Regex = Regex::new(r"(?i)Alternate Account Number\s+(\d+)").unwrap();
}

/// HDFC Bank field set.
pub static HDFC: ExtractorSet = ExtractorSet {
    issuer: Issuer::Hdfc,
    route_key: "hdfc",
    fields: &[
        FieldSpec::Text("issuer", extract_issuer),
        FieldSpec::Text("card_last4", extract_last4),
        FieldSpec::Text("card_type", extract_card_type),
        FieldSpec::Text("billing_period", extract_billing_period),
        FieldSpec::Text("statement_date", extract_statement_date),
        FieldSpec::Text("gstin", extract_gstin),
        FieldSpec::Text("alternate_account_number", extract_alternate_account_number),
    ],
};

pub fn extract_issuer(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Literal(&BANK_NAME, Issuer::Hdfc.display_name()),
            Candidate::Capture(&STATEMENT_HEADING, 1),
        ],
    )
}

pub fn extract_last4(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Capture(&MASKED_X, 1),
            Candidate::Capture(&CARD_NO_LABEL, 1),
            Candidate::Tail(&MASKED_BIN_STARS),
            Candidate::Tail(&MASKED_FOUR_STARS),
            Candidate::Tail(&MASKED_STARS_ONLY),
            Candidate::Capture(&NEAR_LABEL, 1),
            Candidate::Custom(last_standalone_four),
        ],
    )
}

/// Card network, or the card product name when the statement gives one.
pub fn extract_card_type(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Capture(&BIZ_PRODUCT, 1),
            Candidate::Network(&NETWORKS),
            Candidate::Capture(&PRODUCT_HEADING, 1),
        ],
    )
}

pub fn extract_billing_period(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Range(&LABELLED_PERIOD, " - "),
            Candidate::Range(&SPACED_MONTH_DATE_RANGE, " - "),
        ],
    )
}

pub fn extract_statement_date(text: &str) -> Option<String> {
    first_match(text, &[Candidate::Capture(&STATEMENT_DATE, 1)])
}

/// Payment due date. Not part of the HDFC field set.
pub fn extract_due_date(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Capture(&DUE_DATE, 1),
            Candidate::Capture(&DUE_NEARBY, 1),
        ],
    )
}

pub fn extract_gstin(text: &str) -> Option<String> {
    first_match(text, &[Candidate::Capture(&GSTIN, 1)])
}

pub fn extract_alternate_account_number(text: &str) -> Option<String> {
    first_match(text, &[Candidate::Capture(&ALTERNATE_ACCOUNT, 1)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
HDFC Bank Credit Card Statement
Credit Card No. 552260XXXXXX4321
Statement Date 05 Apr, 2024
Billing Period 06 Mar, 2024 - 05 Apr, 2024
Payment Due Date 25 Apr, 2024
GSTIN: 27AAACH1234Z1Z5
Alternate Account Number 0001234567890
Mastercard World";

    #[test]
    fn test_full_statement() {
        let result = HDFC.extract(SAMPLE, 800);
        assert_eq!(
            HDFC.field_names(),
            vec![
                "issuer",
                "card_last4",
                "card_type",
                "billing_period",
                "statement_date",
                "gstin",
                "alternate_account_number",
            ]
        );
        assert_eq!(result.text("issuer"), Some("HDFC Bank"));
        assert_eq!(result.text("card_last4"), Some("4321"));
        assert_eq!(result.text("card_type"), Some("Mastercard"));
        assert_eq!(result.text("billing_period"), Some("06 Mar, 2024 - 05 Apr, 2024"));
        assert_eq!(result.text("statement_date"), Some("05 Apr, 2024"));
        assert_eq!(result.text("gstin"), Some("27AAACH1234Z1Z5"));
        assert_eq!(result.text("alternate_account_number"), Some("0001234567890"));
        assert_eq!(result.confidence(), 1.0);
    }

    #[test]
    fn test_gstin_case_insensitive_label() {
        assert_eq!(
            extract_gstin("gstin 27AAACH1234Z1Z5\nnext"),
            Some("27AAACH1234Z1Z5".to_string())
        );
        assert_eq!(extract_gstin("no tax id"), None);
    }

    #[test]
    fn test_last4_fallbacks() {
        assert_eq!(extract_last4("Card 411111******1234"), Some("1234".to_string()));
        assert_eq!(extract_last4("card ending 9988"), Some("9988".to_string()));
        assert_eq!(extract_last4("nothing numeric"), None);
    }

    #[test]
    fn test_card_type_product_first() {
        assert_eq!(
            extract_card_type("UPI RuPay Biz Credit Card statement"),
            Some("UPI RuPay Biz Credit Card".to_string())
        );
        assert_eq!(extract_card_type("VISA Infinite"), Some("Visa".to_string()));
        assert_eq!(
            extract_card_type("Regalia Gold Credit Card Statement"),
            Some("Regalia Gold".to_string())
        );
    }

    #[test]
    fn test_billing_period_bare_range() {
        assert_eq!(
            extract_billing_period("from 06-Mar-2024 to 05-Apr-2024"),
            Some("06-Mar-2024 - 05-Apr-2024".to_string())
        );
        assert_eq!(extract_billing_period("06/03/2024 - 05/04/2024"), None);
    }

    #[test]
    fn test_due_date() {
        assert_eq!(
            extract_due_date("Payment Due Date 25 Apr, 2024"),
            Some("25 Apr, 2024".to_string())
        );
        assert_eq!(
            extract_due_date("amount due by 25 Apr 2024"),
            Some("25 Apr 2024".to_string())
        );
        assert_eq!(
            extract_due_date("Pay by 25-Apr-2024"),
            Some("25-Apr-2024".to_string())
        );
        assert_eq!(extract_due_date("due soon"), None);
    }

    #[test]
    fn test_empty_text() {
        let result = HDFC.extract("", 800);
        assert_eq!(result.found_count(), 0);
        assert_eq!(result.confidence(), 0.0);
    }
}
