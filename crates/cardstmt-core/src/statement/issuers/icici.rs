//! ICICI Bank statements.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::issuer::Issuer;
use crate::statement::rules::patterns::{
    MASKED_BIN_STARS, MASKED_FOUR_STARS, MASKED_STARS_ONLY, NETWORKS, SLASH_DATE,
    SLASH_DATE_RANGE, STATEMENT_HEADING,
};
use crate::statement::rules::{first_match, last_standalone_four, Candidate, DateTokens, FieldExtractor};
use crate::statement::{ExtractorSet, FieldSpec};

lazy_static! {
    static ref BANK_NAME: Regex = Regex::new(r"(?i)ICICI BANK").unwrap();

    static ref BRANDED_HEADING: Regex = Regex::new(r"(?i)ICICI.*Credit Card Statement").unwrap();

    static ref MASKED_X: Regex = Regex::new(r"\d{4}X{4,8}(\d{4})").unwrap();

    static ref NEAR_LABEL: Regex = Regex::new(r"(?i)(?:ending|number|account)\D{0,10}(\d{4})").unwrap();

    // "Statement period : March 1, 2024 to March 31, 2024"
    static ref LABELLED_PERIOD: Regex = Regex::new(
        r"(?i)Statement period\s*[:\-]?\s*([A-Za-z0-9 ,/]+to[A-Za-z0-9 ,/]+)"
    ).unwrap();

    static ref DUE_DATE: Regex = Regex::new(&format!(
        r"(?i)(?:Payment Due Date|Pay by)[^\d]{{0,10}}({})",
        SLASH_DATE
    )).unwrap();

    static ref DUE_NEARBY: Regex = Regex::new(&format!(
        r"(?i)due.{{0,10}}?({})",
        SLASH_DATE
    )).unwrap();

    static ref LONG_DATE: Regex = Regex::new(r"[A-Za-z]+ \d{1,2}, \d{4}").unwrap();
}

/// ICICI Bank field set.
pub static ICICI: ExtractorSet = ExtractorSet {
    issuer: Issuer::Icici,
    route_key: "icici",
    fields: &[
        FieldSpec::Text("issuer", extract_issuer),
        FieldSpec::Text("card_last4", extract_last4),
        FieldSpec::Text("card_type", extract_card_type),
        FieldSpec::Text("billing_period", extract_billing_period),
        FieldSpec::Text("payment_due_date", extract_due_date),
    ],
};

pub fn extract_issuer(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Literal(&BANK_NAME, Issuer::Icici.display_name()),
            Candidate::Literal(&BRANDED_HEADING, Issuer::Icici.display_name()),
            Candidate::Capture(&STATEMENT_HEADING, 1),
        ],
    )
}

pub fn extract_last4(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Capture(&MASKED_X, 1),
            Candidate::Tail(&MASKED_BIN_STARS),
            Candidate::Tail(&MASKED_FOUR_STARS),
            Candidate::Tail(&MASKED_STARS_ONLY),
            Candidate::Capture(&NEAR_LABEL, 1),
            Candidate::Custom(last_standalone_four),
        ],
    )
}

pub fn extract_card_type(text: &str) -> Option<String> {
    first_match(text, &[Candidate::Network(&NETWORKS)])
}

pub fn extract_billing_period(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Capture(&LABELLED_PERIOD, 1),
            Candidate::Range(&SLASH_DATE_RANGE, " - "),
        ],
    )
}

pub fn extract_due_date(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Capture(&DUE_DATE, 1),
            Candidate::Custom(second_long_date),
            Candidate::Capture(&DUE_NEARBY, 1),
        ],
    )
}

/// Second `Month D, YYYY` date; the summary box prints the statement date first.
fn second_long_date(text: &str) -> Option<String> {
    DateTokens::new(&LONG_DATE).extract_all(text).into_iter().nth(1)
}
