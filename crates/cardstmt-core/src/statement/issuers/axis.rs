//! Axis Bank statements.
//!
//! Dates are slash-numeric (`01/04/2024`). The payment due date is often
//! printed in a table below its label, one column per summary figure.

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
    static ref BANK_NAME: Regex = Regex::new(r"(?i)\bAXIS BANK\b").unwrap();

    static ref CARD_NEAR_LABEL: Regex = Regex::new(
        r"(?i)(?:card|card no|card number|acct|account|ending)[^\d]{0,40}(\d{4})"
    ).unwrap();

    static ref LABELLED_PERIOD: Regex = Regex::new(&format!(
        r"(?i)(?:Statement Period|Billing Period)[^\d]*({d})\s*(?:-|–|to)\s*({d})",
        d = SLASH_DATE
    )).unwrap();

    // Whatever digits follow a period label, for layouts the range patterns miss
    static ref LOOSE_PERIOD: Regex = Regex::new(
        r"(?i)(?:Statement Period|Billing Period|Cycle)[^0-9]*([\d/ -]+)"
    ).unwrap();

    static ref DUE_DATE: Regex = Regex::new(&format!(
        r"(?i)(?:Payment Due|Due Date|Pay by)[^\d]{{0,10}}({})",
        SLASH_DATE
    )).unwrap();
}

/// Axis Bank field set.
pub static AXIS: ExtractorSet = ExtractorSet {
    issuer: Issuer::Axis,
    route_key: "axis",
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
            Candidate::Literal(&BANK_NAME, Issuer::Axis.display_name()),
            Candidate::Capture(&STATEMENT_HEADING, 1),
        ],
    )
}

pub fn extract_last4(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Tail(&MASKED_BIN_STARS),
            Candidate::Tail(&MASKED_FOUR_STARS),
            Candidate::Tail(&MASKED_STARS_ONLY),
            Candidate::LastCapture(&CARD_NEAR_LABEL),
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
            Candidate::Range(&LABELLED_PERIOD, " - "),
            Candidate::Range(&SLASH_DATE_RANGE, " - "),
            Candidate::Capture(&LOOSE_PERIOD, 1),
        ],
    )
}

pub fn extract_due_date(text: &str) -> Option<String> {
    first_match(
        text,
        &[
            Candidate::Capture(&DUE_DATE, 1),
            Candidate::Custom(due_date_below_label),
        ],
    )
}

/// Due date from the two lines following a "payment due" heading.
///
/// The first of those lines holding any dates decides: its third date if
/// it has three or more, else its second, else its only one.
fn due_date_below_label(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let dates = DateTokens::slash();

    for (i, line) in lines.iter().enumerate() {
        if !line.to_lowercase().contains("payment due") {
            continue;
        }
        for next in lines.iter().skip(i + 1).take(2) {
            let found = dates.extract_all(next);
            if !found.is_empty() {
                return found.into_iter().take(3).last();
            }
        }
    }
    None
}
