//! Card issuers known to the detector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bank or institution that issues credit cards.
///
/// This is the issuer, not the card network printed on the card: a Visa
/// card from HDFC is an [`Issuer::Hdfc`] card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Issuer {
    #[serde(rename = "Axis Bank")]
    Axis,
    #[serde(rename = "HDFC Bank")]
    Hdfc,
    #[serde(rename = "ICICI Bank")]
    Icici,
    #[serde(rename = "Kotak Mahindra Bank")]
    Kotak,
    #[serde(rename = "Chase")]
    Chase,
    #[serde(rename = "American Express")]
    AmericanExpress,
    #[serde(rename = "Citi")]
    Citi,
    #[serde(rename = "Bank of America")]
    BankOfAmerica,
    #[serde(rename = "Capital One")]
    CapitalOne,
    #[serde(rename = "State Bank of India")]
    StateBankOfIndia,
}

impl Issuer {
    /// Every known issuer.
    pub const ALL: [Issuer; 10] = [
        Issuer::Axis,
        Issuer::Hdfc,
        Issuer::Icici,
        Issuer::Kotak,
        Issuer::Chase,
        Issuer::AmericanExpress,
        Issuer::Citi,
        Issuer::BankOfAmerica,
        Issuer::CapitalOne,
        Issuer::StateBankOfIndia,
    ];

    /// Canonical display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Issuer::Axis => "Axis Bank",
            Issuer::Hdfc => "HDFC Bank",
            Issuer::Icici => "ICICI Bank",
            Issuer::Kotak => "Kotak Mahindra Bank",
            Issuer::Chase => "Chase",
            Issuer::AmericanExpress => "American Express",
            Issuer::Citi => "Citi",
            Issuer::BankOfAmerica => "Bank of America",
            Issuer::CapitalOne => "Capital One",
            Issuer::StateBankOfIndia => "State Bank of India",
        }
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
