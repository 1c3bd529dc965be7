//! Issuer detection.
//!
//! Statements mention card networks (Visa, Amex, ...) as prominently as
//! the issuing bank, so detection runs a fixed sequence of increasingly
//! permissive checks and stops at the first hit:
//!
//! 1. any mention of "ICICI";
//! 2. an issuer key on a statement-header line within the first lines;
//! 3. a whole-word bank key anywhere;
//! 4. any issuer key anywhere, network keys only when near the word "card";
//! 5. an ICICI card product name.

use std::cmp::Reverse;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::models::config::DetectionConfig;
use crate::models::issuer::Issuer;

/// Issuer name keys as they appear (upper-cased) in statements.
const ISSUER_KEYS: &[(&str, Issuer)] = &[
    ("CHASE", Issuer::Chase),
    ("AMERICAN EXPRESS", Issuer::AmericanExpress),
    ("AMEX", Issuer::AmericanExpress),
    ("CITI", Issuer::Citi),
    ("CITIBANK", Issuer::Citi),
    ("BANK OF AMERICA", Issuer::BankOfAmerica),
    ("CAPITAL ONE", Issuer::CapitalOne),
    ("AXIS BANK", Issuer::Axis),
    ("HDFC BANK", Issuer::Hdfc),
    ("ICICI BANK", Issuer::Icici),
    ("SBI", Issuer::StateBankOfIndia),
    ("KOTAK", Issuer::Kotak),
];

const CARD_NETWORKS: &[&str] = &["VISA", "MASTERCARD", "AMERICAN EXPRESS", "AMEX", "RUPAY", "DISCOVER"];

/// Words that mark a line as naming a bank rather than only a network.
const BANK_WORDS: &[&str] = &["BANK", "CITI", "CHASE", "ICICI", "HDFC", "AXIS", "KOTAK", "SBI"];

/// Short bank codes treated as bank-like keys even without the word "BANK".
const SHORT_BANK_CODES: &[&str] = &["CITI", "CHASE", "ICICI", "HDFC", "AXIS", "KOTAK", "SBI"];

const STATEMENT_INDICATORS: &[&str] = &["CREDIT CARD", "STATEMENT", "ACCOUNT", "SUMMARY", "BILL"];

/// ICICI card products, printed on statements that may not name the bank.
const ICICI_PRODUCTS: &[&str] = &["INFINITY", "CORAL", "SAPPHIRO", "RUBYX", "MMT", "MAKEMYTRIP", "EMERALDE"];

lazy_static! {
    static ref DEFAULT_DETECTOR: IssuerDetector = IssuerDetector::default();
}

/// Detect the issuer with default settings.
pub fn detect_issuer(text: &str) -> Option<Issuer> {
    DEFAULT_DETECTOR.detect(text)
}

struct IssuerKey {
    key: &'static str,
    issuer: Issuer,
    bank_like: bool,
    word: Regex,
    /// Set for card-network keys, which only count near the word "card".
    near_card: Option<Regex>,
}

/// Maps statement text to the issuing bank.
pub struct IssuerDetector {
    scan_lines: usize,
    /// Longest key first.
    keys: Vec<IssuerKey>,
    icici_products: Vec<Regex>,
}

impl IssuerDetector {
    /// Build a detector, compiling the key patterns once.
    pub fn new(config: &DetectionConfig) -> Self {
        let window = config.network_card_window;

        let mut keys: Vec<IssuerKey> = ISSUER_KEYS
            .iter()
            .map(|&(key, issuer)| {
                let escaped = regex::escape(key);
                let near_card = CARD_NETWORKS.contains(&key).then(|| {
                    compile(&format!(
                        r"\b{k}.{{0,{w}}}CARD|CARD.{{0,{w}}}{k}",
                        k = escaped,
                        w = window
                    ))
                });
                IssuerKey {
                    key,
                    issuer,
                    bank_like: key.contains("BANK") || SHORT_BANK_CODES.contains(&key),
                    word: compile(&format!(r"\b{}\b", escaped)),
                    near_card,
                }
            })
            .collect();
        keys.sort_by_key(|k| Reverse(k.key.len()));

        let icici_products = ICICI_PRODUCTS
            .iter()
            .map(|p| compile(&format!(r"\b{}\b", regex::escape(p))))
            .collect();

        Self {
            scan_lines: config.scan_lines,
            keys,
            icici_products,
        }
    }

    /// Detect the issuer of a statement, or `None` if no rule applies.
    pub fn detect(&self, text: &str) -> Option<Issuer> {
        if text.is_empty() {
            return None;
        }

        let upper = text.to_uppercase();

        // ICICI statements routinely co-brand networks; any mention settles it
        if upper.contains("ICICI") {
            debug!("Detected ICICI Bank by name");
            return Some(Issuer::Icici);
        }

        if let Some(issuer) = self.detect_from_header(&upper) {
            debug!("Detected {} from statement header", issuer);
            return Some(issuer);
        }

        if let Some(issuer) = self.detect_bank_key(&upper) {
            debug!("Detected {} from bank name", issuer);
            return Some(issuer);
        }

        if let Some(issuer) = self.detect_any_key(&upper) {
            debug!("Detected {} from issuer key", issuer);
            return Some(issuer);
        }

        if self.icici_products.iter().any(|re| re.is_match(&upper)) {
            debug!("Detected ICICI Bank from card product name");
            return Some(Issuer::Icici);
        }

        debug!("No issuer detected");
        None
    }

    /// Look for an issuer key on a statement-header line near the top.
    fn detect_from_header(&self, upper: &str) -> Option<Issuer> {
        for line in upper.lines().take(self.scan_lines) {
            let mentions_network = CARD_NETWORKS.iter().any(|n| line.contains(n));
            let mentions_bank = BANK_WORDS.iter().any(|b| line.contains(b));
            if mentions_network && !mentions_bank {
                trace!("Skipping network-only line: {}", line);
                continue;
            }

            if !STATEMENT_INDICATORS.iter().any(|i| line.contains(i)) {
                continue;
            }

            if let Some(k) = self.keys.iter().find(|k| line.contains(k.key)) {
                return Some(k.issuer);
            }
        }
        None
    }

    fn detect_bank_key(&self, upper: &str) -> Option<Issuer> {
        self.keys
            .iter()
            .filter(|k| k.bank_like)
            .find(|k| k.word.is_match(upper))
            .map(|k| k.issuer)
    }

    fn detect_any_key(&self, upper: &str) -> Option<Issuer> {
        self.keys
            .iter()
            .filter(|k| k.near_card.as_ref().is_none_or(|re| re.is_match(upper)))
            .find(|k| k.word.is_match(upper))
            .map(|k| k.issuer)
    }
}

impl Default for IssuerDetector {
    fn default() -> Self {
        Self::new(&DetectionConfig::default())
    }
}

fn compile(pattern: &str) -> Regex {
    // Patterns are built from escaped constant keys
    Regex::new(pattern).expect("issuer key pattern is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icici_anywhere_wins() {
        let text = "HDFC BANK\nsomething\nPayments via ICICI netbanking";
        assert_eq!(detect_issuer(text), Some(Issuer::Icici));
    }

    #[test]
    fn test_header_line() {
        let text = "Axis Bank Credit Card Statement\nCard No 411111******1234";
        assert_eq!(detect_issuer(text), Some(Issuer::Axis));
    }

    #[test]
    fn test_header_prefers_longest_key() {
        // "BANK OF AMERICA" beats the shorter keys on the same line
        let text = "Bank of America Credit Card Statement";
        assert_eq!(detect_issuer(text), Some(Issuer::BankOfAmerica));
    }

    #[test]
    fn test_network_only_line_is_skipped() {
        // The first line names only a network; Kotak is found on a later line
        let text = "VISA SIGNATURE CREDIT CARD STATEMENT\nKotak Mahindra Bank statement summary";
        assert_eq!(detect_issuer(text), Some(Issuer::Kotak));
    }

    #[test]
    fn test_header_limited_to_first_lines() {
        let mut text = String::new();
        for _ in 0..20 {
            text.push_str("filler line\n");
        }
        text.push_str("CHASE statement\n");
        // Still found by the whole-text bank key fallback
        assert_eq!(detect_issuer(&text), Some(Issuer::Chase));

        let config = DetectionConfig {
            scan_lines: 0,
            ..DetectionConfig::default()
        };
        assert_eq!(IssuerDetector::new(&config).detect(&text), Some(Issuer::Chase));
    }

    #[test]
    fn test_bank_key_whole_word() {
        assert_eq!(detect_issuer("Issued by HDFC Bank Ltd"), Some(Issuer::Hdfc));
        assert_eq!(detect_issuer("Paid at SBI branch"), Some(Issuer::StateBankOfIndia));
        // "CITIZEN" must not match "CITI"
        assert_eq!(detect_issuer("Senior citizen discount"), None);
    }

    #[test]
    fn test_network_requires_card_context() {
        assert_eq!(
            detect_issuer("Your American Express card is ready"),
            Some(Issuer::AmericanExpress)
        );
        assert_eq!(
            detect_issuer("AMERICAN EXPRESS CREDIT CARD STATEMENT"),
            Some(Issuer::AmericanExpress)
        );
        // Logo text without any card context
        assert_eq!(detect_issuer("We accept Amex at all outlets"), None);
    }

    #[test]
    fn test_network_card_context_starts_at_word() {
        // "PREAMEX CARD" is not an Amex mention next to "card"
        assert_eq!(detect_issuer("Amex welcome kit\nPreamex card"), None);
        assert_eq!(
            detect_issuer("Amex welcome kit\nAmex card"),
            Some(Issuer::AmericanExpress)
        );
    }

    #[test]
    fn test_capital_one() {
        assert_eq!(detect_issuer("Capital One Platinum"), Some(Issuer::CapitalOne));
    }

    #[test]
    fn test_icici_product_fallback() {
        assert_eq!(detect_issuer("Your Sapphiro rewards this month"), Some(Issuer::Icici));
        assert_eq!(detect_issuer("MakeMyTrip Signature"), Some(Issuer::Icici));
        // Product names must be whole words
        assert_eq!(detect_issuer("Coralline reef tours"), None);
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(detect_issuer(""), None);
        assert_eq!(detect_issuer("Monthly summary of nothing in particular"), None);
    }

    #[test]
    fn test_deterministic() {
        let text = "HDFC Bank Credit Card Statement\nVisa Platinum";
        let first = detect_issuer(text);
        for _ in 0..10 {
            assert_eq!(detect_issuer(text), first);
        }
    }

    #[test]
    fn test_network_window_is_configurable() {
        let text = "AMEX ---------------------------------------- CARD";
        assert_eq!(detect_issuer(text), None);

        let config = DetectionConfig {
            network_card_window: 60,
            ..DetectionConfig::default()
        };
        assert_eq!(
            IssuerDetector::new(&config).detect(text),
            Some(Issuer::AmericanExpress)
        );
    }
}
