//! Credit-card statement field extraction module.

mod detector;
pub mod issuers;
mod router;
pub mod rules;

pub use detector::{detect_issuer, IssuerDetector};
pub use issuers::{extractor_set_for, find_extractor_set, EXTRACTOR_SETS};
pub use router::StatementRouter;

use rust_decimal::Decimal;

use crate::models::issuer::Issuer;
use crate::models::result::{ExtractionResult, Field, FieldValue};

/// One field of an issuer's output and the function that extracts it.
#[derive(Clone, Copy)]
pub enum FieldSpec {
    /// Field whose value is copied from the statement text.
    Text(&'static str, fn(&str) -> Option<String>),
    /// Field whose value is parsed as an amount.
    Amount(&'static str, fn(&str) -> Option<Decimal>),
}

impl FieldSpec {
    /// Output name of the field.
    pub fn name(&self) -> &'static str {
        match *self {
            FieldSpec::Text(name, _) | FieldSpec::Amount(name, _) => name,
        }
    }

    /// Run the extractor against the text.
    pub fn extract(&self, text: &str) -> Field {
        let value = match *self {
            FieldSpec::Text(_, extract) => extract(text).map(FieldValue::Text),
            FieldSpec::Amount(_, extract) => extract(text).map(FieldValue::Amount),
        };
        Field {
            name: self.name(),
            value,
        }
    }
}

/// The fields one issuer's statements are parsed into.
///
/// Sets are stateless and registered in a static table; see
/// [`issuers::EXTRACTOR_SETS`].
pub struct ExtractorSet {
    pub issuer: Issuer,
    /// Lower-case key matched as a substring of the issuer name when routing.
    pub route_key: &'static str,
    /// Extractors in output order.
    pub fields: &'static [FieldSpec],
}

impl ExtractorSet {
    /// Run every field extractor over the text.
    pub fn extract(&self, text: &str, snippet_chars: usize) -> ExtractionResult {
        let fields = self.fields.iter().map(|spec| spec.extract(text)).collect();
        ExtractionResult::new(self.issuer, fields, text, snippet_chars)
    }

    /// Field names in output order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(FieldSpec::name).collect()
    }
}
