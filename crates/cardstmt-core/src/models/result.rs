//! Extraction results and the response shape handed back to callers.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::issuer::Issuer;
use crate::error::RouteError;

/// Value of a single extracted field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text copied from the statement (dates, identifiers, names).
    Text(String),
    /// Monetary amount parsed to a number.
    Amount(Decimal),
}

impl FieldValue {
    /// The text value, if this is a text field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Amount(_) => None,
        }
    }

    /// The amount, if this is a numeric field.
    pub fn as_amount(&self) -> Option<Decimal> {
        match self {
            FieldValue::Amount(d) => Some(*d),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Amount(d) => write!(f, "{}", d),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            // Amounts go out as JSON numbers
            FieldValue::Amount(d) => match d.to_f64() {
                Some(f) => serializer.serialize_f64(f),
                None => serializer.serialize_str(&d.to_string()),
            },
        }
    }
}

/// A named field and whatever was extracted for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub value: Option<FieldValue>,
}

/// Fields extracted from one statement by one issuer's extractor set.
///
/// Built once per parse call and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    issuer: Issuer,
    fields: Vec<Field>,
    confidence: f64,
    raw_text_snippet: String,
}

impl ExtractionResult {
    /// Build a result, deriving confidence from `fields` and the snippet from `text`.
    pub fn new(issuer: Issuer, fields: Vec<Field>, text: &str, snippet_chars: usize) -> Self {
        let confidence = confidence(&fields);
        Self {
            issuer,
            fields,
            confidence,
            raw_text_snippet: snippet(text, snippet_chars),
        }
    }

    /// Issuer whose extractor set produced this result.
    pub fn issuer(&self) -> Issuer {
        self.issuer
    }

    /// All fields in output order, including misses.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.value.as_ref())
    }

    /// Look up a text field by name.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Number of fields that were found.
    pub fn found_count(&self) -> usize {
        self.fields.iter().filter(|f| f.value.is_some()).count()
    }

    /// Fraction of fields found, rounded to two decimals.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Leading slice of the statement text, kept for manual review.
    pub fn raw_text_snippet(&self) -> &str {
        &self.raw_text_snippet
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 2))?;
        for field in &self.fields {
            map.serialize_entry(field.name, &field.value)?;
        }
        map.serialize_entry("confidence", &self.confidence)?;
        map.serialize_entry("raw_text_snippet", &self.raw_text_snippet)?;
        map.end()
    }
}

/// Fraction of non-null fields, rounded to two decimals.
///
/// This is a plain ratio, not a calibrated probability.
pub fn confidence(fields: &[Field]) -> f64 {
    if fields.is_empty() {
        return 0.0;
    }
    let found = fields.iter().filter(|f| f.value.is_some()).count();
    let ratio = found as f64 / fields.len() as f64;
    (ratio * 100.0).round() / 100.0
}

/// First `max_chars` characters of `text`.
pub fn snippet(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Response for a parse request: either a result or an explanation.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ParseResponse {
    Parsed(ExtractionResult),
    Failed(ParseFailure),
}

/// Error payload returned when no extractor set could be chosen.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ParseFailure {
    pub error: String,
    pub confidence: f64,
}

impl ParseResponse {
    /// Confidence of the response; always 0 for failures.
    pub fn confidence(&self) -> f64 {
        match self {
            ParseResponse::Parsed(r) => r.confidence(),
            ParseResponse::Failed(f) => f.confidence,
        }
    }

    /// The extraction result, if parsing succeeded.
    pub fn result(&self) -> Option<&ExtractionResult> {
        match self {
            ParseResponse::Parsed(r) => Some(r),
            ParseResponse::Failed(_) => None,
        }
    }

    /// The error message, if parsing failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            ParseResponse::Parsed(_) => None,
            ParseResponse::Failed(f) => Some(&f.error),
        }
    }
}

impl From<RouteError> for ParseFailure {
    fn from(err: RouteError) -> Self {
        Self {
            error: err.to_string(),
            confidence: 0.0,
        }
    }
}

impl From<std::result::Result<ExtractionResult, RouteError>> for ParseResponse {
    fn from(result: std::result::Result<ExtractionResult, RouteError>) -> Self {
        match result {
            Ok(r) => ParseResponse::Parsed(r),
            Err(e) => ParseResponse::Failed(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn text(name: &'static str, value: Option<&str>) -> Field {
        Field {
            name,
            value: value.map(|v| FieldValue::Text(v.to_string())),
        }
    }

    #[test]
    fn test_confidence_ratio() {
        let fields = vec![
            text("a", Some("x")),
            text("b", None),
            text("c", Some("y")),
        ];
        assert_eq!(confidence(&fields), 0.67);

        let fields = vec![text("a", Some("x")), text("b", None)];
        assert_eq!(confidence(&fields), 0.5);

        assert_eq!(confidence(&[]), 0.0);
    }

    #[test]
    fn test_confidence_sevenths() {
        let mut fields: Vec<Field> = (0..5).map(|_| text("f", Some("v"))).collect();
        fields.push(text("g", None));
        fields.push(text("h", None));
        assert_eq!(confidence(&fields), 0.71);
    }

    #[test]
    fn test_snippet_counts_characters() {
        assert_eq!(snippet("₹1,000 due", 2), "₹1");
        assert_eq!(snippet("short", 800), "short");
        assert_eq!(snippet("", 800), "");
    }

    #[test]
    fn test_serialize_preserves_field_order() {
        let result = ExtractionResult::new(
            Issuer::Kotak,
            vec![
                text("issuer", Some("Kotak Mahindra Bank")),
                text("card_last4", None),
                Field {
                    name: "credit_limit",
                    value: Some(FieldValue::Amount(Decimal::from_str("150000.00").unwrap())),
                },
            ],
            "Kotak statement",
            800,
        );

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"issuer":"Kotak Mahindra Bank","card_last4":null,"credit_limit":150000.0,"confidence":0.67,"raw_text_snippet":"Kotak statement"}"#
        );
    }

    #[test]
    fn test_failure_response() {
        let response = ParseResponse::from(Err::<ExtractionResult, _>(RouteError::UnresolvedIssuer));
        assert_eq!(response.confidence(), 0.0);
        assert!(response.result().is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json["error"],
            "Unable to detect issuer. Please specify manually."
        );
        assert_eq!(json["confidence"], 0.0);
    }

    #[test]
    fn test_accessors() {
        let result = ExtractionResult::new(
            Issuer::Axis,
            vec![text("issuer", Some("Axis Bank")), text("card_type", None)],
            "",
            800,
        );
        assert_eq!(result.text("issuer"), Some("Axis Bank"));
        assert_eq!(result.get("card_type"), None);
        assert_eq!(result.found_count(), 1);
        assert_eq!(result.issuer(), Issuer::Axis);
    }
}
