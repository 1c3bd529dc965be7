//! Rule-based building blocks for statement field extraction.
//!
//! Every field is extracted by an ordered list of [`Candidate`] matchers,
//! most bank-specific first. The first candidate that produces a value
//! wins and the rest are never tried.

pub mod amounts;
pub mod card_type;
pub mod dates;
pub mod last4;
pub mod patterns;

pub use amounts::{parse_rupee_amount, AmountAfterLabel};
pub use card_type::normalize_network;
pub use dates::DateTokens;
pub use last4::last_standalone_four;

use regex::Regex;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.extract(text).into_iter().collect()
    }
}

/// One alternative in a field's fallback chain.
#[derive(Clone, Copy)]
pub enum Candidate<'a> {
    /// Capture group `n` of the first match, trimmed. Blank captures do not count.
    Capture(&'a Regex, usize),
    /// Capture group 1 of the last match in the text.
    LastCapture(&'a Regex),
    /// Capture groups 1 and 2 of the first match joined by a separator.
    Range(&'a Regex, &'static str),
    /// Trailing four digits of the first match (masked card numbers).
    Tail(&'a Regex),
    /// Capture group 1 of the first match, normalized as a card network name.
    Network(&'a Regex),
    /// A fixed value, returned when the pattern matches anywhere.
    Literal(&'a Regex, &'static str),
    /// Hand-written matcher for layouts regexes cannot express.
    Custom(fn(&str) -> Option<String>),
}

impl Candidate<'_> {
    /// Try this alternative against the text.
    pub fn apply(&self, text: &str) -> Option<String> {
        match *self {
            Candidate::Capture(re, group) => re
                .captures(text)
                .and_then(|caps| caps.get(group))
                .map(|m| m.as_str().trim().to_string())
                .filter(|s| !s.is_empty()),
            Candidate::LastCapture(re) => re
                .captures_iter(text)
                .last()
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string()),
            Candidate::Range(re, separator) => re
                .captures(text)
                .map(|caps| format!("{}{}{}", caps[1].trim(), separator, caps[2].trim())),
            Candidate::Tail(re) => re.find(text).and_then(|m| last_four_digits(m.as_str())),
            Candidate::Network(re) => re.captures(text).map(|caps| normalize_network(&caps[1])),
            Candidate::Literal(re, value) => re.is_match(text).then(|| value.to_string()),
            Candidate::Custom(matcher) => matcher(text),
        }
    }
}

/// Run candidates in order and return the first value produced.
pub fn first_match(text: &str, candidates: &[Candidate<'_>]) -> Option<String> {
    candidates.iter().find_map(|candidate| candidate.apply(text))
}

/// Last four characters of `s` if they are all ASCII digits.
pub(crate) fn last_four_digits(s: &str) -> Option<String> {
    let tail = s.get(s.len().checked_sub(4)?..)?;
    tail.bytes()
        .all(|b| b.is_ascii_digit())
        .then(|| tail.to_string())
}
