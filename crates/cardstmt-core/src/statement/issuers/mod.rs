//! Per-issuer extractor sets.
//!
//! Each issuer lays its statements out differently, so every set keeps its
//! own patterns even where they look alike.

pub mod axis;
pub mod hdfc;
pub mod icici;
pub mod kotak;

use super::ExtractorSet;
use crate::models::issuer::Issuer;

/// Registered extractor sets, in routing order.
pub static EXTRACTOR_SETS: [&ExtractorSet; 4] = [&axis::AXIS, &icici::ICICI, &kotak::KOTAK, &hdfc::HDFC];

/// First set whose routing key occurs in the (case-insensitive) issuer name.
pub fn find_extractor_set(name: &str) -> Option<&'static ExtractorSet> {
    let lower = name.to_lowercase();
    EXTRACTOR_SETS
        .iter()
        .copied()
        .find(|set| lower.contains(set.route_key))
}

/// The set registered for an issuer, if any.
pub fn extractor_set_for(issuer: Issuer) -> Option<&'static ExtractorSet> {
    EXTRACTOR_SETS.iter().copied().find(|set| set.issuer == issuer)
}
