//! Data models shared across the pipeline.

pub mod config;
pub mod issuer;
pub mod result;

pub use config::CardstmtConfig;
pub use issuer::Issuer;
pub use result::{ExtractionResult, Field, FieldValue, ParseFailure, ParseResponse};
