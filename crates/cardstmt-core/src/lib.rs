//! Core library for credit-card statement parsing.
//!
//! This crate provides:
//! - PDF text extraction
//! - Issuer detection from statement text
//! - Per-issuer field extraction (card last 4, card type, billing period, due date, amounts)
//! - Extraction results with a confidence score

pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;
pub mod text;

pub use error::{CardstmtError, PdfError, Result, RouteError};
pub use models::config::CardstmtConfig;
pub use models::issuer::Issuer;
pub use models::result::{ExtractionResult, Field, FieldValue, ParseFailure, ParseResponse};
pub use pdf::{PdfExtractor, PdfProcessor, PdfTextSource, TextSource};
pub use statement::{detect_issuer, ExtractorSet, FieldSpec, IssuerDetector, StatementRouter};
