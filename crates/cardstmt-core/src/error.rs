//! Error types for the cardstmt-core library.

use thiserror::Error;

/// Main error type for the cardstmt library.
#[derive(Error, Debug)]
pub enum CardstmtError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Issuer could not be routed to an extractor set.
    #[error("routing error: {0}")]
    Route(#[from] RouteError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Reasons a statement could not be dispatched to an extractor set.
///
/// These are expected outcomes, not failures of the engine: the caller is
/// asked to retry with an explicit issuer hint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Neither the hint nor the detector produced an issuer.
    #[error("Unable to detect issuer. Please specify manually.")]
    UnresolvedIssuer,

    /// An issuer was resolved but no extractor set handles it.
    #[error("Issuer '{0}' not supported yet.")]
    UnsupportedIssuer(String),
}

/// Result type for the cardstmt library.
pub type Result<T> = std::result::Result<T, CardstmtError>;
