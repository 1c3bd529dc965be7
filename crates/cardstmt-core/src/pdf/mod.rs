//! PDF processing module.

mod extractor;

pub use extractor::{PdfExtractor, PdfTextSource};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;
}

/// Converts raw document bytes into statement text.
///
/// The parsing engine only ever sees the text this returns; an empty
/// string is a valid answer and simply makes every field miss.
pub trait TextSource: Send + Sync {
    fn extract_text(&self, data: &[u8]) -> Result<String>;
}
