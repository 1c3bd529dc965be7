//! Dispatch of statement text to the right issuer's extractor set.

use tracing::{debug, info};

use super::detector::IssuerDetector;
use super::issuers::find_extractor_set;
use crate::error::RouteError;
use crate::models::config::CardstmtConfig;
use crate::models::issuer::Issuer;
use crate::models::result::{ExtractionResult, ParseResponse};
use crate::pdf::{PdfTextSource, TextSource};
use crate::text::normalize;

/// Turns statement documents into extraction results.
///
/// The router holds no per-call state and can be shared across threads.
pub struct StatementRouter<S: TextSource = PdfTextSource> {
    source: S,
    detector: IssuerDetector,
    config: CardstmtConfig,
}

impl StatementRouter<PdfTextSource> {
    /// Router over PDF documents with default settings.
    pub fn new() -> Self {
        Self::with_config(CardstmtConfig::default())
    }

    /// Router over PDF documents.
    pub fn with_config(config: CardstmtConfig) -> Self {
        Self::with_source(PdfTextSource, config)
    }
}

impl Default for StatementRouter<PdfTextSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TextSource> StatementRouter<S> {
    /// Router reading documents through a custom text source.
    pub fn with_source(source: S, config: CardstmtConfig) -> Self {
        Self {
            source,
            detector: IssuerDetector::new(&config.detection),
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &CardstmtConfig {
        &self.config
    }

    /// Detect the issuer of already-extracted text.
    pub fn detect(&self, text: &str) -> Option<Issuer> {
        self.detector.detect(text)
    }

    /// Convert document bytes to statement text.
    pub fn extract_text(&self, data: &[u8]) -> crate::Result<String> {
        let text = self.source.extract_text(data)?;
        if self.config.pdf.normalize_text {
            Ok(normalize(&text))
        } else {
            Ok(text)
        }
    }

    /// Parse already-extracted text.
    ///
    /// A non-empty `issuer_hint` is used as the issuer name and overrides
    /// detection.
    pub fn route_text(
        &self,
        text: &str,
        issuer_hint: Option<&str>,
    ) -> std::result::Result<ExtractionResult, RouteError> {
        let name = match issuer_hint.map(str::trim).filter(|h| !h.is_empty()) {
            Some(hint) => {
                debug!("Using issuer hint: {}", hint);
                hint.to_string()
            }
            None => self
                .detect(text)
                .map(|issuer| issuer.display_name().to_string())
                .ok_or(RouteError::UnresolvedIssuer)?,
        };

        let set = find_extractor_set(&name).ok_or_else(|| RouteError::UnsupportedIssuer(name.clone()))?;

        let result = set.extract(text, self.config.output.snippet_chars);
        info!(
            "Parsed {} statement: {}/{} fields, confidence {:.2}",
            set.issuer,
            result.found_count(),
            result.fields().len(),
            result.confidence()
        );
        Ok(result)
    }

    /// Parse a statement document.
    ///
    /// Routing failures come back as [`ParseResponse::Failed`]; only
    /// documents the text source cannot read at all are errors.
    pub fn route_parse(&self, data: &[u8], issuer_hint: Option<&str>) -> crate::Result<ParseResponse> {
        let text = self.extract_text(data)?;
        let response = ParseResponse::from(self.route_text(&text, issuer_hint));
        if let Some(error) = response.error() {
            info!("Statement not parsed: {}", error);
        }
        Ok(response)
    }
}
