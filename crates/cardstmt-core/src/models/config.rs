//! Configuration structures for the statement parsing pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Characters of statement text kept in `raw_text_snippet` by default.
pub const DEFAULT_SNIPPET_CHARS: usize = 800;

/// Main configuration for the cardstmt pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardstmtConfig {
    /// Issuer detection configuration.
    pub detection: DetectionConfig,

    /// Result output configuration.
    pub output: OutputConfig,

    /// PDF text handling configuration.
    pub pdf: PdfConfig,
}

/// Issuer detection tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Number of leading lines searched for a statement header.
    pub scan_lines: usize,

    /// Maximum distance (in characters) between a card-network name and
    /// the word "card" for the network to count as an issuer mention.
    pub network_card_window: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            scan_lines: 15,
            network_card_window: 20,
        }
    }
}

/// Extraction result output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Number of characters of statement text kept in `raw_text_snippet`.
    pub snippet_chars: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            snippet_chars: DEFAULT_SNIPPET_CHARS,
        }
    }
}

/// PDF text handling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Clean up spacing artifacts in text extracted from PDFs.
    pub normalize_text: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            normalize_text: true,
        }
    }
}

impl CardstmtConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
