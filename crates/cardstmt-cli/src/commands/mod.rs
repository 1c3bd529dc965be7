//! CLI subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod detect;
pub mod parse;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use cardstmt_core::models::config::CardstmtConfig;
use cardstmt_core::{ParseResponse, StatementRouter};

/// Kind of statement file accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Statement PDF, converted to text first.
    Pdf,
    /// Text already extracted from a statement.
    Text,
}

impl InputKind {
    /// Classify a file by extension.
    pub fn of(path: &Path) -> Option<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Some(InputKind::Pdf),
            "txt" => Some(InputKind::Text),
            _ => None,
        }
    }
}

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardstmt")
        .join("config.json")
}

/// Load the configuration named on the command line, else the default file
/// if one exists, else built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CardstmtConfig> {
    if let Some(path) = config_path {
        debug!("Loading config from {}", path);
        return Ok(CardstmtConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading config from {}", path.display());
        Ok(CardstmtConfig::from_file(&path)?)
    } else {
        Ok(CardstmtConfig::default())
    }
}

/// Statement text of a PDF or text file.
pub fn read_statement_text(router: &StatementRouter, path: &Path) -> anyhow::Result<String> {
    match InputKind::of(path) {
        Some(InputKind::Pdf) => Ok(router.extract_text(&fs::read(path)?)?),
        Some(InputKind::Text) => Ok(fs::read_to_string(path)?),
        None => anyhow::bail!("Unsupported file format: {}", path.display()),
    }
}

/// Parse a statement file.
pub fn parse_file(
    router: &StatementRouter,
    path: &Path,
    issuer_hint: Option<&str>,
) -> anyhow::Result<ParseResponse> {
    match InputKind::of(path) {
        Some(InputKind::Pdf) => Ok(router.route_parse(&fs::read(path)?, issuer_hint)?),
        Some(InputKind::Text) => {
            let text = fs::read_to_string(path)?;
            Ok(ParseResponse::from(router.route_text(&text, issuer_hint)))
        }
        None => anyhow::bail!("Unsupported file format: {}", path.display()),
    }
}
