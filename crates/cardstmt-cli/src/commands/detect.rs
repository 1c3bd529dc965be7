//! Detect command - report which bank issued a statement.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use cardstmt_core::statement::extractor_set_for;
use cardstmt_core::StatementRouter;

use super::{load_config, read_statement_text};

/// Arguments for the detect command.
#[derive(Args)]
pub struct DetectArgs {
    /// Input file (statement PDF or extracted text)
    #[arg(required = true)]
    input: PathBuf,
}

pub async fn run(args: DetectArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let router = StatementRouter::with_config(config);
    let text = read_statement_text(&router, &args.input)?;

    match router.detect(&text) {
        Some(issuer) => {
            info!("Detected issuer for {}: {}", args.input.display(), issuer);
            if extractor_set_for(issuer).is_some() {
                println!("{}", issuer);
            } else {
                println!("{} {}", issuer, style("(no extractor set)").yellow());
            }
        }
        None => println!("unrecognized"),
    }

    Ok(())
}
