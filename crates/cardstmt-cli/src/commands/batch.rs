//! Batch command - parse many statement files concurrently.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use cardstmt_core::{ParseResponse, StatementRouter};

use super::parse::{format_response, OutputFormat};
use super::{load_config, parse_file, InputKind};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of files parsed at once
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Issuer name applied to every file instead of detection
    #[arg(short, long)]
    issuer: Option<String>,
}

/// Outcome of parsing a single file.
struct FileOutcome {
    path: PathBuf,
    response: Option<ParseResponse>,
    error: Option<String>,
    processing_time_ms: u64,
}

impl FileOutcome {
    fn status(&self) -> &'static str {
        match &self.response {
            Some(ParseResponse::Parsed(_)) => "success",
            Some(ParseResponse::Failed(_)) => "unparsed",
            None => "error",
        }
    }

    /// Error message from either a failed read or a routing failure.
    fn error_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or_else(|| self.response.as_ref().and_then(ParseResponse::error))
    }
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| InputKind::of(p).is_some())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let router = Arc::new(StatementRouter::with_config(config));
    let hint = args.issuer.clone();

    let mut pending = stream::iter(files)
        .map(|path| {
            let router = Arc::clone(&router);
            let hint = hint.clone();
            async move {
                let file_start = Instant::now();
                let job_path = path.clone();
                let result = tokio::task::spawn_blocking(move || {
                    parse_file(&router, &job_path, hint.as_deref())
                })
                .await
                .map_err(anyhow::Error::from)
                .and_then(|r| r);

                let processing_time_ms = file_start.elapsed().as_millis() as u64;
                match result {
                    Ok(response) => FileOutcome {
                        path,
                        response: Some(response),
                        error: None,
                        processing_time_ms,
                    },
                    Err(e) => FileOutcome {
                        path,
                        response: None,
                        error: Some(e.to_string()),
                        processing_time_ms,
                    },
                }
            }
        })
        .buffer_unordered(args.jobs.max(1));

    let mut results = Vec::new();
    while let Some(outcome) = pending.next().await {
        pb.inc(1);
        if let Some(error_msg) = &outcome.error {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", outcome.path.display(), error_msg);
            } else {
                error!("Failed to process {}: {}", outcome.path.display(), error_msg);
                anyhow::bail!("Processing failed: {}", error_msg);
            }
        }
        results.push(outcome);
    }

    pb.finish_with_message("Complete");

    // Completion order is arbitrary
    results.sort_by(|a, b| a.path.cmp(&b.path));

    if let Some(output_dir) = &args.output_dir {
        for outcome in &results {
            if let Some(response) = &outcome.response {
                let output_name = outcome
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("statement");
                let output_path = output_dir.join(format!("{}.{}", output_name, args.format.extension()));

                fs::write(&output_path, format_response(response, args.format)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let parsed = results.iter().filter(|r| r.status() == "success").count();
    let failed: Vec<_> = results.iter().filter(|r| r.status() != "success").collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} parsed, {} not parsed",
        style(parsed).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Not parsed:").red());
        for outcome in &failed {
            println!(
                "  - {}: {}",
                outcome.path.display(),
                outcome.error_message().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &Path, results: &[FileOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "issuer",
        "card_last4",
        "confidence",
        "processing_time_ms",
        "error",
    ])?;

    for outcome in results {
        let filename = outcome.path.file_name().and_then(|s| s.to_str()).unwrap_or("");
        let result = outcome.response.as_ref().and_then(ParseResponse::result);
        let confidence = outcome
            .response
            .as_ref()
            .map(|r| format!("{:.2}", r.confidence()))
            .unwrap_or_default();

        wtr.write_record([
            filename,
            outcome.status(),
            &result.map(|r| r.issuer().to_string()).unwrap_or_default(),
            result.and_then(|r| r.text("card_last4")).unwrap_or(""),
            &confidence,
            &outcome.processing_time_ms.to_string(),
            outcome.error_message().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
