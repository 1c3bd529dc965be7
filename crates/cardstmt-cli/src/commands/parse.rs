//! Parse command - extract fields from a single statement.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use cardstmt_core::{ParseResponse, StatementRouter};

use super::{load_config, parse_file};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (statement PDF or extracted text)
    #[arg(required = true)]
    input: PathBuf,

    /// Issuer name to use instead of detection (e.g. "HDFC Bank")
    #[arg(short, long)]
    issuer: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction confidence
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for outputs in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Parsing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Parsing statement...");

    let router = StatementRouter::with_config(config);
    let response = parse_file(&router, &args.input, args.issuer.as_deref())?;

    pb.finish_and_clear();

    let output = format_response(&response, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        println!();
        match &response {
            ParseResponse::Parsed(result) => println!(
                "{} Extraction confidence: {:.0}% ({}/{} fields)",
                style("ℹ").blue(),
                result.confidence() * 100.0,
                result.found_count(),
                result.fields().len()
            ),
            ParseResponse::Failed(failure) => println!(
                "{} {}",
                style("✗").red(),
                failure.error
            ),
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Render a response in the requested format.
pub fn format_response(response: &ParseResponse, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Csv => format_csv(response),
        OutputFormat::Text => Ok(format_text(response)),
    }
}

fn format_csv(response: &ParseResponse) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    match response {
        ParseResponse::Parsed(result) => {
            let mut header: Vec<&str> = result.fields().iter().map(|f| f.name).collect();
            header.push("confidence");
            wtr.write_record(&header)?;

            let mut row: Vec<String> = result
                .fields()
                .iter()
                .map(|f| f.value.as_ref().map(|v| v.to_string()).unwrap_or_default())
                .collect();
            row.push(format!("{:.2}", result.confidence()));
            wtr.write_record(&row)?;
        }
        ParseResponse::Failed(failure) => {
            wtr.write_record(["error", "confidence"])?;
            wtr.write_record([failure.error.as_str(), &format!("{:.2}", failure.confidence)])?;
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(response: &ParseResponse) -> String {
    let mut output = String::new();

    match response {
        ParseResponse::Parsed(result) => {
            output.push_str(&format!("Statement: {}\n\n", result.issuer()));
            for field in result.fields() {
                let value = field
                    .value
                    .as_ref()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string());
                output.push_str(&format!("  {:<26} {}\n", field.name, value));
            }
            output.push_str(&format!("\nConfidence: {:.2}\n", result.confidence()));
        }
        ParseResponse::Failed(failure) => {
            output.push_str(&format!("Error: {}\n", failure.error));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardstmt_core::RouteError;

    fn parsed() -> ParseResponse {
        let router = StatementRouter::new();
        ParseResponse::from(router.route_text("AXIS BANK\nCard 411111******1234", None))
    }

    #[test]
    fn test_csv_parsed() {
        let csv = format_response(&parsed(), OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("issuer,card_last4,card_type,billing_period,payment_due_date,confidence")
        );
        assert_eq!(lines.next(), Some("Axis Bank,1234,,,,0.40"));
    }

    #[test]
    fn test_csv_failed() {
        let response = ParseResponse::from(Err::<cardstmt_core::ExtractionResult, _>(
            RouteError::UnsupportedIssuer("Chase".to_string()),
        ));
        let csv = format_response(&response, OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["error,confidence", "Issuer 'Chase' not supported yet.,0.00"]);
    }

    #[test]
    fn test_text_marks_missing_fields() {
        let text = format_response(&parsed(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Statement: Axis Bank\n"));
        assert!(text.contains("card_last4"));
        assert!(text.contains("Confidence: 0.40"));
    }
}
