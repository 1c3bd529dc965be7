//! `cardstmt`: pull card and billing details out of bank card statements.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, config, detect, parse};

/// Read Axis, HDFC, ICICI and Kotak card statements (PDF or extracted text)
/// and report the issuer, card last 4, network, billing period and due dates
#[derive(Parser)]
#[command(name = "cardstmt", version, about, long_about = None)]
struct Cli {
    /// Log detection and extraction steps to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file with detection and output settings (default: user config dir)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the issuer's fields from one statement
    Parse(parse::ParseArgs),

    /// Print which bank issued a statement
    Detect(detect::DetectArgs),

    /// Extract fields from every statement matching a glob
    Batch(batch::BatchArgs),

    /// Show or edit the config file
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries results, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Parse(args) => parse::run(args, config_path).await,
        Commands::Detect(args) => detect::run(args, config_path).await,
        Commands::Batch(args) => batch::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path).await,
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
