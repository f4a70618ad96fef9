//! CLI for the README scraper.
//!
//! Downloads the README of every public repository of a GitHub user and
//! writes a JSON index describing what was found.

use clap::Parser;
use readme_scraper::{
    config, load_env_files, parse_delay, RunSummary, Runner, RunnerConfig, RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// README Scraper - Save the READMEs of a GitHub user's public repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub username.
    #[arg(long, default_value = config::DEFAULT_USER)]
    user: String,

    /// Output directory for README files and the index.
    #[arg(long, default_value = config::DEFAULT_OUTPUT_DIR)]
    out: PathBuf,

    /// GitHub Personal Access Token (avoids anonymous rate limits).
    #[arg(long, env = config::TOKEN_ENV, hide_env_values = true)]
    token: Option<String>,

    /// Seconds to wait before each README request.
    #[arg(long, default_value = config::DEFAULT_DELAY, value_parser = parse_delay_arg)]
    delay: Duration,
}

#[tokio::main]
async fn main() -> ExitCode {
    // `.env` values must be in the environment before tracing and clap read it
    let env_files = load_env_files();

    // Initialize tracing
    init_tracing();

    if let Err(e) = env_files {
        error!(error = %e, "Failed to load env file");
        return ExitCode::from(1);
    }

    // Pick aws-lc-rs explicitly so rustls does not have to guess
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn parse_delay_arg(value: &str) -> Result<Duration, String> {
    parse_delay(value).map_err(|e| e.to_string())
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::new(args.user, args.out, args.token, args.delay);
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Repositories found: {}", summary.repositories_found);
    println!("  READMEs saved: {}", summary.readmes_saved);
    println!("  Repositories without README: {}", summary.readmes_missing);
    println!("  Output: {}", summary.output_dir.display());
    println!("  Index:  {}", summary.index_path.display());
}
