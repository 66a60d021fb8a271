//! enginecalc - Main entry point
//!
//! Prompts on stdin, prints the report on stdout. Logs go to stderr.

use std::io;

use anyhow::{Context, Result};
use enginecalc::cli::Cli;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Initialize the logger with appropriate settings
fn init_logger() {
    // RUST_LOG overrides the default; stdout stays reserved for the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse_args();
    debug!(?cli, "CLI arguments parsed");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    enginecalc::run(stdin, stdout, cli.format)
        .inspect_err(|e| error!("session aborted: {}", e))
        .context("Engine calculation did not complete")?;

    Ok(())
}
