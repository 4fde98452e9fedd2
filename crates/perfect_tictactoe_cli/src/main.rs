//! perfect_tictactoe - console driver binary.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use perfect_tictactoe_cli::{Cli, PlayConfig, run};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load(cli.config.as_deref())?;

    initialize_tracing(config.log_filter());
    info!(command = ?cli.command, "Starting perfect_tictactoe");
    debug!(?config, "Configuration resolved");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run(cli.command, config, stdin.lock(), &mut stdout)
}

/// Logs to stderr so the board output on stdout stays clean.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
