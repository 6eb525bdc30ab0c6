//! Logging initialization.
//!
//! Logs are written to stderr: stdout carries MCP frames when serving and
//! JSON when running one-shot commands.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;

/// Log level selected by the global verbosity flags.
pub const fn log_level(cli: &Cli) -> Level {
    if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    }
}

/// Initialize the logging subsystem based on CLI flags.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
