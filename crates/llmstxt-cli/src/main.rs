//! llms-txt-explorer - check websites for llms.txt and serve results over MCP
//!
//! This is the main entry point for the command-line interface. With no
//! subcommand it serves the MCP protocol over stdio.

use anyhow::{Context, Result};
use clap::Parser;
use llmstxt_core::Config;

mod cli;
mod commands;
mod utils;

use cli::{Cli, Commands};
use utils::initialize_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let config = load_config(&cli)?;
    execute_command(&cli, &config).await
}

/// Resolve configuration: file (explicit or default location), environment,
/// then command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            config.apply_env_overrides();
            config
        },
        None => Config::load().context("loading config")?,
    };

    if let Some(url) = &cli.registry_url {
        config.registry.url.clone_from(url);
    }

    tracing::debug!(registry = %config.registry.url, "configuration resolved");
    Ok(config)
}

async fn execute_command(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        None | Some(Commands::Serve) => commands::serve::execute(config).await,
        Some(Commands::Check(args)) => commands::check::execute(args, config).await,
        Some(Commands::List(args)) => commands::list::execute(args, config).await,
    }
}
