//! # CLI Structure and Argument Parsing
//!
//! The CLI follows a command-subcommand pattern:
//!
//! - **Global options**: apply to all commands (`--verbose`, `--quiet`,
//!   `--config`, `--registry-url`)
//! - **Default command**: with no subcommand the MCP server is served over stdio
//! - **Subcommands**: one-shot `check` and `list` that print JSON to stdout
//!
//! ```bash
//! llms-txt-explorer                      # serve MCP over stdio
//! llms-txt-explorer check supabase.com   # check one website
//! llms-txt-explorer list --llms-full-txt # known websites with llms-full.txt
//! ```
//!
//! Logs always go to stderr so stdout stays clean for the protocol and JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{CheckArgs, ListArgs};

/// Main CLI structure for the `llms-txt-explorer` command
#[derive(Parser, Clone, Debug)]
#[command(name = "llms-txt-explorer")]
#[command(version)]
#[command(
    about = "Check websites for llms.txt and llms-full.txt, and serve the results over MCP",
    long_about = None
)]
pub struct Cli {
    /// Subcommand; serves MCP when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Path to a config file (overrides LLMSTXT_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// URL of the known-websites index (overrides config and LLMSTXT_REGISTRY_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub registry_url: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Serve the MCP protocol over stdio (default)
    Serve,

    /// Check one website for llms.txt and llms-full.txt
    Check(CheckArgs),

    /// List known websites
    List(ListArgs),
}
