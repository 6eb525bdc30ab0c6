//! Check command implementation
//!
//! Runs the check engine once and prints the result as pretty JSON.
//! Failures are reported in the result's `error` field, not the exit code.

use anyhow::Result;
use clap::Args;
use llmstxt_core::{Config, WebsiteChecker};

/// Arguments for `llms-txt-explorer check`
#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    /// Domain or URL to check (https:// is assumed without a scheme)
    pub url: String,
}

/// Execute the check command
pub async fn execute(args: &CheckArgs, config: &Config) -> Result<()> {
    let checker = WebsiteChecker::from_config(config)?;
    let result = checker.check(&args.url).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
