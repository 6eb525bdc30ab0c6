//! List command implementation

use anyhow::Result;
use clap::Args;
use llmstxt_core::{Config, Fetcher};

/// Arguments for `llms-txt-explorer list`
#[derive(Args, Clone, Debug)]
pub struct ListArgs {
    /// Only websites that record an llms.txt URL
    #[arg(long)]
    pub llms_txt: bool,

    /// Only websites that record an llms-full.txt URL
    #[arg(long)]
    pub llms_full_txt: bool,
}

/// Execute the list command, printing the filtered websites as a JSON array
pub async fn execute(args: &ListArgs, config: &Config) -> Result<()> {
    let fetcher = Fetcher::new(&config.http)?;
    let registry = super::load_registry(&fetcher, config).await;
    let websites = registry.filter(args.llms_txt, args.llms_full_txt);
    tracing::debug!(total = registry.len(), returned = websites.len(), "listing websites");
    println!("{}", serde_json::to_string_pretty(&websites)?);
    Ok(())
}
