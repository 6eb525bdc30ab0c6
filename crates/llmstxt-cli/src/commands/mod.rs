//! Command implementations

pub mod check;
pub mod list;
pub mod serve;

pub use check::CheckArgs;
pub use list::ListArgs;

use llmstxt_core::{Config, Deadline, Fetcher, WebsiteRegistry};

/// Fetch the known-websites index, falling back to the built-in entry.
pub async fn load_registry(fetcher: &Fetcher, config: &Config) -> WebsiteRegistry {
    let deadline = Deadline::after(config.registry.timeout());
    WebsiteRegistry::load(fetcher, &config.registry.url, deadline).await
}
