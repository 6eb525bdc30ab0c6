//! # llmstxt-core
//!
//! Core functionality for llms-txt-explorer: discovering whether a website
//! publishes `llms.txt` / `llms-full.txt` and resolving the `@` references
//! inside it.
//!
//! ## Architecture
//!
//! - **Check engine**: [`WebsiteChecker`] runs the bounded fetch pipeline and
//!   caches successful results for the life of the process
//! - **Registry**: [`WebsiteRegistry`] holds the list of known websites,
//!   fetched once from a remote JSON index with a built-in fallback
//! - **Configuration**: timeouts, limits and the index URL
//! - **Error Handling**: error types with categorization and recovery hints
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use llmstxt_core::{Config, WebsiteChecker};
//!
//! # async fn run() -> llmstxt_core::Result<()> {
//! let checker = WebsiteChecker::from_config(&Config::default())?;
//! let result = checker.check("supabase.com").await;
//!
//! if result.has_llms_txt {
//!     println!("llms.txt at {:?}", result.llms_txt_url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Timeouts
//!
//! A check never takes longer than the global budget (15s by default).
//! Inside it each fetch gets 5s and the linked-content batch gets 10s. When
//! a budget expires the pending requests are dropped, not left running.

/// Process-lifetime cache of check results
pub mod cache;
/// Website check engine
pub mod checker;
/// Configuration loading and defaults
pub mod config;
/// Absolute deadlines for nested timeouts
pub mod deadline;
/// Error types and result aliases
pub mod error;
/// Extraction of `@` references from `llms.txt`
pub mod extract;
/// Bounded HTTP fetching
pub mod fetcher;
/// Known websites index
pub mod registry;
/// Check result types
pub mod types;

pub use cache::ResultCache;
pub use checker::{
    GLOBAL_TIMEOUT_MESSAGE, LINKED_TIMEOUT_MESSAGE, WebsiteChecker, normalize_origin,
};
pub use config::{CheckConfig, Config, DEFAULT_REGISTRY_URL, HttpConfig, RegistryConfig};
pub use deadline::Deadline;
pub use error::{Error, Result};
pub use extract::extract_linked_urls;
pub use fetcher::{Fetched, Fetcher};
pub use registry::{Website, WebsiteRegistry, host_of};
pub use types::{LinkedContent, WebsiteCheckResult};
