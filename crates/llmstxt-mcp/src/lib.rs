//! llms-txt-explorer MCP Server
//!
//! An MCP (Model Context Protocol) server over stdio that lets clients check
//! websites for `llms.txt` / `llms-full.txt` and browse the known-websites
//! index.
//!
//! ## Tools
//!
//! - `check_website` (`url`): run the check engine and return its result
//! - `list_websites` (`filter_llms_txt`, `filter_llms_full_txt`): known websites
//!
//! ## Resources
//!
//! - `website://<domain>`: the registry record merged with a fresh check
//!
//! The server never installs a tracing subscriber; stdout carries the
//! protocol, so callers should log to stderr.

pub mod error;
pub mod resources;
pub mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use server::{McpServer, SERVER_NAME};

use llmstxt_core::{WebsiteChecker, WebsiteRegistry};

/// Main entry point for the MCP server
///
/// Builds a server around an already-loaded registry and serves it over
/// stdio until the client disconnects.
///
/// # Errors
///
/// Returns an error if the transport fails to initialize or run.
pub async fn serve_stdio(checker: WebsiteChecker, registry: WebsiteRegistry) -> McpResult<()> {
    tracing::debug!("initializing llms-txt-explorer MCP server");

    let server = McpServer::new(checker, registry);
    server.serve_stdio().await
}
