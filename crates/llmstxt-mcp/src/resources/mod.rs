//! MCP resources for llms-txt-explorer
//!
//! Exposes every known website via the `website://<domain>` URI scheme.

pub mod websites;

pub use websites::{
    WEBSITE_URI_PREFIX, handle_website_resource, list_website_resources, parse_website_uri,
};
