//! MCP tools for llms-txt-explorer

pub mod check_website;
pub mod list_websites;

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;

use crate::error::{McpError, McpResult};

pub use check_website::{CHECK_WEBSITE, CheckWebsiteParams, handle_check_website};
pub use list_websites::{LIST_WEBSITES, ListWebsitesParams, handle_list_websites};

/// Every tool the server advertises, in listing order.
pub fn tool_definitions() -> McpResult<Vec<Tool>> {
    Ok(vec![
        Tool::new(
            CHECK_WEBSITE,
            "Check if a website has llms.txt or llms-full.txt files",
            input_schema::<CheckWebsiteParams>()?,
        ),
        Tool::new(
            LIST_WEBSITES,
            "List known websites with llms.txt files",
            input_schema::<ListWebsitesParams>()?,
        ),
    ])
}

/// JSON schema for a tool's parameter struct as an MCP input schema object.
fn input_schema<T: JsonSchema>() -> McpResult<Arc<JsonObject>> {
    let schema = serde_json::to_value(schemars::schema_for!(T))?;
    match schema {
        serde_json::Value::Object(map) => Ok(Arc::new(map)),
        other => Err(McpError::Internal(format!(
            "tool schema is not an object: {other}"
        ))),
    }
}
