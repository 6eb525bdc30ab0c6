//! Website resource handler
//!
//! `website://<domain>` reads return the registry record merged with a
//! fresh check of that website.

use llmstxt_core::{WebsiteChecker, WebsiteRegistry, host_of};
use rmcp::model::{AnnotateAble, RawResource, Resource};
use serde_json::Value;

use crate::error::{McpError, McpResult};

/// URI scheme prefix for website resources
pub const WEBSITE_URI_PREFIX: &str = "website://";

/// MIME type of every website resource
pub const WEBSITE_MIME_TYPE: &str = "application/json";

/// One resource per known website.
pub fn list_website_resources(registry: &WebsiteRegistry) -> Vec<Resource> {
    registry
        .all()
        .iter()
        .map(|website| {
            let mut raw = RawResource::new(
                format!("{WEBSITE_URI_PREFIX}{}", website.domain),
                website.name.clone(),
            );
            raw.description = Some(website.description.clone());
            raw.mime_type = Some(WEBSITE_MIME_TYPE.to_string());
            raw.no_annotation()
        })
        .collect()
}

/// Parse a website resource URI and extract the lowercased hostname
///
/// Accepts both `website://example.com` and the listed form
/// `website://https://example.com`.
pub fn parse_website_uri(uri: &str) -> McpResult<String> {
    let Some(domain) = uri.strip_prefix(WEBSITE_URI_PREFIX) else {
        return Err(McpError::InvalidParams(format!(
            "Invalid website resource URI: {uri}"
        )));
    };

    host_of(domain)
        .filter(|host| !host.is_empty())
        .ok_or_else(|| McpError::InvalidParams(format!("Invalid website resource URI: {uri}")))
}

/// Handle website resource read request
///
/// Looks the host up in the registry, checks the website's recorded domain
/// and returns the record with the check result fields layered on top.
#[tracing::instrument(skip(registry, checker))]
pub async fn handle_website_resource(
    uri: &str,
    registry: &WebsiteRegistry,
    checker: &WebsiteChecker,
) -> McpResult<Value> {
    tracing::debug!(uri = %uri, "reading website resource");

    let host = parse_website_uri(uri)?;
    let website = registry
        .find_by_host(&host)
        .ok_or_else(|| McpError::WebsiteNotFound(host.clone()))?;

    let result = checker.check(&website.domain).await;

    let mut payload = serde_json::to_value(website)?;
    if let (Value::Object(merged), Value::Object(checked)) =
        (&mut payload, serde_json::to_value(&result)?)
    {
        merged.extend(checked);
    }

    tracing::debug!(
        host = %host,
        has_llms_txt = result.has_llms_txt,
        "website resource read"
    );
    Ok(payload)
}
