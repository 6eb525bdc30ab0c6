//! `list_websites` tool: known websites, optionally filtered

use llmstxt_core::{Website, WebsiteRegistry};
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;


/// Tool name
pub const LIST_WEBSITES: &str = "list_websites";

/// Parameters for list_websites tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListWebsitesParams {
    /// Filter websites with llms.txt
    #[serde(default)]
    pub filter_llms_txt: bool,

    /// Filter websites with llms-full.txt
    #[serde(default)]
    pub filter_llms_full_txt: bool,
}

impl ListWebsitesParams {
    /// Read the filters from raw tool arguments without ever failing.
    ///
    /// Values are read by truthiness: `null`, `false`, `0`, `""` and absent
    /// keys disable a filter; anything else enables it.
    pub fn from_arguments(arguments: Option<&JsonObject>) -> Self {
        let flag = |key: &str| arguments.and_then(|args| args.get(key)).is_some_and(is_truthy);
        Self {
            filter_llms_txt: flag("filter_llms_txt"),
            filter_llms_full_txt: flag("filter_llms_full_txt"),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Handle list_websites tool
pub fn handle_list_websites(
    params: &ListWebsitesParams,
    registry: &WebsiteRegistry,
) -> Vec<Website> {
    let websites: Vec<Website> = registry
        .filter(params.filter_llms_txt, params.filter_llms_full_txt)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        total = registry.len(),
        returned = websites.len(),
        filter_llms_txt = params.filter_llms_txt,
        filter_llms_full_txt = params.filter_llms_full_txt,
        "listed websites"
    );
    websites
}
