//! `check_website` tool: run the check engine against one domain or URL

use llmstxt_core::WebsiteChecker;
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::McpResult;

/// Tool name
pub const CHECK_WEBSITE: &str = "check_website";

/// Parameters for check_website tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckWebsiteParams {
    /// Website URL to check
    pub url: String,
}

impl CheckWebsiteParams {
    /// Read `url` from raw tool arguments; a missing or non-string value reads as empty.
    pub fn from_arguments(arguments: Option<&JsonObject>) -> Self {
        let url = arguments
            .and_then(|args| args.get("url"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self { url }
    }
}

/// Handle check_website tool
///
/// An empty `url` yields `{"error": "URL is required"}` rather than a
/// protocol error. Anything else is passed to the engine as-is, which
/// reports its own failures inside the result.
#[tracing::instrument(skip(checker))]
pub async fn handle_check_website(
    params: CheckWebsiteParams,
    checker: &WebsiteChecker,
) -> McpResult<Value> {
    if params.url.is_empty() {
        tracing::debug!("check_website called without url");
        return Ok(json!({ "error": "URL is required" }));
    }

    let result = checker.check(&params.url).await;
    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use llmstxt_core::Config;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn checker() -> WebsiteChecker {
        WebsiteChecker::from_config(&Config::default()).expect("checker builds")
    }

    #[test]
    fn test_from_arguments() {
        let mut args = JsonObject::new();
        args.insert("url".to_string(), json!("example.com"));
        assert_eq!(CheckWebsiteParams::from_arguments(Some(&args)).url, "example.com");

        args.insert("url".to_string(), json!(42));
        assert_eq!(CheckWebsiteParams::from_arguments(Some(&args)).url, "");

        assert_eq!(CheckWebsiteParams::from_arguments(None).url, "");
    }

    #[tokio::test]
    async fn test_missing_url_is_reported_in_payload() {
        let output = handle_check_website(CheckWebsiteParams::default(), &checker())
            .await
            .unwrap();
        assert_eq!(output, json!({ "error": "URL is required" }));
    }

    #[tokio::test]
    async fn test_check_returns_engine_result() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/llms.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# Docs"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let params = CheckWebsiteParams {
            url: mock_server.uri(),
        };
        let output = handle_check_website(params, &checker()).await.unwrap();

        assert_eq!(output["hasLlmsTxt"], true);
        assert_eq!(output["hasLlmsFullTxt"], false);
        assert_eq!(output["llmsTxtContent"], "# Docs");
        assert!(output.get("error").is_none());
    }

    #[tokio::test]
    async fn test_invalid_url_is_reported_in_payload() {
        let params = CheckWebsiteParams {
            url: "http://".to_string(),
        };
        let output = handle_check_website(params, &checker()).await.unwrap();
        assert_eq!(output["error"], "Invalid URL format: http://");
    }
}
