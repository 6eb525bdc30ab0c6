//! MCP (Model Context Protocol) server command
//!
//! Loads the known-websites index, then serves MCP over stdio until the
//! client disconnects.

use anyhow::Result;
use llmstxt_core::{Config, Fetcher, WebsiteChecker, WebsiteRegistry};

/// Build the checker and registry around one shared HTTP client.
pub async fn prepare(config: &Config) -> Result<(WebsiteChecker, WebsiteRegistry)> {
    let fetcher = Fetcher::new(&config.http)?;

    let registry = super::load_registry(&fetcher, config).await;
    tracing::info!(websites = registry.len(), "loaded websites list");

    let checker = WebsiteChecker::new(fetcher, config.check.clone());
    Ok((checker, registry))
}

/// Execute the serve command
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the server fails
/// to initialize or run.
pub async fn execute(config: &Config) -> Result<()> {
    let (checker, registry) = prepare(config).await?;
    llmstxt_mcp::serve_stdio(checker, registry).await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_prepare_shares_configured_client() {
        let server = MockServer::start().await;
        let index = format!(
            r#"[{{"name": "Local", "domain": "{}", "description": "d"}}]"#,
            server.uri()
        );
        Mock::given(method("GET"))
            .and(path("/websites.json"))
            .and(header("user-agent", "explorer-test/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(index))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/llms.txt"))
            .and(header("user-agent", "explorer-test/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# Local"))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = Config::default();
        config.http.user_agent = "explorer-test/1".to_string();
        config.registry.url = format!("{}/websites.json", server.uri());

        let (checker, registry) = prepare(&config).await.unwrap();
        assert_eq!(registry.all()[0].name, "Local");

        let result = checker.check(&registry.all()[0].domain).await;
        assert!(result.has_llms_txt);
    }
}
