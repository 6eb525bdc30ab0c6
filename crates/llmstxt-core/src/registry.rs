use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

use crate::{Deadline, Error, Fetcher, Result};

/// A known website that publishes (or is expected to publish) `llms.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    /// Display name.
    pub name: String,
    /// Usually a full origin such as `https://supabase.com`.
    pub domain: String,
    /// Short description shown in listings.
    pub description: String,
    /// Recorded `llms.txt` location, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llms_txt_url: Option<String>,
    /// Recorded `llms-full.txt` location, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llms_full_txt_url: Option<String>,
    /// Free-form grouping such as `developer-tools`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Icon URL or path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

impl Website {
    /// Lowercased hostname of `domain`, which may omit its scheme.
    pub fn host(&self) -> Option<String> {
        host_of(&self.domain)
    }

    /// Whether a non-empty `llmsTxtUrl` is recorded.
    pub fn has_llms_txt(&self) -> bool {
        self.llms_txt_url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Whether a non-empty `llmsFullTxtUrl` is recorded.
    pub fn has_llms_full_txt(&self) -> bool {
        self.llms_full_txt_url
            .as_deref()
            .is_some_and(|u| !u.is_empty())
    }
}

const REQUIRED_FIELDS: [&str; 3] = ["name", "domain", "description"];
const OPTIONAL_FIELDS: [&str; 4] = ["llmsTxtUrl", "llmsFullTxtUrl", "category", "favicon"];

/// Whether a raw index entry has the expected shape.
///
/// Required fields must be strings. Optional fields must be strings or
/// absent; an explicit `null` is rejected.
fn is_valid_entry(entry: &Value) -> bool {
    let Value::Object(fields) = entry else {
        return false;
    };
    REQUIRED_FIELDS
        .iter()
        .all(|key| fields.get(*key).is_some_and(Value::is_string))
        && OPTIONAL_FIELDS
            .iter()
            .all(|key| fields.get(*key).is_none_or(Value::is_string))
}

/// Hostname of a domain or URL string, prefixing `https://` when needed.
pub fn host_of(domain: &str) -> Option<String> {
    let trimmed = domain.trim();
    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    Url::parse(&candidate)
        .ok()
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
}

/// Known websites, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebsiteRegistry {
    websites: Vec<Website>,
}

impl WebsiteRegistry {
    /// Wrap an already-validated list.
    pub const fn new(websites: Vec<Website>) -> Self {
        Self { websites }
    }

    /// The single entry used when the remote index is unavailable.
    pub fn fallback() -> Self {
        Self::new(vec![Website {
            name: "Supabase".to_string(),
            domain: "https://supabase.com".to_string(),
            description: "Build production-grade applications with Postgres".to_string(),
            llms_txt_url: Some("https://supabase.com/llms.txt".to_string()),
            llms_full_txt_url: None,
            category: Some("developer-tools".to_string()),
            favicon: None,
        }])
    }

    /// Parse a JSON array of websites, skipping entries that fail validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not JSON or not an array.
    pub fn from_json(content: &str) -> Result<Self> {
        let data: Value = serde_json::from_str(content)?;
        let Value::Array(entries) = data else {
            return Err(Error::Registry(
                "Invalid data format: expected an array".to_string(),
            ));
        };

        let total = entries.len();
        let websites: Vec<Website> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                if !is_valid_entry(&entry) {
                    warn!(index, "skipping invalid website entry");
                    return None;
                }
                match serde_json::from_value::<Website>(entry) {
                    Ok(website) => Some(website),
                    Err(e) => {
                        warn!(index, error = %e, "skipping invalid website entry");
                        None
                    },
                }
            })
            .collect();

        info!(valid = websites.len(), total, "parsed websites list");
        Ok(Self::new(websites))
    }

    /// Fetch and parse the index at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, timeout, non-success status or
    /// an invalid document.
    #[tracing::instrument(skip(fetcher))]
    pub async fn fetch(fetcher: &Fetcher, url: &str, deadline: Deadline) -> Result<Self> {
        info!("fetching websites list");
        let fetched = fetcher.fetch_until(url, deadline).await?;
        let body = match fetched.body {
            Some(body) if fetched.status.is_success() => body,
            _ => {
                return Err(Error::Registry(format!(
                    "Failed to fetch websites list: {}",
                    fetched.status.as_u16()
                )));
            },
        };
        Self::from_json(&body)
    }

    /// Fetch the index, falling back to [`WebsiteRegistry::fallback`] on any error.
    pub async fn load(fetcher: &Fetcher, url: &str, deadline: Deadline) -> Self {
        match Self::fetch(fetcher, url, deadline).await {
            Ok(registry) => registry,
            Err(e) => {
                warn!(error = %e, category = e.category(), "error fetching websites list, using fallback");
                Self::fallback()
            },
        }
    }

    /// Every website, in index order.
    pub fn all(&self) -> &[Website] {
        &self.websites
    }

    /// Number of websites.
    pub fn len(&self) -> usize {
        self.websites.len()
    }

    /// Whether no websites are known.
    pub fn is_empty(&self) -> bool {
        self.websites.is_empty()
    }

    /// Websites that record the requested discovery URLs.
    pub fn filter(&self, require_llms_txt: bool, require_llms_full_txt: bool) -> Vec<&Website> {
        self.websites
            .iter()
            .filter(|site| !require_llms_txt || site.has_llms_txt())
            .filter(|site| !require_llms_full_txt || site.has_llms_full_txt())
            .collect()
    }

    /// First website whose `domain` resolves to `host`, ignoring case.
    pub fn find_by_host(&self, host: &str) -> Option<&Website> {
        let wanted = host.trim().to_ascii_lowercase();
        self.websites
            .iter()
            .find(|site| site.host().as_deref() == Some(wanted.as_str()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::HttpConfig;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE: &str = r#"[
        {
            "name": "Supabase",
            "domain": "https://supabase.com",
            "description": "Postgres development platform",
            "llmsTxtUrl": "https://supabase.com/llms.txt",
            "category": "developer-tools"
        },
        {
            "name": "Anthropic",
            "domain": "https://docs.anthropic.com",
            "description": "Claude docs",
            "llmsTxtUrl": "https://docs.anthropic.com/llms.txt",
            "llmsFullTxtUrl": "https://docs.anthropic.com/llms-full.txt"
        },
        {
            "name": "Bare",
            "domain": "bare.dev",
            "description": "No discovery urls recorded",
            "llmsTxtUrl": ""
        },
        { "name": "Missing description", "domain": "https://x.com" },
        { "name": "Bad type", "domain": "https://y.com", "description": "d", "favicon": 7 },
        "not an object"
    ]"#;

    fn registry() -> WebsiteRegistry {
        WebsiteRegistry::from_json(SAMPLE).unwrap()
    }

    fn fetcher() -> Fetcher {
        Fetcher::new(&HttpConfig::default()).unwrap()
    }

    #[test]
    fn test_from_json_skips_invalid_entries() {
        let registry = registry();
        let names: Vec<_> = registry.all().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Supabase", "Anthropic", "Bare"]);
    }

    #[test]
    fn test_from_json_skips_null_optional_fields() {
        let registry = WebsiteRegistry::from_json(
            r#"[
                {"name": "N", "domain": "https://n.dev", "description": "d", "llmsFullTxtUrl": null},
                {"name": "C", "domain": "https://c.dev", "description": "d", "category": null},
                {"name": "Ok", "domain": "https://ok.dev", "description": "d", "favicon": "/f.ico"}
            ]"#,
        )
        .unwrap();

        let names: Vec<_> = registry.all().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Ok"]);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        match WebsiteRegistry::from_json(r#"{"websites": []}"#) {
            Err(Error::Registry(msg)) => assert_eq!(msg, "Invalid data format: expected an array"),
            other => panic!("Expected registry error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        let result = WebsiteRegistry::from_json("[{");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_filter_by_recorded_urls() {
        let registry = registry();

        assert_eq!(registry.filter(false, false).len(), 3);

        let with_llms: Vec<_> = registry.filter(true, false).iter().map(|w| w.name.clone()).collect();
        assert_eq!(with_llms, vec!["Supabase", "Anthropic"]);

        let with_full: Vec<_> = registry.filter(false, true).iter().map(|w| w.name.clone()).collect();
        assert_eq!(with_full, vec!["Anthropic"]);

        assert_eq!(registry.filter(true, true).len(), 1);
    }

    #[test]
    fn test_find_by_host() {
        let registry = registry();

        assert_eq!(registry.find_by_host("supabase.com").unwrap().name, "Supabase");
        assert_eq!(registry.find_by_host("DOCS.Anthropic.com").unwrap().name, "Anthropic");
        assert_eq!(registry.find_by_host("bare.dev").unwrap().name, "Bare");
        assert!(registry.find_by_host("unknown.org").is_none());
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let value = serde_json::to_value(&WebsiteRegistry::fallback().all()[0]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Supabase",
                "domain": "https://supabase.com",
                "description": "Build production-grade applications with Postgres",
                "llmsTxtUrl": "https://supabase.com/llms.txt",
                "category": "developer-tools"
            })
        );
    }

    #[tokio::test]
    async fn test_load_from_remote_index() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/websites.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/websites.json", mock_server.uri());
        let registry =
            WebsiteRegistry::load(&fetcher(), &url, Deadline::after(Duration::from_secs(5))).await;

        assert_eq!(registry.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_reports_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/websites.json"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let url = format!("{}/websites.json", mock_server.uri());
        let result =
            WebsiteRegistry::fetch(&fetcher(), &url, Deadline::after(Duration::from_secs(5))).await;

        match result {
            Err(Error::Registry(msg)) => assert_eq!(msg, "Failed to fetch websites list: 503"),
            other => panic!("Expected registry error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_falls_back_on_error_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = format!("{}/websites.json", mock_server.uri());
        let registry =
            WebsiteRegistry::load(&fetcher(), &url, Deadline::after(Duration::from_secs(5))).await;

        assert_eq!(registry, WebsiteRegistry::fallback());
    }

    #[tokio::test]
    async fn test_load_falls_back_on_invalid_document() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"not": "an array"}"#))
            .mount(&mock_server)
            .await;

        let url = format!("{}/websites.json", mock_server.uri());
        let registry =
            WebsiteRegistry::load(&fetcher(), &url, Deadline::after(Duration::from_secs(5))).await;

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.all()[0].domain, "https://supabase.com");
    }

    #[tokio::test]
    async fn test_load_falls_back_on_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(SAMPLE)
                    .set_delay(Duration::from_millis(800)),
            )
            .mount(&mock_server)
            .await;

        let url = format!("{}/websites.json", mock_server.uri());
        let registry = WebsiteRegistry::load(
            &fetcher(),
            &url,
            Deadline::after(Duration::from_millis(100)),
        )
        .await;

        assert_eq!(registry, WebsiteRegistry::fallback());
    }
}
