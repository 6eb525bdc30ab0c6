use serde::{Deserialize, Serialize};

/// Outcome of checking one website for `llms.txt` / `llms-full.txt`.
///
/// URL and content fields are present only when the corresponding fetch
/// returned a success status. `error` is set when the check as a whole
/// failed; such results are never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteCheckResult {
    /// `<origin>/llms.txt` answered with a success status.
    pub has_llms_txt: bool,
    /// `<origin>/llms-full.txt` answered with a success status.
    pub has_llms_full_txt: bool,
    /// URL `llms.txt` was fetched from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llms_txt_url: Option<String>,
    /// URL `llms-full.txt` was fetched from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llms_full_txt_url: Option<String>,
    /// Body of `llms.txt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llms_txt_content: Option<String>,
    /// Body of `llms-full.txt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llms_full_txt_content: Option<String>,
    /// Absent when `llms.txt` had no `@` references, never an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_contents: Option<Vec<LinkedContent>>,
    /// Why the check failed as a whole.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebsiteCheckResult {
    /// A failed check carrying only an error message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Whether the check completed without an overall error.
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// One `@` reference from `llms.txt` and what fetching it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedContent {
    /// Reference as written after the `@`.
    pub url: String,
    /// Fetched body, when the fetch succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Fetch failure, otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LinkedContent {
    /// A reference whose body was fetched.
    pub fn resolved(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: Some(content.into()),
            error: None,
        }
    }

    /// A reference that could not be fetched.
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_serializes_only_flags() {
        let value = serde_json::to_value(WebsiteCheckResult::default()).unwrap();
        assert_eq!(
            value,
            json!({ "hasLlmsTxt": false, "hasLlmsFullTxt": false })
        );
    }

    #[test]
    fn test_failed_result_shape() {
        let result = WebsiteCheckResult::failed("Global timeout exceeded");
        assert!(!result.is_success());

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "hasLlmsTxt": false,
                "hasLlmsFullTxt": false,
                "error": "Global timeout exceeded"
            })
        );
    }

    #[test]
    fn test_full_result_uses_camel_case() {
        let result = WebsiteCheckResult {
            has_llms_txt: true,
            has_llms_full_txt: true,
            llms_txt_url: Some("https://example.com/llms.txt".to_string()),
            llms_full_txt_url: Some("https://example.com/llms-full.txt".to_string()),
            llms_txt_content: Some("@https://a.com/x".to_string()),
            llms_full_txt_content: Some("full".to_string()),
            linked_contents: Some(vec![
                LinkedContent::resolved("https://a.com/x", "x body"),
                LinkedContent::failed("https://b.com/y", "Failed to fetch content: 404"),
            ]),
            error: None,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["llmsTxtUrl"], "https://example.com/llms.txt");
        assert_eq!(value["llmsFullTxtContent"], "full");
        assert_eq!(value["linkedContents"][0], json!({"url": "https://a.com/x", "content": "x body"}));
        assert_eq!(
            value["linkedContents"][1],
            json!({"url": "https://b.com/y", "error": "Failed to fetch content: 404"})
        );
        assert!(value.get("error").is_none());
    }
}
