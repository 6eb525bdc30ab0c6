//! Process-lifetime cache of successful check results.
//!
//! Keys are the exact input strings passed to the checker, before any
//! normalization: `example.com` and `https://example.com` are different
//! entries. There is no eviction and no TTL. Concurrent misses for the same
//! key each run the full pipeline; the last writer wins.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::WebsiteCheckResult;

/// Shared map from raw input to its successful check result.
#[derive(Debug, Clone, Default)]
pub struct ResultCache {
    entries: Arc<RwLock<HashMap<String, WebsiteCheckResult>>>,
}

impl ResultCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result for `key`, if any.
    pub async fn get(&self, key: &str) -> Option<WebsiteCheckResult> {
        let read_lock = self.entries.read().await;
        read_lock.get(key).cloned()
    }

    /// Store `result` under `key`.
    ///
    /// Results carrying an `error` are refused so failures are always retried
    /// fresh. Returns whether the result was stored.
    pub async fn insert(&self, key: &str, result: &WebsiteCheckResult) -> bool {
        if !result.is_success() {
            tracing::debug!(key, "not caching failed result");
            return false;
        }
        let mut write_lock = self.entries.write().await;
        write_lock.insert(key.to_string(), result.clone());
        true
    }

    /// Number of cached results.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether nothing has been cached yet.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn found() -> WebsiteCheckResult {
        WebsiteCheckResult {
            has_llms_txt: true,
            llms_txt_url: Some("https://example.com/llms.txt".to_string()),
            llms_txt_content: Some("# Example".to_string()),
            ..WebsiteCheckResult::default()
        }
    }

    #[tokio::test]
    async fn test_cache_miss_returns_none() {
        let cache = ResultCache::new();
        assert!(cache.get("example.com").await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_insert_then_hit() {
        let cache = ResultCache::new();
        assert!(cache.insert("example.com", &found()).await);

        assert_eq!(cache.get("example.com").await, Some(found()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_keys_are_not_normalized() {
        let cache = ResultCache::new();
        cache.insert("example.com", &found()).await;

        assert!(cache.get("https://example.com").await.is_none());
        assert!(cache.get("EXAMPLE.COM").await.is_none());
    }

    #[tokio::test]
    async fn test_failed_results_are_refused() {
        let cache = ResultCache::new();
        let stored = cache
            .insert("example.com", &WebsiteCheckResult::failed("Global timeout exceeded"))
            .await;

        assert!(!stored);
        assert!(cache.get("example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = ResultCache::new();
        let other = cache.clone();

        let handle = tokio::spawn(async move { other.insert("example.com", &found()).await });
        assert!(handle.await.unwrap());

        assert_eq!(cache.get("example.com").await, Some(found()));
    }
}
