//! Website check engine.
//!
//! Given a domain or URL, [`WebsiteChecker::check`] determines whether the
//! site's origin serves `llms.txt` and `llms-full.txt`, resolves up to
//! `max_linked` `@` references from `llms.txt`, and returns one
//! [`WebsiteCheckResult`]. It never returns an error: failures are reported
//! in the result's `error` field or in individual [`LinkedContent`] entries.
//!
//! ## Pipeline
//!
//! 1. Exact-string cache lookup on the raw input
//! 2. Global deadline (default 15s) covering everything below
//! 3. Normalize to an origin (`https://` is assumed when no scheme is given)
//! 4. `GET <origin>/llms.txt`; a transport failure or timeout sets `error`
//! 5. Linked references fetched concurrently under a batch deadline (10s);
//!    if the batch deadline passes, every entry becomes a timeout error
//! 6. `GET <origin>/llms-full.txt`, only after a clean primary; failures are
//!    logged and ignored
//! 7. Successful results are cached for the life of the process
//!
//! Each fetch is additionally bounded by the per-fetch budget (5s). All
//! budgets are [`Deadline`]s; expiry drops the pending futures, which aborts
//! their requests.

use std::borrow::Cow;

use futures::future::join_all;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::{
    CheckConfig, Config, Deadline, Error, Fetcher, LinkedContent, ResultCache, Result,
    WebsiteCheckResult, extract_linked_urls,
};

/// Error reported when the whole check exceeds its budget.
pub const GLOBAL_TIMEOUT_MESSAGE: &str = "Global timeout exceeded";

/// Error given to every linked entry when the batch exceeds its budget.
pub const LINKED_TIMEOUT_MESSAGE: &str = "Timeout fetching linked contents";

/// Checks websites for discovery files and caches successful results.
#[derive(Debug, Clone)]
pub struct WebsiteChecker {
    fetcher: Fetcher,
    limits: CheckConfig,
    cache: ResultCache,
}

impl WebsiteChecker {
    /// Create a checker around a shared fetcher with an empty cache.
    pub fn new(fetcher: Fetcher, limits: CheckConfig) -> Self {
        Self {
            fetcher,
            limits,
            cache: ResultCache::new(),
        }
    }

    /// Build a checker with its own HTTP client from a full [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = Fetcher::new(&config.http)?;
        Ok(Self::new(fetcher, config.check.clone()))
    }

    /// Results cached so far.
    pub const fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// HTTP client used for every fetch.
    pub const fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// Check `domain` for `llms.txt` and `llms-full.txt`.
    #[instrument(skip_all, fields(domain = %domain))]
    pub async fn check(&self, domain: &str) -> WebsiteCheckResult {
        info!("starting website check");

        if let Some(cached) = self.cache.get(domain).await {
            debug!("returning cached result");
            return cached;
        }

        let global = Deadline::after(self.limits.global_timeout());

        let origin = match normalize_origin(domain) {
            Ok(origin) => origin,
            Err(e) => {
                warn!(error = %e, "invalid URL");
                return WebsiteCheckResult::failed(e.to_string());
            },
        };
        debug!(origin = %origin, "normalized origin");

        let result =
            match tokio::time::timeout_at(global.instant(), self.run(&origin, global)).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(
                        budget_ms = self.limits.global_timeout_ms,
                        "global timeout exceeded"
                    );
                    WebsiteCheckResult::failed(GLOBAL_TIMEOUT_MESSAGE)
                },
            };

        if self.cache.insert(domain, &result).await {
            debug!("cached result");
        }

        info!(
            has_llms_txt = result.has_llms_txt,
            has_llms_full_txt = result.has_llms_full_txt,
            linked = result.linked_contents.as_ref().map_or(0, Vec::len),
            error = result.error.as_deref(),
            "website check finished"
        );
        result
    }

    async fn run(&self, origin: &str, global: Deadline) -> WebsiteCheckResult {
        let mut result = WebsiteCheckResult::default();

        let llms_txt_url = format!("{origin}/llms.txt");
        match self.fetcher.fetch(&llms_txt_url, global).await {
            Ok(fetched) if fetched.is_success() => {
                let content = fetched.body.unwrap_or_default();
                debug!(bytes = content.len(), "fetched llms.txt");

                result.has_llms_txt = true;
                result.linked_contents = self.resolve_linked(&content, global).await;
                result.llms_txt_url = Some(llms_txt_url);
                result.llms_txt_content = Some(content);
            },
            Ok(fetched) => {
                debug!(status = fetched.status.as_u16(), "no llms.txt");
            },
            Err(e) => {
                warn!(error = %e, category = e.category(), "error fetching llms.txt");
                result.error = Some(e.to_string());
            },
        }

        if result.has_llms_txt && result.error.is_none() {
            self.check_full_text(origin, global, &mut result).await;
        }

        result
    }

    /// Fetch up to `max_linked` references concurrently under the batch deadline.
    ///
    /// `None` when the body has no references. On batch timeout every entry,
    /// including ones that already completed, is replaced with a timeout error.
    async fn resolve_linked(&self, content: &str, global: Deadline) -> Option<Vec<LinkedContent>> {
        let urls: Vec<String> = extract_linked_urls(content)
            .into_iter()
            .take(self.limits.max_linked)
            .collect();
        if urls.is_empty() {
            return None;
        }
        info!(count = urls.len(), limit = self.limits.max_linked, "found linked URLs");

        let batch = global.tighten(self.limits.linked_batch_timeout());
        let fetches = urls.iter().map(|url| self.fetch_linked(url, global));
        let outcome = tokio::time::timeout_at(batch.instant(), join_all(fetches)).await;

        match outcome {
            Ok(contents) => Some(contents),
            Err(_) => {
                warn!(
                    budget_ms = self.limits.linked_batch_timeout_ms,
                    "timeout fetching linked contents"
                );
                Some(
                    urls.into_iter()
                        .map(|url| LinkedContent::failed(url, LINKED_TIMEOUT_MESSAGE))
                        .collect(),
                )
            },
        }
    }

    async fn fetch_linked(&self, url: &str, global: Deadline) -> LinkedContent {
        debug!(url, "fetching linked content");
        match self.fetcher.fetch_text(url, global).await {
            Ok(content) => {
                debug!(url, bytes = content.len(), "fetched linked content");
                LinkedContent::resolved(url, content)
            },
            Err(e) => {
                warn!(url, error = %e, "error fetching linked content");
                LinkedContent::failed(url, e.to_string())
            },
        }
    }

    async fn check_full_text(&self, origin: &str, global: Deadline, result: &mut WebsiteCheckResult) {
        let llms_full_txt_url = format!("{origin}/llms-full.txt");
        match self.fetcher.fetch(&llms_full_txt_url, global).await {
            Ok(fetched) if fetched.is_success() => {
                let content = fetched.body.unwrap_or_default();
                debug!(bytes = content.len(), "fetched llms-full.txt");
                result.has_llms_full_txt = true;
                result.llms_full_txt_url = Some(llms_full_txt_url);
                result.llms_full_txt_content = Some(content);
            },
            Ok(fetched) => {
                debug!(status = fetched.status.as_u16(), "no llms-full.txt");
            },
            Err(e) => {
                warn!(error = %e, "error fetching llms-full.txt, ignoring");
            },
        }
    }
}

/// Normalize a domain or URL to the origin discovery files are resolved against.
///
/// Inputs without an `http://` or `https://` prefix get `https://`. Path,
/// query and fragment are discarded. Control characters are rejected rather
/// than silently stripped by the URL parser.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when no `http(s)` origin with a host results.
pub fn normalize_origin(input: &str) -> Result<String> {
    let invalid = || Error::InvalidUrl(input.to_string());

    if input.chars().any(char::is_control) {
        return Err(invalid());
    }

    let candidate = if input.starts_with("http://") || input.starts_with("https://") {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!("https://{input}"))
    };

    let url = Url::parse(&candidate).map_err(|_| invalid())?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid());
    }

    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(invalid());
    }
    Ok(origin.ascii_serialization())
}
