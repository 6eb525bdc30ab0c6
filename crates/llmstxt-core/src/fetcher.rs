use crate::{Deadline, Error, HttpConfig, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// HTTP client for bounded GET requests against discovery files.
///
/// One `Fetcher` is shared by every check so connections are pooled.
/// Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    fetch_timeout: Duration,
}

/// Response of a bounded fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// URL that was requested.
    pub url: String,
    /// Status returned by the server.
    pub status: StatusCode,
    /// Body text, read only when `status` is a success.
    pub body: Option<String>,
}

impl Fetched {
    /// Whether the server answered with a 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl Fetcher {
    /// Creates a fetcher from HTTP settings.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self {
            client,
            fetch_timeout: config.fetch_timeout(),
        })
    }

    /// Default per-fetch budget.
    pub const fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// GET `url`, bounded by the per-fetch budget and an enclosing deadline.
    ///
    /// Headers and body are both read under the same deadline. When it passes
    /// the request future is dropped, which closes the connection. A
    /// non-success status is not an error here; the body is just not read.
    pub async fn fetch(&self, url: &str, within: Deadline) -> Result<Fetched> {
        self.fetch_until(url, within.tighten(self.fetch_timeout)).await
    }

    /// GET `url` bounded only by `deadline`, ignoring the per-fetch budget.
    ///
    /// Used for long-lived loads such as the website index.
    pub async fn fetch_until(&self, url: &str, deadline: Deadline) -> Result<Fetched> {
        let budget = deadline.remaining();
        debug!(url, budget_ms = budget.as_millis(), "fetching");

        let started = Instant::now();
        let request = async {
            let response = self.client.get(url).send().await?;
            let status = response.status();
            let body = if status.is_success() {
                Some(response.text().await?)
            } else {
                None
            };
            Ok::<_, Error>(Fetched {
                url: url.to_string(),
                status,
                body,
            })
        };

        match tokio::time::timeout_at(deadline.instant(), request).await {
            Ok(Ok(fetched)) => {
                debug!(
                    url,
                    status = fetched.status.as_u16(),
                    elapsed_ms = started.elapsed().as_millis(),
                    "fetch completed"
                );
                Ok(fetched)
            },
            Ok(Err(e)) => {
                debug!(url, error = %e, "fetch error");
                Err(e)
            },
            Err(_) => {
                debug!(url, budget_ms = budget.as_millis(), "fetch timed out");
                Err(Error::Timeout(format!(
                    "Timeout after {}ms for {url}",
                    budget.as_millis()
                )))
            },
        }
    }

    /// GET `url` and return its body, treating a non-success status as an error.
    pub async fn fetch_text(&self, url: &str, within: Deadline) -> Result<String> {
        let fetched = self.fetch(url, within).await?;
        match fetched.body {
            Some(body) if fetched.status.is_success() => Ok(body),
            _ => Err(Error::HttpStatus {
                url: fetched.url,
                status: fetched.status.as_u16(),
            }),
        }
    }
}
