//! Error types for llmstxt-core operations.
//!
//! Errors are categorized so callers can log and branch on them without
//! matching every variant:
//!
//! - **Network Errors**: HTTP requests, connectivity issues
//! - **Timeouts**: per-fetch, linked-batch, and global budgets
//! - **URL Errors**: inputs that do not normalize to an origin
//! - **Registry Errors**: the known-websites index could not be loaded
//! - **Configuration Errors**: invalid or unreadable config files
//!
//! The check engine never surfaces these as `Err` to its callers. It renders
//! them into the `error` fields of [`WebsiteCheckResult`](crate::WebsiteCheckResult)
//! and [`LinkedContent`](crate::LinkedContent).

use thiserror::Error;

/// The main error type for llmstxt-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed (reading config files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed.
    ///
    /// DNS failures, refused connections, TLS errors and malformed responses
    /// all land here. The underlying `reqwest::Error` is preserved.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status where content was required.
    #[error("Failed to fetch content: {status}")]
    HttpStatus {
        /// URL that was requested.
        url: String,
        /// Status code returned by the server.
        status: u16,
    },

    /// Input could not be normalized into an `http(s)` origin.
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    /// An operation exceeded its time budget.
    ///
    /// The message is user-facing and ends up verbatim in check results.
    #[error("{0}")]
    Timeout(String),

    /// The known-websites index could not be fetched or parsed.
    #[error("{0}")]
    Registry(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl Error {
    /// Check if the error might succeed on a later attempt.
    ///
    /// The engine itself never retries (first failure is final for a call),
    /// but failed checks are not cached, so a recoverable failure is worth
    /// reporting differently to a caller that may ask again.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout(_) => true,
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier for structured logging.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::HttpStatus { .. } => "http_status",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Timeout(_) => "timeout",
            Self::Registry(_) => "registry",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
