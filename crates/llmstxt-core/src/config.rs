//! Configuration for the check engine, HTTP client and website registry.
//!
//! Configuration is stored in TOML. Every field has a default, so a partial
//! file (or no file at all) is valid.
//!
//! ## Resolution order
//!
//! 1. `LLMSTXT_CONFIG` - explicit path to a config file
//! 2. `LLMSTXT_CONFIG_DIR` - directory containing `config.toml`
//! 3. Platform config directory (`~/.config/explorer/config.toml` on Linux)
//!
//! `LLMSTXT_REGISTRY_URL` overrides `registry.url` after the file is loaded.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [http]
//! user_agent = "llms-txt-explorer/0.1.0"
//! fetch_timeout_ms = 5000
//!
//! [check]
//! linked_batch_timeout_ms = 10000
//! global_timeout_ms = 15000
//! max_linked = 3
//!
//! [registry]
//! url = "https://raw.githubusercontent.com/thedaviddias/llms-txt-hub/main/data/websites.json"
//! timeout_ms = 30000
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default location of the known-websites index.
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/thedaviddias/llms-txt-hub/main/data/websites.json";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP client settings.
    pub http: HttpConfig,
    /// Check engine time budgets and limits.
    pub check: CheckConfig,
    /// Known-websites index settings.
    pub registry: RegistryConfig,
}

/// HTTP client settings shared by every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Upper bound for a single fetch, headers and body included.
    pub fetch_timeout_ms: u64,
}

/// Time budgets and fan-out limits for a website check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Ceiling for the whole linked-content batch.
    pub linked_batch_timeout_ms: u64,
    /// Ceiling for an entire check, from validation to the secondary fetch.
    pub global_timeout_ms: u64,
    /// Maximum number of `@` references resolved per `llms.txt`.
    pub max_linked: usize,
}

/// Where the known-websites index comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// URL of the JSON array of websites.
    pub url: String,
    /// Upper bound for fetching the index at startup.
    pub timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("llms-txt-explorer/", env!("CARGO_PKG_VERSION")).to_string(),
            fetch_timeout_ms: 5_000,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            linked_batch_timeout_ms: 10_000,
            global_timeout_ms: 15_000,
            max_linked: 3,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REGISTRY_URL.to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl HttpConfig {
    /// Per-fetch budget as a [`Duration`].
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl CheckConfig {
    /// Linked-content batch budget as a [`Duration`].
    pub const fn linked_batch_timeout(&self) -> Duration {
        Duration::from_millis(self.linked_batch_timeout_ms)
    }

    /// Whole-check budget as a [`Duration`].
    pub const fn global_timeout(&self) -> Duration {
        Duration::from_millis(self.global_timeout_ms)
    }
}

impl RegistryConfig {
    /// Index fetch budget as a [`Duration`].
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Config {
    /// Load configuration from the resolved location, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML for this schema.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Apply `LLMSTXT_*` environment overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("LLMSTXT_REGISTRY_URL") {
            if !url.trim().is_empty() {
                self.registry.url = url;
            }
        }
    }

    /// Path the config file is read from, if one can be determined.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(file) = std::env::var("LLMSTXT_CONFIG") {
            if !file.trim().is_empty() {
                return Some(PathBuf::from(file));
            }
        }

        if let Ok(dir) = std::env::var("LLMSTXT_CONFIG_DIR") {
            if !dir.trim().is_empty() {
                return Some(PathBuf::from(dir).join(CONFIG_FILE_NAME));
            }
        }

        directories::ProjectDirs::from("dev", "llmstxt", "explorer")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
