//! Configuration loading and management for summa-braille.
//!
//! Loads settings from `summa-braille.toml` with an environment variable
//! override for the service endpoint. Every setting has a default, so the
//! client runs without any config file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Name of the config file looked up in the working directory and home
pub const CONFIG_FILE_NAME: &str = "summa-braille.toml";

/// Environment variable that replaces `service.endpoint`
pub const ENDPOINT_ENV: &str = "SUMMA_BRAILLE_ENDPOINT";

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/summarize";

/// `{query}` is replaced by the percent-encoded key entity
pub const DEFAULT_SEARCH_URL: &str = "https://news.google.com/search?q={query}";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Summarization service settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Full URL the article URL is posted to
    pub endpoint: String,
    /// Request timeout in seconds; unset leaves the transport default
    pub timeout_secs: Option<u64>,
}

/// Outbound link settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LinkConfig {
    /// Search URL template used for the key entity link
    pub search_url: String,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub links: LinkConfig,
}

impl Config {
    /// Load configuration from the default locations, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::read(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::read(path)?;
        config.apply_env();
        Ok(config)
    }

    /// Load from `path` if given, else from the default locations, then let
    /// `endpoint` replace whatever the file and environment set
    pub fn resolve(path: Option<&Path>, endpoint: Option<String>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        if let Some(endpoint) = endpoint {
            config.service.endpoint = endpoint;
        }
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(toml::from_str(&content)?)
    }

    fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                self.service.endpoint = endpoint;
            }
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::home_dir()
            .map(|home| {
                home.join(".config")
                    .join("summa-braille")
                    .join(CONFIG_FILE_NAME)
            })
            .filter(|path| path.exists())
    }

    /// The configured timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.service.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
        }
    }
}
