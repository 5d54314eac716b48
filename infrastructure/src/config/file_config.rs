//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://circleci.com/graphql-unstable";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("api.endpoint must be an http(s) URL, got '{0}'")]
    InvalidEndpoint(String),

    #[error("http.timeout_seconds cannot be 0")]
    InvalidTimeout,
}

/// Raw API configuration from TOML (`[api]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// GraphQL endpoint address
    pub endpoint: String,
    /// API token sent in the `Authorization` header
    pub token: Option<String>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
        }
    }
}

/// Raw HTTP configuration from TOML (`[http]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    /// Request timeout in seconds; no timeout when unset
    pub timeout_seconds: Option<u64>,
}

impl FileHttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api: FileApiConfig,
    pub http: FileHttpConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Check the values that would otherwise only fail at request time.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let endpoint = self.api.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigValidationError::InvalidEndpoint(endpoint.to_string()));
        }
        if self.http.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }
}
