//! Client configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded once and validated before the first request is sent.

use std::env;
use std::sync::LazyLock;
use std::time::Duration;

use validator::Validate;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RUST_LOG, DEFAULT_TOTAL_PROBLEMS,
};

/// Global client configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main client configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub profile: ProfileConfig,
    pub rust_log: String,
}

/// Judge API configuration
#[derive(Debug, Clone, Validate)]
pub struct ApiConfig {
    /// Base URL, without a trailing slash
    #[validate(url)]
    pub base_url: String,
    pub request_timeout_secs: u64,
}

/// Profile statistics configuration
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    /// Number of problems the solved count is compared against
    pub total_problems: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api: ApiConfig::from_env()?,
            profile: ProfileConfig::from_env()?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.to_string()),
        })
    }
}

impl ApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            env::var("JUDGE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let config = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout_secs: env::var("JUDGE_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_REQUEST_TIMEOUT_SECS".to_string()))?,
        };

        config
            .validate()
            .map_err(|_| ConfigError::InvalidValue("JUDGE_API_BASE_URL".to_string()))?;

        Ok(config)
    }

    /// Create a configuration pointing at an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl ProfileConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            total_problems: env::var("JUDGE_TOTAL_PROBLEMS")
                .unwrap_or_else(|_| DEFAULT_TOTAL_PROBLEMS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_TOTAL_PROBLEMS".to_string()))?,
        })
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            total_problems: DEFAULT_TOTAL_PROBLEMS,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
