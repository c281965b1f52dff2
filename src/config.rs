//! Service configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Base URL of the public GitHub REST API.
const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Timeout applied to outbound GitHub calls when none is configured.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be parsed.
    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

/// Runtime configuration for the search service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the GitHub REST API, without a trailing slash.
    pub github_base_url: String,
    /// Timeout for each outbound GitHub call.
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            github_base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the environment, falling back to the public
    /// GitHub API and a 5 second timeout.
    ///
    /// Recognized variables: `GITHUB_BASE_URL` and `GITHUB_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let github_base_url =
            env::var("GITHUB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());

        let request_timeout = match env::var("GITHUB_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| ConfigError::Invalid("GITHUB_TIMEOUT_SECS", raw))?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            github_base_url,
            request_timeout,
        })
    }
}
