//! Runner configuration
//!
//! Defines the provider connection settings and the polling budget. A
//! `Config` is built once at process start and handed to the submitter and
//! poller; nothing reads the environment after that.

use std::time::Duration;

use fusion_client::{DEFAULT_CREATE_PATH, DEFAULT_STATUS_PATH, ProviderClient};

use crate::scheduler::PollPolicy;

/// Runner configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Path of the job creation endpoint
    pub create_path: String,

    /// Path template of the job status endpoint
    pub status_path: String,

    /// Bearer token for the provider, if it needs one
    pub api_token: Option<String>,

    /// How often to read job status
    pub poll_interval: Duration,

    /// Overall time budget for a job, counted from the first status read
    pub max_wait: Duration,

    /// Timeout applied to every single HTTP call
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            create_path: DEFAULT_CREATE_PATH.to_string(),
            status_path: DEFAULT_STATUS_PATH.to_string(),
            api_token: None,
            poll_interval: Duration::from_secs(5),
            max_wait: Duration::from_secs(600), // 10 minutes
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.create_path.trim().is_empty() {
            anyhow::bail!("create_path cannot be empty");
        }

        if self.status_path.trim().is_empty() {
            anyhow::bail!("status_path cannot be empty");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.max_wait.is_zero() {
            anyhow::bail!("max_wait must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }

    /// The retry policy the poller runs under
    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy::new(self.poll_interval, self.max_wait)
    }

    /// Builds a provider client with the per-call timeout applied
    pub fn provider_client(&self) -> anyhow::Result<ProviderClient> {
        let http_client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()?;

        Ok(ProviderClient::with_client(self.base_url.clone(), http_client)
            .with_paths(&self.create_path, &self.status_path)
            .with_api_token(self.api_token.clone()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://localhost:8080".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.max_wait, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.base_url = String::new();
        assert!(config.validate().is_err());

        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://fusion.example.com".to_string();
        assert!(config.validate().is_ok());

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
        config.poll_interval = Duration::from_millis(250);

        config.max_wait = Duration::ZERO;
        assert!(config.validate().is_err());
        config.max_wait = Duration::from_secs(1);

        config.request_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_provider_client_uses_paths() {
        let mut config = Config::new("http://p/".to_string());
        config.create_path = "/v1/create".to_string();
        config.status_path = "/v1/status".to_string();

        let client = config.provider_client().unwrap();
        assert_eq!(client.create_url(), "http://p/v1/create");
        assert_eq!(client.status_url("J1"), "http://p/v1/status/J1");
    }

    #[test]
    fn test_poll_policy_from_config() {
        let policy = Config::default().poll_policy();
        assert_eq!(policy.interval(), Duration::from_secs(5));
        assert_eq!(policy.max_wait(), Duration::from_secs(600));
    }
}
