//! Fusion HTTP Client
//!
//! A small, type-safe HTTP client for the fusion provider's public job API.
//!
//! Only two endpoints are consumed: job creation and job status. Paths are
//! configurable because providers mount the API at different prefixes.
//!
//! # Example
//!
//! ```no_run
//! use fusion_client::ProviderClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ProviderClient::new("http://localhost:8080");
//!
//!     let snapshot = client.get_status("J1").await?;
//!     println!("Job J1 is {}", snapshot.status);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Default path of the job creation endpoint
pub const DEFAULT_CREATE_PATH: &str = "/api/fusion/jobs";

/// Default path template of the job status endpoint
pub const DEFAULT_STATUS_PATH: &str = "/api/fusion/jobs/{job_id}";

/// Placeholder substituted with the job id in status path templates
pub const JOB_ID_PLACEHOLDER: &str = "{job_id}";

/// HTTP client for the fusion provider API
#[derive(Debug, Clone)]
pub struct ProviderClient {
    /// Base URL of the provider (e.g., "http://localhost:8080")
    base_url: String,
    /// Path of the creation endpoint
    create_path: String,
    /// Path template of the status endpoint
    status_path: String,
    /// Bearer token sent with every request, if any
    api_token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl ProviderClient {
    /// Create a new provider client with default paths
    ///
    /// # Example
    /// ```
    /// use fusion_client::ProviderClient;
    ///
    /// let client = ProviderClient::new("http://localhost:8080/");
    /// assert_eq!(client.base_url(), "http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new provider client with a custom HTTP client
    ///
    /// Use this to set the per-call timeout, proxies or TLS settings.
    ///
    /// # Example
    /// ```
    /// use fusion_client::ProviderClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ProviderClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            create_path: DEFAULT_CREATE_PATH.to_string(),
            status_path: DEFAULT_STATUS_PATH.to_string(),
            api_token: None,
            client,
        }
    }

    /// Override the creation path and status path template
    ///
    /// A status template containing `{job_id}` gets the id substituted;
    /// otherwise the id is appended as a final path segment.
    pub fn with_paths(mut self, create_path: &str, status_path: &str) -> Self {
        self.create_path = normalize_path(create_path);
        self.status_path = normalize_path(status_path);
        self
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn with_api_token(mut self, token: Option<String>) -> Self {
        self.api_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Get the base URL of the provider
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the creation endpoint
    pub fn create_url(&self) -> String {
        format!("{}{}", self.base_url, self.create_path)
    }

    /// Full URL of the status endpoint for a job
    pub fn status_url(&self, job_id: &str) -> String {
        let encoded = urlencoding::encode(job_id);
        let path = if self.status_path.contains(JOB_ID_PLACEHOLDER) {
            self.status_path.replace(JOB_ID_PLACEHOLDER, &encoded)
        } else {
            format!("{}/{}", self.status_path.trim_end_matches('/'), encoded)
        };
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success status codes become `ApiError` carrying the response body.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
