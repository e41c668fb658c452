//! Jobs repository
//!
//! Handles communication with the provider for job operations:
//! - Creating a job
//! - Reading job status

use async_trait::async_trait;
use fusion_client::{ProviderClient, Result};
use fusion_core::domain::status::StatusSnapshot;
use fusion_core::dto::job::CreateJobBody;

/// Repository trait for job operations against the provider
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Creates a job and returns the provider-assigned id
    ///
    /// # Arguments
    /// * `body` - The creation request body
    async fn create_job(&self, body: &CreateJobBody) -> Result<String>;

    /// Reads the current status of a job
    ///
    /// # Arguments
    /// * `job_id` - The provider-assigned job id
    async fn fetch_status(&self, job_id: &str) -> Result<StatusSnapshot>;
}

/// HTTP implementation of JobRepository
pub struct HttpJobRepository {
    client: ProviderClient,
}

impl HttpJobRepository {
    /// Creates a new HTTP job repository
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobRepository for HttpJobRepository {
    async fn create_job(&self, body: &CreateJobBody) -> Result<String> {
        self.client.create_job(body).await
    }

    async fn fetch_status(&self, job_id: &str) -> Result<StatusSnapshot> {
        self.client.get_status(job_id).await
    }
}
