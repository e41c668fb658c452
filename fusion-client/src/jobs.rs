//! Job-related API endpoints

use crate::ProviderClient;
use crate::error::{ClientError, Result};
use fusion_core::domain::status::StatusSnapshot;
use fusion_core::dto::job::{CreateJobBody, job_id_from_response};
use tracing::debug;

impl ProviderClient {
    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Create a fusion job
    ///
    /// # Arguments
    /// * `body` - The creation request body
    ///
    /// # Returns
    /// The provider-assigned job id, read from `job_id` or `id`
    pub async fn create_job(&self, body: &CreateJobBody) -> Result<String> {
        let url = self.create_url();
        debug!("POST {}", url);

        let response = self
            .authorized(self.client.post(&url))
            .json(body)
            .send()
            .await?;

        let value: serde_json::Value = self.handle_response(response).await?;

        job_id_from_response(&value).ok_or_else(|| ClientError::MissingJobId(value.to_string()))
    }

    /// Read the current status of a job
    ///
    /// # Arguments
    /// * `job_id` - The provider-assigned job id
    pub async fn get_status(&self, job_id: &str) -> Result<StatusSnapshot> {
        let url = self.status_url(job_id);
        debug!("GET {}", url);

        let response = self.authorized(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }
}
