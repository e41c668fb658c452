//! Job submitter
//!
//! Validates caller parameters and issues exactly one creation call.
//! Submission failures are fatal and never retried.

use std::sync::Arc;

use fusion_client::ClientError;
use fusion_core::ValidationError;
use fusion_core::domain::job::{Job, JobParams, JobRequest};
use fusion_core::dto::job::CreateJobBody;
use thiserror::Error;
use tracing::{error, info};

use crate::repository::JobRepository;

/// Why a job could not be submitted
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Parameters were rejected before any network call
    #[error("invalid job request: {0}")]
    Validation(#[from] ValidationError),

    /// The creation call failed or returned no usable job id
    #[error("job submission failed: {0}")]
    Submission(#[from] ClientError),
}

/// Submits fusion jobs to the provider
pub struct JobSubmitter {
    repository: Arc<dyn JobRepository>,
}

impl JobSubmitter {
    /// Creates a new job submitter
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    /// Validates `params` and submits the resulting request
    pub async fn submit(&self, params: JobParams) -> Result<Job, SubmitError> {
        let request = JobRequest::try_from(params)?;
        self.submit_request(&request).await
    }

    /// Submits an already validated request
    pub async fn submit_request(&self, request: &JobRequest) -> Result<Job, SubmitError> {
        let body = CreateJobBody::from(request);

        info!(
            "Submitting fusion job (voice mode: {}, tags: {:?})",
            request.voice_mode(),
            request.tags()
        );

        let job_id = self.repository.create_job(&body).await.map_err(|e| {
            error!("Job submission failed: {}", e);
            e
        })?;

        info!("Submitted job {}", job_id);
        Ok(Job::new(job_id))
    }
}
