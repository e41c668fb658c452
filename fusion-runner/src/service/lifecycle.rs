//! Job lifecycle
//!
//! Submit once, then poll the returned job to a terminal outcome.

use std::sync::Arc;

use fusion_core::domain::job::JobParams;

use crate::config::Config;
use crate::report::PollReport;
use crate::repository::{HttpJobRepository, JobRepository};
use crate::scheduler::{JobPoller, PollPolicy};
use crate::service::submitter::{JobSubmitter, SubmitError};

/// Submitter and poller sharing one provider
pub struct JobLifecycle {
    submitter: JobSubmitter,
    poller: JobPoller,
}

impl JobLifecycle {
    pub fn new(repository: Arc<dyn JobRepository>, policy: PollPolicy) -> Self {
        Self {
            submitter: JobSubmitter::new(Arc::clone(&repository)),
            poller: JobPoller::new(repository, policy),
        }
    }

    /// Wires an HTTP-backed lifecycle from a validated config
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        config.validate()?;
        let repository = Arc::new(HttpJobRepository::new(config.provider_client()?));
        Ok(Self::new(repository, config.poll_policy()))
    }

    pub fn submitter(&self) -> &JobSubmitter {
        &self.submitter
    }

    pub fn poller(&self) -> &JobPoller {
        &self.poller
    }

    /// Submits `params` and polls the new job until it resolves
    ///
    /// Only submission can fail; every polling result is a report.
    pub async fn run(&self, params: JobParams) -> Result<PollReport, SubmitError> {
        let job = self.submitter.submit(params).await?;
        Ok(self.poller.poll(&job.id).await)
    }
}
