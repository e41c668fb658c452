//! Job poller
//!
//! Polls the provider for a job's status until the job resolves.
//!
//! One status call is in flight at a time. The deadline is fixed when the
//! loop starts and is the only way the loop ends without a terminal signal.
//! Failed status calls count as transient and are retried on the next tick.

use std::sync::Arc;

use fusion_core::domain::classify::{Outcome, classify, extract_artifacts};
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use crate::report::{PollReport, PollTracker};
use crate::repository::JobRepository;
use crate::scheduler::PollPolicy;

/// Job poller that reads status until a terminal outcome
pub struct JobPoller {
    repository: Arc<dyn JobRepository>,
    policy: PollPolicy,
}

impl JobPoller {
    /// Creates a new job poller
    pub fn new(repository: Arc<dyn JobRepository>, policy: PollPolicy) -> Self {
        Self { repository, policy }
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Polls `job_id` until success, failure or the deadline
    ///
    /// The returned report's outcome is never `Pending`.
    pub async fn poll(&self, job_id: &str) -> PollReport {
        let started = Instant::now();
        let deadline = self.policy.deadline_from(started);
        let mut tracker = PollTracker::new(job_id);

        info!(
            "Polling job {} (interval: {:?}, max wait: {:?})",
            job_id,
            self.policy.interval(),
            self.policy.max_wait()
        );

        loop {
            if Instant::now() >= deadline {
                warn!(
                    "Job {} timed out after {} status call(s)",
                    job_id,
                    tracker.polls()
                );
                return tracker.finish(Outcome::TimedOut, started.elapsed());
            }

            tracker.record_call();

            match self.repository.fetch_status(job_id).await {
                Ok(snapshot) => {
                    let artifacts = extract_artifacts(&snapshot);
                    let outcome = classify(&snapshot, &artifacts);

                    let changed = tracker.observe(&snapshot, &artifacts);

                    if outcome.is_terminal() {
                        info!("Job {} resolved: {}", job_id, outcome.label());
                        return tracker.finish(outcome, started.elapsed());
                    }

                    if let Some(previous) = changed {
                        info!(
                            job_id,
                            previous = previous.as_deref().unwrap_or("-"),
                            status = %snapshot.status,
                            "Job status changed"
                        );
                    }

                    debug!(
                        "Job {} still pending (status: {:?})",
                        job_id, snapshot.status
                    );
                }
                Err(e) => {
                    warn!(
                        "Status read for job {} failed (attempt {}, {}): {}",
                        job_id,
                        tracker.polls(),
                        e.kind(),
                        e
                    );
                    tracker.record_error(format!("{}: {}", e.kind(), e));
                }
            }

            let delay = self.policy.next_delay(Instant::now(), deadline);
            time::sleep(delay).await;
        }
    }
}
