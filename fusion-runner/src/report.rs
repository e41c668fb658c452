//! Poll report
//!
//! What the poller knows when a job reaches its terminal outcome. Carries
//! enough context to diagnose a failed or timed-out run without re-running.

use std::time::Duration;

use fusion_core::domain::classify::{ExtractedArtifacts, Outcome};
use fusion_core::domain::status::StatusSnapshot;
use serde::Serialize;

/// Terminal report for one polled job
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollReport {
    pub job_id: String,
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Last status label the provider reported
    pub last_status: Option<String>,
    /// Distinct status labels in the order they were first seen
    pub status_history: Vec<String>,
    /// Required artifacts seen so far, across all snapshots
    pub artifacts: ExtractedArtifacts,
    pub provider_job_id: Option<String>,
    /// Status calls issued, failed ones included
    pub polls: u32,
    pub transient_errors: u32,
    pub last_error: Option<String>,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub elapsed_ms: u64,
}

/// Mutable state carried between poll iterations
#[derive(Debug)]
pub(crate) struct PollTracker {
    job_id: String,
    last_status: Option<String>,
    status_history: Vec<String>,
    artifacts: ExtractedArtifacts,
    provider_job_id: Option<String>,
    polls: u32,
    transient_errors: u32,
    last_error: Option<String>,
    started_at: chrono::DateTime<chrono::Utc>,
}

impl PollTracker {
    pub(crate) fn new(job_id: &str) -> Self {
        Self {
            job_id: job_id.to_string(),
            last_status: None,
            status_history: Vec::new(),
            artifacts: ExtractedArtifacts::default(),
            provider_job_id: None,
            polls: 0,
            transient_errors: 0,
            last_error: None,
            started_at: chrono::Utc::now(),
        }
    }

    pub(crate) fn record_call(&mut self) {
        self.polls += 1;
    }

    pub(crate) fn record_error(&mut self, error: String) {
        self.transient_errors += 1;
        self.last_error = Some(error);
    }

    /// Records a snapshot, returning the previous label when the label changed
    pub(crate) fn observe(
        &mut self,
        snapshot: &StatusSnapshot,
        artifacts: &ExtractedArtifacts,
    ) -> Option<Option<String>> {
        if self.artifacts.video_url.is_none() {
            self.artifacts.video_url = artifacts.video_url.clone();
        }
        if self.artifacts.share_url.is_none() {
            self.artifacts.share_url = artifacts.share_url.clone();
        }
        if snapshot.provider_job_id.is_some() {
            self.provider_job_id = snapshot.provider_job_id.clone();
        }

        if self.last_status.as_deref() == Some(snapshot.status.as_str()) {
            return None;
        }

        if !self.status_history.contains(&snapshot.status) {
            self.status_history.push(snapshot.status.clone());
        }
        Some(self.last_status.replace(snapshot.status.clone()))
    }

    pub(crate) fn polls(&self) -> u32 {
        self.polls
    }

    pub(crate) fn finish(self, outcome: Outcome, elapsed: Duration) -> PollReport {
        PollReport {
            job_id: self.job_id,
            outcome,
            last_status: self.last_status,
            status_history: self.status_history,
            artifacts: self.artifacts,
            provider_job_id: self.provider_job_id,
            polls: self.polls,
            transient_errors: self.transient_errors,
            last_error: self.last_error,
            started_at: self.started_at,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
