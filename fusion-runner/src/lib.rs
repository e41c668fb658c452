//! Fusion Runner
//!
//! Drives a fusion job from submission to a terminal outcome.
//!
//! Architecture:
//! - Configuration: explicit settings built once at process start
//! - Repository: the provider seam (HTTP in production, stubs in tests)
//! - Service: job submission and the submit-then-poll lifecycle
//! - Scheduler: the status poller and its retry policy
//!
//! The poller is level-triggered on artifact presence: a job is done when
//! every required artifact is attached, whatever its status label says.

pub mod config;
pub mod report;
pub mod repository;
pub mod scheduler;
pub mod service;

pub use config::Config;
pub use report::PollReport;
pub use repository::{HttpJobRepository, JobRepository};
pub use scheduler::{JobPoller, PollPolicy};
pub use service::{JobLifecycle, JobSubmitter, SubmitError};

#[cfg(test)]
pub(crate) mod testing;
