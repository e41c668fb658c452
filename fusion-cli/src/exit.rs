//! Process exit codes

use std::process::ExitCode;

use fusion_core::domain::classify::Outcome;

/// Exit status of a CLI invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Both artifacts found, or the command had nothing to wait for
    Success = 0,
    /// Invalid configuration or submission failure
    Invalid = 1,
    /// Deadline passed without a terminal signal
    TimedOut = 2,
    /// Provider reported the job as failed
    JobFailed = 3,
}

impl From<&Outcome> for ExitStatus {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Success { .. } => ExitStatus::Success,
            Outcome::Failed { .. } => ExitStatus::JobFailed,
            Outcome::TimedOut | Outcome::Pending => ExitStatus::TimedOut,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
