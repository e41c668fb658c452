//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;

use anyhow::Result;
use clap::Subcommand;
use fusion_runner::Config;

use crate::config::JobArgs;
use crate::exit::ExitStatus;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a job and wait for it to resolve
    Run {
        #[command(flatten)]
        job: JobArgs,
    },
    /// Submit a job and print its id
    Submit {
        #[command(flatten)]
        job: JobArgs,
    },
    /// Read the current status of a job once
    Status {
        /// Provider job id
        job_id: String,
    },
    /// Wait for an existing job to resolve
    Watch {
        /// Provider job id
        job_id: String,
    },
}

/// Handle a CLI command
///
/// Routes the command to its handler and returns the process exit status.
/// Errors map to exit status 1 in `main`.
pub async fn handle_command(
    command: Commands,
    config: &Config,
    output: Output,
) -> Result<ExitStatus> {
    config.validate()?;

    match command {
        Commands::Run { job } => job::run_job(config, job, output).await,
        Commands::Submit { job } => job::submit_job(config, job, output).await,
        Commands::Status { job_id } => job::show_status(config, &job_id, output).await,
        Commands::Watch { job_id } => job::watch_job(config, &job_id, output).await,
    }
}
