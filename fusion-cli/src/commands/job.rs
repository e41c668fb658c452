//! Job command handlers
//!
//! Handles submitting, watching and inspecting fusion jobs.

use anyhow::{Context, Result};
use colored::*;
use fusion_core::domain::classify::{Outcome, classify, extract_artifacts};
use fusion_core::domain::status::StatusSnapshot;
use fusion_runner::{Config, JobLifecycle, PollReport};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::Output;
use crate::config::JobArgs;
use crate::exit::ExitStatus;

/// Submit a job and poll it to a terminal outcome
pub async fn run_job(config: &Config, job: JobArgs, output: Output) -> Result<ExitStatus> {
    let lifecycle = JobLifecycle::from_config(config)?;
    let run_tag = format!("run:{}", Uuid::new_v4());
    info!("Starting smoke run ({})", run_tag);

    let report = lifecycle.run(job.into_params(Some(run_tag))).await?;

    print_report(&report, output)?;
    Ok(ExitStatus::from(&report.outcome))
}

/// Submit a job and print its id
pub async fn submit_job(config: &Config, job: JobArgs, output: Output) -> Result<ExitStatus> {
    let lifecycle = JobLifecycle::from_config(config)?;
    let submitted = lifecycle.submitter().submit(job.into_params(None)).await?;

    match output {
        Output::Json => print_json(&submitted)?,
        Output::Text => {
            println!("{} Submitted job {}", "✓".green(), submitted.id.cyan());
        }
    }

    Ok(ExitStatus::Success)
}

/// Poll an existing job to a terminal outcome
pub async fn watch_job(config: &Config, job_id: &str, output: Output) -> Result<ExitStatus> {
    let lifecycle = JobLifecycle::from_config(config)?;
    let report = lifecycle.poller().poll(job_id).await;

    print_report(&report, output)?;
    Ok(ExitStatus::from(&report.outcome))
}

/// Read and print one status snapshot
pub async fn show_status(config: &Config, job_id: &str, output: Output) -> Result<ExitStatus> {
    let client = config.provider_client()?;
    let snapshot = client
        .get_status(job_id)
        .await
        .with_context(|| format!("Failed to read status of job {}", job_id))?;

    match output {
        Output::Json => print_json(&snapshot)?,
        Output::Text => print_snapshot(job_id, &snapshot),
    }

    Ok(ExitStatus::Success)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_report(report: &PollReport, output: Output) -> Result<()> {
    match output {
        Output::Json => print_json(report),
        Output::Text => {
            print_report_text(report);
            Ok(())
        }
    }
}

/// Print a terminal report
fn print_report_text(report: &PollReport) {
    println!("{}", "Job Report:".bold());
    println!("  Job ID:      {}", report.job_id.cyan());
    if let Some(provider_id) = &report.provider_job_id {
        println!("  Provider ID: {}", provider_id.dimmed());
    }
    println!("  Outcome:     {}", colorize_outcome(&report.outcome));
    println!(
        "  Last status: {}",
        report.last_status.as_deref().unwrap_or("-")
    );
    if !report.status_history.is_empty() {
        println!(
            "  History:     {}",
            report.status_history.join(" → ").dimmed()
        );
    }
    println!(
        "  Polls:       {} ({} failed)",
        report.polls, report.transient_errors
    );
    println!(
        "  Started:     {}",
        report.started_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!("  Elapsed:     {:.1}s", report.elapsed_ms as f64 / 1000.0);

    println!("\n{}", "Artifacts:".bold());
    print_artifact("video", report.artifacts.video_url.as_deref());
    print_artifact("share_url", report.artifacts.share_url.as_deref());

    if let Outcome::Failed {
        error_code,
        error_message,
    } = &report.outcome
    {
        println!("\n{}", "Error:".bold());
        println!("  Code:    {}", display_or_dash(error_code).red());
        println!("  Message: {}", display_or_dash(error_message).red());
    }

    if let Some(error) = &report.last_error {
        println!("\n{}", "Last transient error:".bold());
        println!("  {}", error.yellow());
    }
}

/// Print one status snapshot with its classification
fn print_snapshot(job_id: &str, snapshot: &StatusSnapshot) {
    let artifacts = extract_artifacts(snapshot);
    let outcome = classify(snapshot, &artifacts);

    println!("{}", format!("Status of job {}:", job_id).bold());
    println!("  Status:   {}", display_or_dash(&snapshot.status));
    println!("  Outcome:  {}", colorize_outcome(&outcome));
    if let Some(provider_id) = &snapshot.provider_job_id {
        println!("  Provider: {}", provider_id.dimmed());
    }

    if snapshot.artifacts.is_empty() {
        println!("  {}", "No artifacts yet.".yellow());
    } else {
        println!("\n{}", "Artifacts:".bold());
        for artifact in &snapshot.artifacts {
            println!("  {} {} {}", "▸".cyan(), artifact.kind, artifact.url.dimmed());
        }
    }

    if snapshot.error_code.is_some() || snapshot.error_message.is_some() {
        println!("\n{}", "Error:".bold());
        println!(
            "  Code:    {}",
            snapshot.error_code.as_deref().unwrap_or("-").red()
        );
        println!(
            "  Message: {}",
            snapshot.error_message.as_deref().unwrap_or("-").red()
        );
    }
}

fn print_artifact(kind: &str, url: Option<&str>) {
    match url {
        Some(url) => println!("  {} {:<10} {}", "✓".green(), kind, url),
        None => println!("  {} {:<10} {}", "✗".red(), kind, "missing".dimmed()),
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// Colorize an outcome for display
fn colorize_outcome(outcome: &Outcome) -> ColoredString {
    let label = outcome.label();
    match outcome {
        Outcome::Success { .. } => label.green(),
        Outcome::Failed { .. } => label.red(),
        Outcome::TimedOut => label.red(),
        Outcome::Pending => label.yellow(),
    }
}
