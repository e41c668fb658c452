//! Fusion CLI
//!
//! Submits face/voice fusion jobs to a provider and waits for them to
//! resolve. Exit codes: 0 success, 1 invalid input or submission failure,
//! 2 timed out, 3 job failed.

mod commands;
mod config;
mod exit;

use std::process::ExitCode;

use clap::Parser;
use colored::*;
use commands::{Commands, Output, handle_command};
use config::ProviderArgs;
use exit::ExitStatus;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fusion")]
#[command(about = "Fusion video job smoke test", long_about = None)]
struct Cli {
    #[command(flatten)]
    provider: ProviderArgs,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "fusion_cli=info,fusion_runner=info,fusion_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.provider.to_config();
    let output = if cli.json { Output::Json } else { Output::Text };

    match handle_command(cli.command, &config, output).await {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitStatus::Invalid.into()
        }
    }
}
