//! LeaseLens command-line front end
//!
//! Uploads a commercial lease PDF to the analysis service and prints the
//! extracted terms:
//!
//! ```text
//! leaselens analyze lease.pdf
//! leaselens analyze lease.pdf --json
//! leaselens health --api-url http://localhost:8000
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use leaselens_client::{ClientConfig, HttpAnalysisService, LocalPdf};
use leaselens_core::{UploadOrchestrator, UploadStatus};

mod render;
mod reporter;

use reporter::TerminalReporter;

#[derive(Parser, Debug)]
#[command(name = "leaselens")]
#[command(version, about = "AI-powered commercial lease analysis")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload a lease PDF and print the extracted terms
    Analyze {
        /// Lease PDF to analyze (only the first is used when several are given)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Analysis service base URL (default: $LEASELENS_API_URL or http://localhost:8000)
        #[arg(long)]
        api_url: Option<String>,

        /// Print the raw analysis result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the analysis service is reachable
    Health {
        /// Analysis service base URL (default: $LEASELENS_API_URL or http://localhost:8000)
        #[arg(long)]
        api_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Logs go to stderr so `--json` output stays clean
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Command::Analyze {
            files,
            api_url,
            json,
        } => analyze(files, resolve_config(api_url)?, json).await,
        Command::Health { api_url } => health(resolve_config(api_url)?).await,
    }
}

fn resolve_config(api_url: Option<String>) -> Result<ClientConfig> {
    let config = match api_url {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    info!("Analysis service: {}", config.base_url());
    Ok(config)
}

/// Open the first path only; later paths are never touched
async fn open_candidate(files: &[PathBuf]) -> Result<Vec<LocalPdf>> {
    let Some((first, rest)) = files.split_first() else {
        return Ok(Vec::new());
    };
    if !rest.is_empty() {
        warn!(
            "{} additional file(s) ignored; only {} is analyzed",
            rest.len(),
            first.display()
        );
    }

    let file = LocalPdf::open(first)
        .await
        .with_context(|| format!("Cannot open {}", first.display()))?;
    Ok(vec![file])
}

async fn analyze(files: Vec<PathBuf>, config: ClientConfig, json: bool) -> Result<ExitCode> {
    let candidates = open_candidate(&files).await?;

    let service = HttpAnalysisService::new(config);
    let mut orchestrator = UploadOrchestrator::new(TerminalReporter::new(std::io::stderr()));
    let status = orchestrator.analyze(&service, candidates).await;

    let mut out = std::io::stdout().lock();
    let view = orchestrator.reporter().view();
    if json {
        render::render_json(&mut out, view)?;
    } else {
        writeln!(out, "{}", orchestrator.status_text().headline)?;
        if let Some(info) = orchestrator.file_info() {
            writeln!(out, "{}", info)?;
        }
        writeln!(out)?;
        render::render_view(&mut out, view)?;
    }

    let succeeded = status == UploadStatus::Success && view.has_displayable_result();
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn health(config: ClientConfig) -> Result<ExitCode> {
    let service = HttpAnalysisService::new(config);
    let health = service
        .health()
        .await
        .with_context(|| format!("Health check failed for {}", service.config().base_url()))?;

    println!("{}: {}", health.service, health.status);
    Ok(ExitCode::SUCCESS)
}
