//! `sift` - scan a directory tree for sensitive data.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sift_core::{FileOutcome, ScanConfig};
use sift_decode::DecoderRegistry;
use sift_detect::{DetectionEngine, HeuristicNameExtractor};
use sift_scanner::{JsonProjector, ReportProjector, ScanOrchestrator};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sift", version, about = "Sensitive-data scanner for document trees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a directory tree and write a findings report
    Scan {
        /// Root directory to scan
        #[arg(long)]
        input: PathBuf,

        /// Output report file (JSON)
        #[arg(long, default_value = "./report.json")]
        output: PathBuf,

        /// Override archive nesting limit
        #[arg(long)]
        max_depth: Option<usize>,

        /// Override number of files processed concurrently
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Write a default config file for editing
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            input,
            output,
            max_depth,
            concurrency,
        } => {
            let mut config = ScanConfig::load_with_env().context("load configuration")?;
            if let Some(depth) = max_depth {
                config.max_archive_depth = depth;
            }
            if let Some(workers) = concurrency {
                config.max_concurrent_files = workers;
            }
            config.validate().context("invalid configuration")?;

            info!(?input, ?output, "starting scan");

            let engine = DetectionEngine::new(
                Arc::new(HeuristicNameExtractor),
                Duration::from_secs(config.ner_timeout_secs),
            );
            let orchestrator = ScanOrchestrator::new(
                Arc::new(DecoderRegistry::standard()),
                Arc::new(engine),
                config,
            )
            .context("construct scanner")?;

            let report = orchestrator.run(&input).await.context("scan failed")?;

            let rendered = JsonProjector::pretty()
                .project(&report)
                .context("render report")?;
            std::fs::write(&output, rendered).context("write report file")?;

            let failures = report
                .rows()
                .iter()
                .filter(|row| matches!(row.outcome, FileOutcome::Failure { .. }))
                .count();
            let findings: usize = report
                .rows()
                .iter()
                .filter_map(|row| match &row.outcome {
                    FileOutcome::Findings { matches } => Some(matches.len()),
                    FileOutcome::Failure { .. } => None,
                })
                .sum();
            info!(
                files = report.len(),
                findings, failures, "scan finished"
            );
        }
        Commands::InitConfig => {
            let path = ScanConfig::config_path().context("resolve config path")?;
            if path.exists() {
                info!("Config already exists at {}", path.display());
            } else {
                ScanConfig::default().save().context("write default config")?;
                info!("Wrote default config to {}", path.display());
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
