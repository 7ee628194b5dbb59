//! vidmeta - video discovery and metadata aggregation CLI
//!
//! Scans a folder (or inspects a single file) for supported video
//! containers, confirming ambiguous extensions by signature sniffing,
//! extracts per-file metadata via ffprobe, and prints per-file records
//! plus folder totals.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vidmeta::presentation;
use vidmeta::services::{
    Aggregator, CandidateResolver, FfprobeExtractor, FolderScanner, InferClassifier,
    MetadataExtractor,
};
use vidmeta::types::AggregateOutcome;
use vidmeta::RunMode;

/// Command-line arguments for vidmeta
#[derive(Parser, Debug)]
#[command(name = "vidmeta")]
#[command(about = "Discover video files and aggregate their metadata")]
#[command(version)]
struct Args {
    /// Inspect a single media file
    #[arg(short = 'f', long, env = "VIDMETA_FILE_PATH", value_name = "PATH")]
    file_path: Option<std::path::PathBuf>,

    /// Scan a folder tree and aggregate results
    #[arg(short = 'd', long, env = "VIDMETA_FOLDER_PATH", value_name = "PATH")]
    folder_path: Option<std::path::PathBuf>,

    /// Print records and totals as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidmeta=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // Usage errors exit 1 before any scanning happens
    let mode = vidmeta::resolve_mode(args.file_path, args.folder_path)?;

    match mode {
        RunMode::File(path) => run_file(&path, args.json),
        RunMode::Folder(path) => run_folder(&path, args.json),
    }
}

fn run_file(path: &Path, json: bool) -> Result<()> {
    let resolver = CandidateResolver::new(InferClassifier::new());
    let decision = resolver
        .resolve(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    if !decision.accepted {
        bail!(
            "not a supported media file: {} ({:?})",
            decision.path.display(),
            decision.reason
        );
    }

    match FfprobeExtractor::new().extract(&decision.path) {
        Ok(record) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", presentation::render_record(&record));
            }
        }
        // Per-file extraction failure is reported, not fatal
        Err(e) => {
            tracing::warn!(path = %decision.path.display(), "extraction failed: {}", e);
            println!("Could not extract metadata from {}", decision.path.display());
        }
    }

    Ok(())
}

fn run_folder(root: &Path, json: bool) -> Result<()> {
    let scanner = FolderScanner::new(InferClassifier::new());
    let paths = scanner.scan(root)?;
    tracing::info!("{} media files accepted under {}", paths.len(), root.display());

    let aggregator = Aggregator::new(FfprobeExtractor::new());
    let outcome = aggregator.aggregate(&paths);

    if json {
        match &outcome {
            AggregateOutcome::Empty { .. } => println!("[]"),
            AggregateOutcome::Summary { summary, .. } => {
                println!("{}", serde_json::to_string_pretty(summary)?);
            }
        }
    } else {
        println!("{}", presentation::render_outcome(&outcome));
    }

    Ok(())
}
