//! pim-ingest importer - bulk product import CLI
//!
//! Reads a JSON-lines product file and runs it through the bulk ingestion
//! pipeline.

use clap::Parser;
use pim_ingest_rs::{Config, Importer, utils};
use std::path::PathBuf;
use std::process::ExitCode;

/// Bulk product importer
#[derive(Debug, Parser)]
#[command(name = "importer", version, about)]
struct Args {
    /// JSON-lines product file to import
    input: PathBuf,

    /// Configuration file
    #[arg(short, long, env = "PIM_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured chunk size
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Defer version recording to the end of the job
    #[arg(long)]
    deferred_versioning: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    if let Some(chunk_size) = args.chunk_size {
        config.job.chunk_size = chunk_size;
    }
    if args.deferred_versioning {
        config.job.real_time_versioning = false;
    }
    config.validate()?;

    utils::logging::init(&config.logging);

    let importer = Importer::new(config);
    let summary = importer.run(&args.input).await?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
