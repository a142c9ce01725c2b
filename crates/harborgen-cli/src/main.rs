use std::path::PathBuf;

use clap::Parser;
use harborgen_generate::{GenerateOptions, GenerationEngine, GenerationError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
}

#[derive(Parser, Debug)]
#[command(name = "harborgen", version, about = "Synthetic boat-owner roster generator")]
struct Cli {
    /// Number of owner records to generate.
    #[arg(long, default_value_t = 2000)]
    rows: u64,
    /// Seed for the shared random source.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Output CSV path.
    #[arg(long, default_value = "boat_owners.csv")]
    out: PathBuf,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let options = GenerateOptions {
        rows: cli.rows,
        seed: cli.seed,
        out_path: cli.out,
        ..GenerateOptions::default()
    };

    let engine = GenerationEngine::new(options);
    let result = engine.run()?;

    println!("Done! CSV file created: {}", result.out_path.display());
    Ok(())
}
