use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Farmgrid - Garden seed-data generator and uploader
#[derive(Parser, Debug)]
#[command(name = "farmgrid")]
#[command(about = "Garden seed-data generator and uploader", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the synthetic seed dataset and write it to disk
    Generate(GenerateArgs),

    /// Upload a seed dataset to the farm API, one POST per record
    Upload(UploadArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Destination file (overwritten without confirmation)
    #[arg(long, short = 'o', default_value = "datatest.json")]
    pub output: PathBuf,

    /// Seed for reproducible output; omit for fresh random content
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct UploadArgs {
    /// Dataset file to upload
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Farm API base URL (e.g., "http://localhost:3000")
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// TOML config file with base_url / timeout_secs / dataset_path
    #[arg(long)]
    pub config: Option<PathBuf>,
}
