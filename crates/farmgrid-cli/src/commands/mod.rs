//! Command implementations

mod generate;
mod upload;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    match cli.command {
        Commands::Generate(args) => generate::execute(args, &output),
        Commands::Upload(args) => upload::execute(args, &output).await,
    }
}
