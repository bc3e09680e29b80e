//! Generate command implementation

use crate::cli::GenerateArgs;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use farmgrid_core::dataset::write_dataset;
use farmgrid_core::generate::generate_dataset;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn execute(args: GenerateArgs, output: &OutputWriter) -> Result<()> {
    let dataset = match args.seed {
        Some(seed) => generate_dataset(&mut StdRng::seed_from_u64(seed)),
        None => generate_dataset(&mut rand::thread_rng()),
    };

    write_dataset(&args.output, &dataset)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    output.success(format!(
        "{} created with garden 1, {} points and {} colors",
        args.output.display(),
        dataset.points.len(),
        dataset.colors.len()
    ));

    Ok(())
}
