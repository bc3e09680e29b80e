//! Upload command implementation

use crate::cli::UploadArgs;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use farmgrid_client::{RecordKind, UploadOutcome, Uploader};
use farmgrid_core::config::{CliConfigOverrides, LayeredConfig};
use farmgrid_core::dataset::load_dataset;
use farmgrid_core::FarmgridError;
use std::time::Duration;

pub async fn execute(args: UploadArgs, output: &OutputWriter) -> Result<()> {
    // Resolve layered configuration: CLI > env > file > defaults.
    let mut config = LayeredConfig::with_defaults();
    if let Some(config_path) = &args.config {
        config = config
            .load_from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    }
    config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        base_url: args.base_url,
        timeout_secs: args.timeout_secs,
        dataset_path: args.dataset,
    });

    for (key, (value, source)) in config.to_inspection_map() {
        tracing::debug!("config {} = {} (from {:?})", key, value, source);
    }

    // Preflight: a missing dataset file is reported and skipped without a
    // single HTTP call, and without failing the process.
    let dataset = match load_dataset(&config.dataset_path.value) {
        Ok(dataset) => dataset,
        Err(FarmgridError::DatasetNotFound { path }) => {
            output.error(format!("Dataset file not found: {}", path.display()));
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to load {}", config.dataset_path.value.display())
            })
        }
    };

    output.info(format!(
        "Uploading {} points and {} colors to {}",
        dataset.points.len(),
        dataset.colors.len(),
        config.base_url.value
    ));

    let uploader = Uploader::new(
        config.base_url.value.clone(),
        Duration::from_secs(config.timeout_secs.value),
    );

    let mut current_group: Option<RecordKind> = None;
    let report = uploader
        .upload_dataset(&dataset, |event| {
            let kind_word = match event.kind {
                RecordKind::Point => "point",
                RecordKind::Color => "color",
            };

            if current_group != Some(event.kind) {
                current_group = Some(event.kind);
                output.section(match event.kind {
                    RecordKind::Point => "Uploading points",
                    RecordKind::Color => "Uploading colors",
                });
            }

            match &event.outcome {
                UploadOutcome::Accepted => {
                    output.success(format!("Uploaded {}: {}", kind_word, event.label));
                }
                UploadOutcome::Rejected { status, body } => {
                    output.error(format!("Failed {} upload: {}, {}", kind_word, status, body));
                }
                UploadOutcome::Unreachable { message } => {
                    output.warning(format!("Error uploading {}: {}", kind_word, message));
                }
            }
        })
        .await;

    // Summary is informational only; individual upload failures never turn
    // into a non-zero exit.
    output.section("Summary");
    output.kv(
        "points",
        format!(
            "{} uploaded, {} rejected, {} unreachable",
            report.points_accepted, report.points_rejected, report.points_unreachable
        ),
    );
    output.kv(
        "colors",
        format!(
            "{} uploaded, {} rejected, {} unreachable",
            report.colors_accepted, report.colors_rejected, report.colors_unreachable
        ),
    );

    Ok(())
}
