//! @ai:module:intent Drive a full aggregation run over a reports directory
//! @ai:module:layer application
//! @ai:module:public_api run, run_with, AggregationOutcome

use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::reader::{ReportReader, ReportReaderTrait};
use crate::series::{export_all, AggregationSummary, Aggregator, BucketExport, SeriesRegistry};
use serde::{Deserialize, Serialize};

/// @ai:intent Ordered exports of every variant plus what was skipped on the way
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationOutcome {
    pub exports: Vec<BucketExport>,
    pub summary: AggregationSummary,
}

/// @ai:intent Run aggregation with the filesystem reader
/// @ai:effects fs:read
pub fn run(config: &PlotConfig) -> Result<AggregationOutcome> {
    run_with(&ReportReader::new(), config)
}

/// @ai:intent Seed from the reference report, aggregate every report, then order all buckets
/// @ai:post any read or parse failure aborts the whole run
/// @ai:effects fs:read
pub fn run_with<R: ReportReaderTrait>(reader: &R, config: &PlotConfig) -> Result<AggregationOutcome> {
    let reference_path = config.paths.reference_path();
    if !reference_path.is_file() {
        return Err(Error::MissingReferenceReport {
            path: reference_path,
        });
    }

    tracing::info!("Seeding families from {}", reference_path.display());
    let reference = reader.read(&reference_path)?;

    let mut registry = SeriesRegistry::new();
    let mut ctx = registry.seed(&reference)?;

    let files = reader.discover(&config.paths.reports_dir)?;
    tracing::info!(
        "Found {} files in {}",
        files.len(),
        config.paths.reports_dir.display()
    );

    let mut aggregator = Aggregator::new(&config.aggregation);
    for path in &files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        aggregator.aggregate_with(&mut ctx, &file_name, || reader.read(path))?;
    }

    let summary = aggregator.into_summary();
    tracing::info!(
        "Aggregated {} files ({} skipped), {} observations",
        summary.files_aggregated,
        summary.skipped_files.len(),
        summary.observations_appended
    );

    Ok(AggregationOutcome {
        exports: export_all(ctx),
        summary,
    })
}
