//! @ai:module:intent Route mean benchmark timings into variant buckets
//! @ai:module:layer application
//! @ai:module:public_api Aggregator, AggregationSummary, FileOutcome

use crate::config::{AggregationConfig, UnsizedPolicy};
use crate::error::{Error, Result};
use crate::reader::BenchmarkRecord;
use crate::series::context::AggregationContext;
use crate::series::types::{Observation, SizeLabel};
use crate::series::variant::{classify_file_name, extract_size_label, Variant};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// @ai:intent Result of offering one report file to the aggregator
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// File name matched no variant; nothing was read or touched
    Skipped,
    Aggregated {
        variant: Variant,
        size: SizeLabel,
        appended: usize,
    },
}

/// @ai:intent Counters for everything the aggregator accepted or skipped
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationSummary {
    pub files_aggregated: usize,
    pub skipped_files: Vec<String>,
    pub records_filtered: usize,
    pub observations_appended: usize,
    pub unsized_observations: usize,
    pub excluded_unsized: usize,
    /// Family names absent from the reference report, with how many records were dropped
    pub dropped_families: BTreeMap<String, usize>,
}

impl AggregationSummary {
    /// @ai:intent Total records dropped because their family was never registered
    /// @ai:effects pure
    pub fn dropped_records(&self) -> usize {
        self.dropped_families.values().sum()
    }
}

/// @ai:intent Filters mean records and appends them to the bucket chosen by file name
pub struct Aggregator {
    marker: String,
    unsized_policy: UnsizedPolicy,
    summary: AggregationSummary,
}

impl Aggregator {
    /// @ai:intent Create an aggregator from configuration
    /// @ai:effects pure
    pub fn new(config: &AggregationConfig) -> Self {
        Self {
            marker: config.aggregate_marker.clone(),
            unsized_policy: config.unsized_policy,
            summary: AggregationSummary::default(),
        }
    }

    /// @ai:intent Aggregate records that are already in memory
    /// @ai:effects mutates ctx, mutates self
    pub fn aggregate(
        &mut self,
        ctx: &mut AggregationContext,
        file_name: &str,
        records: &[BenchmarkRecord],
    ) -> Result<FileOutcome> {
        let Some(variant) = self.accept(ctx, file_name)? else {
            return Ok(FileOutcome::Skipped);
        };
        self.aggregate_records(ctx, file_name, variant, records)
    }

    /// @ai:intent Classify the file name first and only load records for matched files
    /// @ai:post Skipped outcome never invokes load
    /// @ai:post a sealed target bucket fails before load and leaves the summary untouched
    /// @ai:effects mutates ctx, mutates self
    pub fn aggregate_with<F>(
        &mut self,
        ctx: &mut AggregationContext,
        file_name: &str,
        load: F,
    ) -> Result<FileOutcome>
    where
        F: FnOnce() -> Result<Vec<BenchmarkRecord>>,
    {
        let Some(variant) = self.accept(ctx, file_name)? else {
            return Ok(FileOutcome::Skipped);
        };
        let records = load()?;
        self.aggregate_records(ctx, file_name, variant, &records)
    }

    /// Target variant of a file, or None when it is skipped.
    fn accept(&mut self, ctx: &AggregationContext, file_name: &str) -> Result<Option<Variant>> {
        let Some(variant) = classify_file_name(file_name) else {
            tracing::debug!("Skipping {}: not a report file name", file_name);
            self.summary.skipped_files.push(file_name.to_string());
            return Ok(None);
        };

        if !ctx.bucket(variant).state().accepts_appends() {
            return Err(Error::BucketSealed { variant });
        }
        Ok(Some(variant))
    }

    fn aggregate_records(
        &mut self,
        ctx: &mut AggregationContext,
        file_name: &str,
        variant: Variant,
        records: &[BenchmarkRecord],
    ) -> Result<FileOutcome> {
        let size = extract_size_label(file_name);
        let appended = self.append_records(ctx, variant, size, records)?;

        self.summary.files_aggregated += 1;
        tracing::debug!(
            "Aggregated {} observations from {} into {} bucket (size {})",
            appended,
            file_name,
            variant,
            size
        );

        Ok(FileOutcome::Aggregated {
            variant,
            size,
            appended,
        })
    }

    fn append_records(
        &mut self,
        ctx: &mut AggregationContext,
        variant: Variant,
        size: SizeLabel,
        records: &[BenchmarkRecord],
    ) -> Result<usize> {
        let bucket = ctx.bucket_mut(variant);
        let mut appended = 0;

        for record in records {
            let duration = match record.real_time {
                Some(duration) if record.is_aggregate(&self.marker) => duration,
                _ => {
                    self.summary.records_filtered += 1;
                    continue;
                }
            };

            let family = record.family_name();
            if !bucket.contains(family) {
                *self
                    .summary
                    .dropped_families
                    .entry(family.to_string())
                    .or_insert(0) += 1;
                continue;
            }

            if !size.is_known() {
                if self.unsized_policy == UnsizedPolicy::Exclude {
                    self.summary.excluded_unsized += 1;
                    continue;
                }
                self.summary.unsized_observations += 1;
            }

            let duration = match &record.time_unit {
                Some(unit) => bucket.normalise_duration(duration, unit),
                None => duration,
            };

            if bucket.append(family, Observation::new(size, duration))? {
                appended += 1;
            }
        }

        self.summary.observations_appended += appended;
        Ok(appended)
    }

    pub fn summary(&self) -> &AggregationSummary {
        &self.summary
    }

    /// @ai:intent Finish aggregation and log dropped families
    /// @ai:effects io
    pub fn into_summary(self) -> AggregationSummary {
        for (family, count) in &self.summary.dropped_families {
            tracing::warn!(
                "Dropped {} records of '{}': family not in reference report",
                count,
                family
            );
        }
        self.summary
    }
}
