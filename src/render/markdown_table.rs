//! @ai:module:intent Markdown tables of mean real time per family and size
//! @ai:module:layer infrastructure
//! @ai:module:public_api MarkdownSummary
//! @ai:module:stateless true

use crate::pipeline::AggregationOutcome;
use crate::series::{AggregationSummary, BucketExport, ExportedSeries, SizeLabel};
use anyhow::Result;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// @ai:intent Trait for Markdown summary generation
pub trait MarkdownSummaryTrait: Send + Sync {
    /// @ai:intent Write the summary tables to a Markdown file
    fn generate(&self, outcome: &AggregationOutcome, output_path: &Path) -> Result<()>;
}

/// @ai:intent Generates Markdown tables from ordered series
pub struct MarkdownSummary;

impl MarkdownSummary {
    /// @ai:intent Create a new Markdown summary generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Render every variant table and the skip summary
    /// @ai:effects pure
    pub fn render(outcome: &AggregationOutcome) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# Matrix Multiplication Benchmarks")?;
        writeln!(output)?;

        for export in &outcome.exports {
            output.push_str(&Self::generate_variant_table(export)?);
        }

        output.push_str(&Self::generate_skip_section(&outcome.summary)?);
        Ok(output)
    }

    /// @ai:intent Table with one row per family and one column per size
    /// @ai:effects pure
    fn generate_variant_table(export: &BucketExport) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "## {}", export.label)?;
        writeln!(output)?;

        if export.is_empty() {
            writeln!(output, "_No data._")?;
            writeln!(output)?;
            return Ok(output);
        }

        let mut columns: Vec<SizeLabel> = export.sizes().into_iter().map(SizeLabel::known).collect();
        let has_unknown = export
            .series
            .iter()
            .any(|s| s.sizes.iter().any(|size| !size.is_known()));
        if has_unknown {
            columns.push(SizeLabel::unknown());
        }

        let unit = export.time_unit.as_deref().unwrap_or("?");
        write!(output, "| Benchmark ({}) |", unit)?;
        for size in &columns {
            write!(output, " {} |", size)?;
        }
        writeln!(output)?;

        write!(output, "|-----------|")?;
        for _ in &columns {
            write!(output, "------:|")?;
        }
        writeln!(output)?;

        for series in &export.series {
            write!(output, "| {} |", series.family)?;
            for size in &columns {
                write!(output, " {} |", Self::format_cell(series, *size))?;
            }
            writeln!(output)?;
        }

        writeln!(output)?;
        Ok(output)
    }

    /// @ai:intent Format all durations recorded at one size
    /// @ai:effects pure
    fn format_cell(series: &ExportedSeries, size: SizeLabel) -> String {
        let values: Vec<String> = series
            .sizes
            .iter()
            .zip(&series.durations)
            .filter(|(s, _)| **s == size)
            .map(|(_, d)| format!("{:.2}", d))
            .collect();

        if values.is_empty() {
            "-".to_string()
        } else {
            values.join(" / ")
        }
    }

    /// @ai:intent List what the aggregation ignored
    /// @ai:effects pure
    fn generate_skip_section(summary: &AggregationSummary) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "## Aggregation")?;
        writeln!(output)?;
        writeln!(output, "- Files aggregated: {}", summary.files_aggregated)?;
        writeln!(output, "- Observations: {}", summary.observations_appended)?;
        writeln!(output, "- Non-mean records ignored: {}", summary.records_filtered)?;

        if summary.unsized_observations > 0 {
            writeln!(
                output,
                "- Observations without a size: {}",
                summary.unsized_observations
            )?;
        }
        if summary.excluded_unsized > 0 {
            writeln!(
                output,
                "- Observations excluded for missing size: {}",
                summary.excluded_unsized
            )?;
        }
        if !summary.skipped_files.is_empty() {
            writeln!(output, "- Skipped files: {}", summary.skipped_files.join(", "))?;
        }
        for (family, count) in &summary.dropped_families {
            writeln!(output, "- Dropped unknown family `{}`: {} records", family, count)?;
        }

        Ok(output)
    }
}

impl Default for MarkdownSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownSummaryTrait for MarkdownSummary {
    /// @ai:intent Generate Markdown summary to file
    /// @ai:effects fs:write
    fn generate(&self, outcome: &AggregationOutcome, output_path: &Path) -> Result<()> {
        let markdown = Self::render(outcome)?;
        std::fs::write(output_path, markdown)?;
        Ok(())
    }
}
