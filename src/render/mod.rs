//! @ai:module:intent Output generation for aggregated benchmark series
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputGenerator, ChartGenerator, JsonExporter, MarkdownSummary

pub mod charts;
pub mod json_export;
pub mod markdown_table;

pub use charts::{ChartGenerator, ChartGeneratorTrait};
pub use json_export::{JsonExporter, JsonExporterTrait};
pub use markdown_table::{MarkdownSummary, MarkdownSummaryTrait};

use crate::config::ChartConfig;
use crate::pipeline::AggregationOutcome;
use anyhow::{Context, Result};
use std::path::Path;

/// @ai:intent Combined output generator
pub struct OutputGenerator {
    json: JsonExporter,
    markdown: MarkdownSummary,
    charts: ChartGenerator,
}

impl OutputGenerator {
    /// @ai:intent Create a new output generator
    /// @ai:effects pure
    pub fn new(chart: ChartConfig) -> Self {
        Self {
            json: JsonExporter::new(),
            markdown: MarkdownSummary::new(),
            charts: ChartGenerator::new(chart),
        }
    }

    /// @ai:intent Generate charts, JSON export and Markdown summary
    /// @ai:pre outcome comes from a complete aggregation run
    /// @ai:effects fs:write
    pub fn generate_all(&self, outcome: &AggregationOutcome, output_dir: &Path) -> Result<Vec<String>> {
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

        let mut generated = self.charts.generate_all(&outcome.exports, output_dir)?;

        self.json.generate(outcome, &output_dir.join("series.json"))?;
        generated.push("series.json".to_string());

        self.markdown.generate(outcome, &output_dir.join("summary.md"))?;
        generated.push("summary.md".to_string());

        tracing::info!("Generated {} files in {}", generated.len(), output_dir.display());
        Ok(generated)
    }
}

impl Default for OutputGenerator {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{export_all, AggregationContext, AggregationSummary, FamilyKey};
    use tempfile::TempDir;

    #[test]
    fn test_generate_all_outputs() {
        let temp = TempDir::new().unwrap();
        let outcome = AggregationOutcome {
            exports: export_all(AggregationContext::new(&[FamilyKey::from("BM_naiveMMM")])),
            summary: AggregationSummary::default(),
        };

        let files = OutputGenerator::default()
            .generate_all(&outcome, &temp.path().join("plots"))
            .unwrap();

        assert_eq!(files.len(), 6);
        assert!(temp.path().join("plots/float_loglog.png").exists());
        assert!(temp.path().join("plots/series.json").exists());
        assert!(temp.path().join("plots/summary.md").exists());
    }
}
