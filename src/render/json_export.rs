//! @ai:module:intent JSON export of ordered benchmark series
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonExporter
//! @ai:module:stateless true

use crate::pipeline::AggregationOutcome;
use crate::series::{AggregationSummary, BucketExport};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// @ai:intent Trait for JSON export
pub trait JsonExporterTrait: Send + Sync {
    /// @ai:intent Write the ordered series to a JSON file
    fn generate(&self, outcome: &AggregationOutcome, output_path: &Path) -> Result<()>;
}

#[derive(Serialize)]
struct SeriesDocument<'a> {
    generated_at: String,
    variants: &'a [BucketExport],
    summary: &'a AggregationSummary,
}

/// @ai:intent Exports ordered series as pretty-printed JSON
pub struct JsonExporter;

impl JsonExporter {
    /// @ai:intent Create a new JSON exporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Render the document without writing it
    /// @ai:effects pure
    pub fn render(outcome: &AggregationOutcome) -> Result<String> {
        let document = SeriesDocument {
            generated_at: chrono::Utc::now().to_rfc3339(),
            variants: &outcome.exports,
            summary: &outcome.summary,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonExporterTrait for JsonExporter {
    /// @ai:intent Generate JSON export to file
    /// @ai:effects fs:write
    fn generate(&self, outcome: &AggregationOutcome, output_path: &Path) -> Result<()> {
        let json = Self::render(outcome)?;
        std::fs::write(output_path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{ExportedSeries, FamilyKey, SizeLabel, Variant};
    use tempfile::TempDir;

    #[test]
    fn test_generate_json_export() {
        let exporter = JsonExporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("series.json");

        let outcome = AggregationOutcome {
            exports: vec![BucketExport {
                variant: Variant::FloatOptimised,
                label: Variant::FloatOptimised.label().to_string(),
                time_unit: Some("ns".to_string()),
                series: vec![ExportedSeries {
                    family: FamilyKey::from("BM_highPerformanceMMM"),
                    sizes: vec![SizeLabel::known(16), SizeLabel::unknown()],
                    durations: vec![120.5, 99.0],
                }],
            }],
            summary: AggregationSummary::default(),
        };

        exporter.generate(&outcome, &output).unwrap();
        assert!(output.exists());

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        let variant = &value["variants"][0];
        assert_eq!(variant["variant"], "float_optimised");
        assert_eq!(variant["series"][0]["family"], "BM_highPerformanceMMM");
        assert_eq!(variant["series"][0]["sizes"], serde_json::json!([16, null]));
        assert!(value["generated_at"].is_string());
    }
}
