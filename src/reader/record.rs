//! @ai:module:intent Record types for benchmark report files
//! @ai:module:layer domain
//! @ai:module:public_api BenchmarkRecord, ReportFile
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// Separator between the segments of a hierarchical benchmark name.
pub const NAME_DELIMITER: char = '/';

/// @ai:intent Top-level structure of a report file
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFile {
    pub benchmarks: Vec<BenchmarkRecord>,
}

/// @ai:intent One row of a benchmark report
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub name: String,
    #[serde(default)]
    pub aggregate_name: Option<String>,
    #[serde(default)]
    pub real_time: Option<f64>,
    #[serde(default)]
    pub time_unit: Option<String>,
    #[serde(default)]
    pub run_type: Option<String>,
}

impl BenchmarkRecord {
    /// @ai:intent First segment of the hierarchical benchmark name
    /// @ai:effects pure
    pub fn family_name(&self) -> &str {
        self.name
            .split(NAME_DELIMITER)
            .next()
            .unwrap_or(self.name.as_str())
    }

    /// @ai:intent Check whether this record is the given statistical aggregate
    /// @ai:effects pure
    pub fn is_aggregate(&self, marker: &str) -> bool {
        self.aggregate_name.as_deref() == Some(marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_name_takes_first_segment() {
        let record: BenchmarkRecord =
            serde_json::from_str(r#"{"name": "BM_tilingMMM/iterations:1/repeats:5_mean"}"#)
                .unwrap();
        assert_eq!(record.family_name(), "BM_tilingMMM");
    }

    #[test]
    fn test_family_name_without_delimiter() {
        let record: BenchmarkRecord = serde_json::from_str(r#"{"name": "BM_naiveMMM"}"#).unwrap();
        assert_eq!(record.family_name(), "BM_naiveMMM");
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let record: BenchmarkRecord = serde_json::from_str(r#"{"name": "BM_naiveMMM"}"#).unwrap();
        assert!(record.aggregate_name.is_none());
        assert!(record.real_time.is_none());
        assert!(!record.is_aggregate("mean"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "context": {"num_cpus": 8},
            "benchmarks": [{
                "name": "BM_parallelMMM/iterations:1",
                "run_name": "BM_parallelMMM/iterations:1",
                "run_type": "aggregate",
                "aggregate_name": "mean",
                "real_time": 1.5e6,
                "cpu_time": 1.4e6,
                "time_unit": "ns"
            }]
        }"#;
        let report: ReportFile = serde_json::from_str(json).unwrap();
        assert_eq!(report.benchmarks.len(), 1);
        assert!(report.benchmarks[0].is_aggregate("mean"));
        assert_eq!(report.benchmarks[0].time_unit.as_deref(), Some("ns"));
    }
}
