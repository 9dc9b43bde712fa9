//! @ai:module:intent Configuration structs for report aggregation and plotting
//! @ai:module:layer infrastructure
//! @ai:module:public_api PlotConfig, PathConfig, AggregationConfig, ChartConfig, AxisScale, UnsizedPolicy
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// @ai:intent Main configuration for the plotting tool
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

/// @ai:intent Input and output locations
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,
    /// File name inside `reports_dir` used to register benchmark families
    #[serde(default = "default_reference_report")]
    pub reference_report: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// @ai:intent Record filtering options
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationConfig {
    #[serde(default = "default_aggregate_marker")]
    pub aggregate_marker: String,
    #[serde(default, rename = "unsized")]
    pub unsized_policy: UnsizedPolicy,
}

/// @ai:intent What to do with records whose file name carries no size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsizedPolicy {
    #[default]
    SortLast,
    Exclude,
}

/// @ai:intent Chart rendering options
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub scale: AxisScale,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

/// @ai:intent Axis scaling of the rendered charts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisScale {
    Linear,
    #[default]
    LogLog,
    Both,
}

impl AxisScale {
    /// @ai:intent Whether a linear chart should be drawn
    /// @ai:effects pure
    pub fn includes_linear(&self) -> bool {
        matches!(self, AxisScale::Linear | AxisScale::Both)
    }

    /// @ai:intent Whether a log-log chart should be drawn
    /// @ai:effects pure
    pub fn includes_log_log(&self) -> bool {
        matches!(self, AxisScale::LogLog | AxisScale::Both)
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            reports_dir: default_reports_dir(),
            reference_report: default_reference_report(),
            output_dir: default_output_dir(),
        }
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            aggregate_marker: default_aggregate_marker(),
            unsized_policy: UnsizedPolicy::default(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            scale: AxisScale::default(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from("../report")
}

fn default_reference_report() -> PathBuf {
    PathBuf::from("report16f.json")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("plots")
}

fn default_aggregate_marker() -> String {
    "mean".to_string()
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    768
}

impl PathConfig {
    /// @ai:intent Full path of the reference report
    /// @ai:effects pure
    pub fn reference_path(&self) -> PathBuf {
        self.reports_dir.join(&self.reference_report)
    }
}

impl PlotConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = PlotConfig::default();
        assert_eq!(config.aggregation.aggregate_marker, "mean");
        assert_eq!(config.aggregation.unsized_policy, UnsizedPolicy::SortLast);
        assert_eq!(config.chart.scale, AxisScale::LogLog);
        assert_eq!(
            config.paths.reference_path(),
            PathBuf::from("../report/report16f.json")
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PlotConfig = toml::from_str(
            r#"
[paths]
reports_dir = "bench/report"

[chart]
scale = "both"
"#,
        )
        .unwrap();

        assert_eq!(config.paths.reports_dir, PathBuf::from("bench/report"));
        assert_eq!(config.paths.output_dir, PathBuf::from("plots"));
        assert_eq!(config.chart.scale, AxisScale::Both);
        assert_eq!(config.chart.width, 1024);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plot.toml");

        let mut config = PlotConfig::default();
        config.aggregation.unsized_policy = UnsizedPolicy::Exclude;
        config.save(&path).unwrap();

        let loaded = PlotConfig::load(&path).unwrap();
        assert_eq!(loaded.aggregation.unsized_policy, UnsizedPolicy::Exclude);
    }

    #[test]
    fn test_unsized_policy_reads_documented_key() {
        let config: PlotConfig = toml::from_str(
            r#"
[aggregation]
unsized = "exclude"
"#,
        )
        .unwrap();

        assert_eq!(config.aggregation.unsized_policy, UnsizedPolicy::Exclude);
        assert_eq!(config.aggregation.aggregate_marker, "mean");

        let written = toml::to_string_pretty(&config).unwrap();
        assert!(written.contains("unsized = \"exclude\""));
    }

    #[test]
    fn test_scale_selection() {
        assert!(AxisScale::Both.includes_linear());
        assert!(AxisScale::Both.includes_log_log());
        assert!(!AxisScale::Linear.includes_log_log());
        assert!(!AxisScale::LogLog.includes_linear());
    }
}
