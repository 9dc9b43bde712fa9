//! @ai:module:intent Matrix-multiplication benchmark report aggregation and plotting
//! @ai:module:layer application
//! @ai:module:public_api config, error, reader, series, pipeline, render

pub mod config;
pub mod error;
pub mod pipeline;
pub mod reader;
pub mod render;
pub mod series;

pub use config::PlotConfig;
pub use error::{Error, Result};
pub use pipeline::AggregationOutcome;
pub use reader::{BenchmarkRecord, ReportReader};
pub use render::OutputGenerator;
pub use series::{Aggregator, AggregationContext, BucketExport, SeriesRegistry, Variant};
