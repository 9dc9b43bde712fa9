//! @ai:module:intent Grouping, filtering and ordering of benchmark timings
//! @ai:module:layer application
//! @ai:module:public_api Variant, SeriesRegistry, AggregationContext, Aggregator, BucketExport

pub mod aggregator;
pub mod context;
pub mod ordering;
pub mod registry;
pub mod types;
pub mod variant;

pub use aggregator::{AggregationSummary, Aggregator, FileOutcome};
pub use context::AggregationContext;
pub use ordering::{export_all, export_bucket, order_bucket, BucketExport};
pub use registry::SeriesRegistry;
pub use types::{Bucket, BucketState, ExportedSeries, FamilyKey, Observation, Series, SizeLabel};
pub use variant::{classify_file_name, extract_size_label, Variant};
