//! @ai:module:intent Benchmark report parsing and discovery
//! @ai:module:layer domain
//! @ai:module:public_api BenchmarkRecord, ReportFile, ReportReader

pub mod loader;
pub mod record;

pub use loader::{ReportReader, ReportReaderTrait};
pub use record::{BenchmarkRecord, ReportFile};
