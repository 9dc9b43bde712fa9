//! @ai:module:intent JSON loader and directory discovery for benchmark reports
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportReader
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::reader::record::{BenchmarkRecord, ReportFile};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent Trait for reading benchmark reports
pub trait ReportReaderTrait: Send + Sync {
    /// @ai:intent Read all records of a single report file
    fn read(&self, path: &Path) -> Result<Vec<BenchmarkRecord>>;

    /// @ai:intent List report files in a directory without recursing
    fn discover(&self, reports_dir: &Path) -> Result<Vec<PathBuf>>;
}

/// @ai:intent Reads benchmark reports from the filesystem
/// @ai:effects pure (stateless)
pub struct ReportReader;

impl ReportReader {
    /// @ai:intent Create a new report reader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Parse report content that has already been read
    /// @ai:pre path is only used for error reporting
    /// @ai:effects pure
    pub fn parse(content: &str, path: &Path) -> Result<Vec<BenchmarkRecord>> {
        let report: ReportFile = serde_json::from_str(content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(report.benchmarks)
    }
}

impl Default for ReportReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReaderTrait for ReportReader {
    /// @ai:intent Read and parse a report file, all-or-nothing
    /// @ai:effects fs:read
    fn read(&self, path: &Path) -> Result<Vec<BenchmarkRecord>> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReportRead {
            path: path.to_path_buf(),
            source,
        })?;

        let records = Self::parse(&content, path)?;
        tracing::debug!("Read {} records from {}", records.len(), path.display());
        Ok(records)
    }

    /// @ai:intent List regular files directly inside the reports directory, sorted by name
    /// @ai:effects fs:read
    fn discover(&self, reports_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(reports_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| Error::ReportsDirectory {
                path: reports_dir.to_path_buf(),
                source,
            })?;

            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}
