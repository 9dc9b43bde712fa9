//! @ai:module:intent Define error types for report aggregation
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use crate::series::Variant;
use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for reading and aggregating benchmark reports
#[derive(Error, Debug)]
pub enum Error {
    #[error("Reference report not found: {}", path.display())]
    MissingReferenceReport { path: PathBuf },

    #[error("Failed to read report {}: {source}", path.display())]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse report {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to list reports directory {}: {source}", path.display())]
    ReportsDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Series registry has already been initialised")]
    AlreadyInitialised,

    #[error("Bucket for {variant} is already ordered and cannot accept more observations")]
    BucketSealed { variant: Variant },
}

pub type Result<T> = std::result::Result<T, Error>;
