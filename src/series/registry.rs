//! @ai:module:intent One-shot registration of benchmark families from a reference report
//! @ai:module:layer application
//! @ai:module:public_api SeriesRegistry

use crate::error::{Error, Result};
use crate::reader::BenchmarkRecord;
use crate::series::context::AggregationContext;
use crate::series::types::FamilyKey;
use std::collections::HashSet;

/// @ai:intent Registers family keys once and builds the aggregation buckets
pub struct SeriesRegistry {
    families: Vec<FamilyKey>,
    initialised: bool,
}

impl SeriesRegistry {
    /// @ai:intent Create an uninitialised registry
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            families: Vec::new(),
            initialised: false,
        }
    }

    /// @ai:intent Register every family of the reference report and build the buckets
    /// @ai:pre registry has not been seeded before
    /// @ai:post families are stored in first-seen order without duplicates
    /// @ai:effects mutates self
    pub fn seed(&mut self, reference: &[BenchmarkRecord]) -> Result<AggregationContext> {
        if self.initialised {
            return Err(Error::AlreadyInitialised);
        }

        let mut seen = HashSet::new();
        let families: Vec<FamilyKey> = reference
            .iter()
            .map(|record| record.family_name())
            .filter(|name| seen.insert(*name))
            .map(FamilyKey::from)
            .collect();

        if families.is_empty() {
            tracing::warn!("Reference report contains no benchmarks; every record will be dropped");
        } else {
            tracing::info!("Registered {} benchmark families", families.len());
        }

        self.families = families;
        self.initialised = true;
        Ok(AggregationContext::new(&self.families))
    }

    pub fn families(&self) -> &[FamilyKey] {
        &self.families
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }
}

impl Default for SeriesRegistry {
    fn default() -> Self {
        Self::new()
    }
}
