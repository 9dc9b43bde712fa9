//! @ai:module:intent Series and bucket types for aggregated benchmark timings
//! @ai:module:layer domain
//! @ai:module:public_api FamilyKey, SizeLabel, Observation, Series, Bucket, BucketState, ExportedSeries

use crate::error::{Error, Result};
use crate::series::variant::Variant;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;

/// @ai:intent Logical benchmark identity shared across report files
/// @ai:invariant hashes and compares exactly like the wrapped str
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyKey(String);

impl FamilyKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FamilyKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for FamilyKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FamilyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// @ai:intent Matrix size a report was generated for, possibly unknown
/// @ai:invariant every known size orders before unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeLabel(Option<u32>);

impl SizeLabel {
    pub fn known(size: u32) -> Self {
        Self(Some(size))
    }

    pub fn unknown() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<u32> {
        self.0
    }

    pub fn is_known(&self) -> bool {
        self.0.is_some()
    }
}

impl Ord for SizeLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for SizeLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(size) => write!(f, "{}", size),
            None => write!(f, "?"),
        }
    }
}

/// Nanoseconds per unit for the time units benchmark reports emit.
fn nanos_per_unit(unit: &str) -> Option<f64> {
    match unit {
        "ns" => Some(1.0),
        "us" => Some(1e3),
        "ms" => Some(1e6),
        "s" => Some(1e9),
        _ => None,
    }
}

/// @ai:intent One timing sample at a given size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub size: SizeLabel,
    pub duration: f64,
}

impl Observation {
    pub fn new(size: SizeLabel, duration: f64) -> Self {
        Self { size, duration }
    }
}

/// @ai:intent Ordered observations of one benchmark family
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub family: FamilyKey,
    pub observations: Vec<Observation>,
}

impl Series {
    pub fn new(family: FamilyKey) -> Self {
        Self {
            family,
            observations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// @ai:intent Lifecycle of a bucket from creation to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketState {
    Empty,
    Populated,
    Ordered,
    Exported,
}

impl BucketState {
    /// @ai:intent Whether observations may still be appended
    /// @ai:effects pure
    pub fn accepts_appends(&self) -> bool {
        matches!(self, BucketState::Empty | BucketState::Populated)
    }
}

/// @ai:intent Series collection for one benchmark variant
/// @ai:invariant family order is fixed at construction
pub struct Bucket {
    variant: Variant,
    series: Vec<Series>,
    index: HashMap<FamilyKey, usize>,
    time_unit: Option<String>,
    state: BucketState,
}

impl Bucket {
    /// @ai:intent Create a bucket with one empty series per family, in the given order
    /// @ai:pre families contains no duplicates
    /// @ai:effects pure
    pub fn new(variant: Variant, families: &[FamilyKey]) -> Self {
        let series: Vec<_> = families.iter().cloned().map(Series::new).collect();
        let index = families
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, family)| (family, i))
            .collect();

        Self {
            variant,
            series,
            index,
            time_unit: None,
            state: BucketState::Empty,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn state(&self) -> BucketState {
        self.state
    }

    pub fn time_unit(&self) -> Option<&str> {
        self.time_unit.as_deref()
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn get(&self, family: &str) -> Option<&Series> {
        self.index
            .get(family)
            .map(|&i| &self.series[i])
    }

    pub fn contains(&self, family: &str) -> bool {
        self.index.contains_key(family)
    }

    /// @ai:intent Total number of observations across all series
    /// @ai:effects pure
    pub fn observation_count(&self) -> usize {
        self.series.iter().map(|s| s.observations.len()).sum()
    }

    /// @ai:intent Append an observation to a registered family
    /// @ai:post Ok(false) when the family was never registered; nothing is stored
    /// @ai:effects mutates self
    pub fn append(&mut self, family: &str, observation: Observation) -> Result<bool> {
        if !self.state.accepts_appends() {
            return Err(Error::BucketSealed {
                variant: self.variant,
            });
        }

        let Some(&i) = self.index.get(family) else {
            return Ok(false);
        };

        self.series[i].observations.push(observation);
        self.state = BucketState::Populated;
        Ok(true)
    }

    /// @ai:intent Express a duration in this bucket's time unit, adopting the first unit seen
    /// @ai:post durations in ns, us, ms or s are converted; other units pass through unchanged
    /// @ai:effects mutates self
    pub fn normalise_duration(&mut self, duration: f64, unit: &str) -> f64 {
        if self.time_unit.is_none() {
            self.time_unit = Some(unit.to_string());
            return duration;
        }

        let target = self.time_unit.as_deref().unwrap_or(unit);
        if target == unit {
            return duration;
        }

        match (nanos_per_unit(unit), nanos_per_unit(target)) {
            (Some(from), Some(to)) => duration * from / to,
            _ => {
                tracing::warn!(
                    "Cannot convert '{}' to '{}' in {} bucket, keeping raw value",
                    unit,
                    target,
                    self.variant
                );
                duration
            }
        }
    }

    pub(crate) fn series_mut(&mut self) -> &mut [Series] {
        &mut self.series
    }

    pub(crate) fn set_state(&mut self, state: BucketState) {
        self.state = state;
    }
}

/// @ai:intent Ordered series as parallel size and duration sequences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedSeries {
    pub family: FamilyKey,
    pub sizes: Vec<SizeLabel>,
    pub durations: Vec<f64>,
}

impl ExportedSeries {
    /// @ai:intent Plottable points, skipping unknown sizes
    /// @ai:effects pure
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.sizes
            .iter()
            .zip(&self.durations)
            .filter_map(|(size, &duration)| size.value().map(|s| (s as f64, duration)))
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
