//! @ai:module:intent Order bucket series by size and export them for rendering
//! @ai:module:layer application
//! @ai:module:public_api order_bucket, export_bucket, export_all, BucketExport

use crate::series::context::AggregationContext;
use crate::series::types::{Bucket, BucketState, ExportedSeries};
use crate::series::variant::Variant;
use serde::{Deserialize, Serialize};

/// @ai:intent Ordered series of one variant, ready for a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketExport {
    pub variant: Variant,
    pub label: String,
    pub time_unit: Option<String>,
    pub series: Vec<ExportedSeries>,
}

impl BucketExport {
    /// @ai:intent Whether no family has any observation
    /// @ai:effects pure
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.is_empty())
    }

    /// @ai:intent Distinct known sizes across all series, ascending
    /// @ai:effects pure
    pub fn sizes(&self) -> Vec<u32> {
        let mut sizes: Vec<u32> = self
            .series
            .iter()
            .flat_map(|s| s.sizes.iter().filter_map(|size| size.value()))
            .collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}

/// @ai:intent Stable-sort every series of the bucket by size ascending
/// @ai:post ties keep append order; calling again changes nothing
/// @ai:effects mutates bucket
pub fn order_bucket(bucket: &mut Bucket) {
    for series in bucket.series_mut() {
        series.observations.sort_by_key(|o| o.size);
    }

    if bucket.state().accepts_appends() {
        bucket.set_state(BucketState::Ordered);
    }
}

/// @ai:intent Expose the ordered series as parallel size and duration sequences
/// @ai:post empty series export as two empty sequences
/// @ai:effects mutates bucket
pub fn export_bucket(bucket: &mut Bucket) -> BucketExport {
    if bucket.state() != BucketState::Exported {
        order_bucket(bucket);
    }

    let series = bucket
        .series()
        .iter()
        .map(|s| ExportedSeries {
            family: s.family.clone(),
            sizes: s.observations.iter().map(|o| o.size).collect(),
            durations: s.observations.iter().map(|o| o.duration).collect(),
        })
        .collect();

    bucket.set_state(BucketState::Exported);

    BucketExport {
        variant: bucket.variant(),
        label: bucket.variant().label().to_string(),
        time_unit: bucket.time_unit().map(str::to_string),
        series,
    }
}

/// @ai:intent Order and export all four buckets, consuming the context
/// @ai:effects pure
pub fn export_all(ctx: AggregationContext) -> Vec<BucketExport> {
    ctx.into_buckets()
        .into_iter()
        .map(|mut bucket| export_bucket(&mut bucket))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::types::{FamilyKey, Observation, SizeLabel};
    use pretty_assertions::assert_eq;

    fn bucket_with(observations: &[(Option<u32>, f64)]) -> Bucket {
        let mut bucket = Bucket::new(Variant::Float, &[FamilyKey::from("A")]);
        for &(size, duration) in observations {
            let size = size.map(SizeLabel::known).unwrap_or_else(SizeLabel::unknown);
            bucket.append("A", Observation::new(size, duration)).unwrap();
        }
        bucket
    }

    #[test]
    fn test_sizes_are_sorted_ascending() {
        let mut bucket = bucket_with(&[(Some(32), 3.0), (Some(8), 1.0), (Some(16), 2.0)]);

        let export = export_bucket(&mut bucket);
        let series = &export.series[0];

        assert_eq!(
            series.sizes,
            vec![SizeLabel::known(8), SizeLabel::known(16), SizeLabel::known(32)]
        );
        assert_eq!(series.durations, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_ties_keep_append_order() {
        let mut bucket = bucket_with(&[(Some(16), 5.0), (Some(8), 1.0), (Some(16), 4.0)]);

        let export = export_bucket(&mut bucket);
        assert_eq!(export.series[0].durations, vec![1.0, 5.0, 4.0]);
    }

    #[test]
    fn test_unknown_sizes_sort_last() {
        let mut bucket = bucket_with(&[(None, 9.0), (Some(64), 6.0), (Some(8), 1.0)]);

        let export = export_bucket(&mut bucket);
        assert_eq!(export.series[0].durations, vec![1.0, 6.0, 9.0]);
        assert_eq!(export.sizes(), vec![8, 64]);
    }

    #[test]
    fn test_ordering_is_idempotent() {
        let mut bucket = bucket_with(&[(Some(32), 3.0), (Some(8), 1.0), (Some(8), 0.5)]);

        order_bucket(&mut bucket);
        let first = bucket.series().to_vec();
        order_bucket(&mut bucket);
        assert_eq!(bucket.series().to_vec(), first);

        let once = export_bucket(&mut bucket);
        let twice = export_bucket(&mut bucket);
        assert_eq!(once, twice);
        assert_eq!(bucket.state(), BucketState::Exported);
    }

    #[test]
    fn test_empty_series_exports_empty_sequences() {
        let mut bucket = Bucket::new(Variant::Double, &[FamilyKey::from("A")]);

        let export = export_bucket(&mut bucket);
        assert!(export.is_empty());
        assert!(export.series[0].sizes.is_empty());
        assert!(export.series[0].durations.is_empty());
        assert_eq!(export.label, "Double");
    }

    #[test]
    fn test_state_transitions() {
        let mut bucket = Bucket::new(Variant::Float, &[FamilyKey::from("A")]);
        assert_eq!(bucket.state(), BucketState::Empty);

        bucket
            .append("A", Observation::new(SizeLabel::known(8), 1.0))
            .unwrap();
        assert_eq!(bucket.state(), BucketState::Populated);

        order_bucket(&mut bucket);
        assert_eq!(bucket.state(), BucketState::Ordered);
        assert!(bucket
            .append("A", Observation::new(SizeLabel::known(16), 2.0))
            .is_err());

        export_bucket(&mut bucket);
        assert_eq!(bucket.state(), BucketState::Exported);
    }

    #[test]
    fn test_export_all_covers_every_variant() {
        let ctx = AggregationContext::new(&[FamilyKey::from("A")]);
        let exports = export_all(ctx);
        let variants: Vec<_> = exports.iter().map(|e| e.variant).collect();
        assert_eq!(variants, Variant::all().to_vec());
    }
}
