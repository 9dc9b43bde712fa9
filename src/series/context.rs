//! @ai:module:intent Explicit owner of the four variant buckets
//! @ai:module:layer domain
//! @ai:module:public_api AggregationContext

use crate::series::types::{Bucket, FamilyKey};
use crate::series::variant::Variant;

/// @ai:intent Holds one bucket per variant for a single aggregation run
pub struct AggregationContext {
    pub float: Bucket,
    pub double: Bucket,
    pub float_opt: Bucket,
    pub double_opt: Bucket,
}

impl AggregationContext {
    /// @ai:intent Create four empty buckets sharing the same family order
    /// @ai:effects pure
    pub fn new(families: &[FamilyKey]) -> Self {
        Self {
            float: Bucket::new(Variant::Float, families),
            double: Bucket::new(Variant::Double, families),
            float_opt: Bucket::new(Variant::FloatOptimised, families),
            double_opt: Bucket::new(Variant::DoubleOptimised, families),
        }
    }

    pub fn bucket(&self, variant: Variant) -> &Bucket {
        match variant {
            Variant::Float => &self.float,
            Variant::Double => &self.double,
            Variant::FloatOptimised => &self.float_opt,
            Variant::DoubleOptimised => &self.double_opt,
        }
    }

    pub fn bucket_mut(&mut self, variant: Variant) -> &mut Bucket {
        match variant {
            Variant::Float => &mut self.float,
            Variant::Double => &mut self.double,
            Variant::FloatOptimised => &mut self.float_opt,
            Variant::DoubleOptimised => &mut self.double_opt,
        }
    }

    /// @ai:intent Buckets in output order
    /// @ai:effects pure
    pub fn into_buckets(self) -> [Bucket; 4] {
        [self.float, self.double, self.float_opt, self.double_opt]
    }
}
