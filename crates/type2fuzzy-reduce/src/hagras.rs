//! Hagras z-slice type reduction.
//!
//! A z-slice type-2 set is reduced slice by slice: each interval type-2
//! slice goes through Karnik-Mendel and its centroid interval becomes the
//! alpha-cut at level `z` of the resulting type-1 centroid.

use rayon::prelude::*;
use tracing::{debug, info};
use type2fuzzy_sets::{
    AlphaCutType1FuzzySet, CrispSet, GeneralType2FuzzySet, IntervalType2FuzzySet,
    ZSliceType2FuzzySet,
};

use crate::config::ReductionConfig;
use crate::error::ReductionResult;
use crate::karnik_mendel::KarnikMendel;
use crate::traits::TypeReducer;

#[derive(Debug, Clone, Default)]
pub struct Hagras {
    config: ReductionConfig,
}

impl Hagras {
    pub fn new(config: ReductionConfig) -> Self {
        Hagras { config }
    }

    /// Slice `set` into `number_of_slices` levels and reduce the result.
    pub fn reduce_general(
        &self,
        set: &GeneralType2FuzzySet,
        number_of_slices: usize,
    ) -> ReductionResult<AlphaCutType1FuzzySet> {
        let zset = ZSliceType2FuzzySet::from_general_type2_set(set, number_of_slices)?;
        self.reduce(&zset)
    }
}

impl TypeReducer for Hagras {
    type Input = ZSliceType2FuzzySet;
    type Output = AlphaCutType1FuzzySet;

    fn name(&self) -> &'static str {
        "Hagras"
    }

    fn config(&self) -> &ReductionConfig {
        &self.config
    }

    fn reduce(&self, zset: &ZSliceType2FuzzySet) -> ReductionResult<AlphaCutType1FuzzySet> {
        self.config.validate()?;
        let karnik_mendel = KarnikMendel::new(self.config.clone());
        let slices: Vec<(f64, &IntervalType2FuzzySet)> =
            zset.iter().filter(|(_, slice)| !slice.is_empty()).collect();

        let reduce_slice = |&(z, slice): &(f64, &IntervalType2FuzzySet)| -> ReductionResult<(f64, CrispSet)> {
            let centroid = karnik_mendel.reduce(slice)?;
            if self.config.information.is_full() {
                debug!(z, centroid = %centroid, "z-slice reduced");
            }
            Ok((z, centroid))
        };
        let centroids: Vec<(f64, CrispSet)> = if self.config.parallel {
            slices
                .par_iter()
                .map(reduce_slice)
                .collect::<ReductionResult<_>>()?
        } else {
            slices
                .iter()
                .map(reduce_slice)
                .collect::<ReductionResult<_>>()?
        };
        info!(
            slices = centroids.len(),
            parallel = self.config.parallel,
            "Hagras reduction"
        );

        let mut result = AlphaCutType1FuzzySet::new();
        for (z, centroid) in centroids {
            result.add_element(z, centroid)?;
        }
        Ok(result)
    }
}

/// Hagras reduction of `zset` with the given configuration.
pub fn hagras(
    zset: &ZSliceType2FuzzySet,
    config: &ReductionConfig,
) -> ReductionResult<AlphaCutType1FuzzySet> {
    Hagras::new(config.clone()).reduce(zset)
}
