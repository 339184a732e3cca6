//! Mendel-John type reduction by exhaustive embedded-set enumeration.
//!
//! Every embedded type-2 set contributes its centroid `Σ u·x / Σ u` with the
//! smallest secondary grade it passes through. The number of embedded sets is
//! the product of the per-slice support sizes, so the enumeration is refused
//! up front when it exceeds [`ReductionConfig::max_embedded_sets`].

use tracing::{debug, info};
use type2fuzzy_sets::{round_to, GeneralType2FuzzySet, Type1FuzzySet};

use crate::config::ReductionConfig;
use crate::error::{ReductionError, ReductionResult};
use crate::traits::TypeReducer;

#[derive(Debug, Clone, Default)]
pub struct MendelJohn {
    config: ReductionConfig,
}

impl MendelJohn {
    pub fn new(config: ReductionConfig) -> Self {
        MendelJohn { config }
    }
}

impl TypeReducer for MendelJohn {
    type Input = GeneralType2FuzzySet;
    type Output = Type1FuzzySet;

    fn name(&self) -> &'static str {
        "Mendel-John"
    }

    fn config(&self) -> &ReductionConfig {
        &self.config
    }

    fn reduce(&self, set: &GeneralType2FuzzySet) -> ReductionResult<Type1FuzzySet> {
        self.config.validate()?;
        let count = set.embedded_type2_sets_count();
        if let Some(limit) = self.config.max_embedded_sets {
            if count > limit {
                return Err(ReductionError::TooManyEmbeddedSets { count, limit });
            }
        }
        info!(embedded_sets = count, "Mendel-John enumeration");

        let mut centroid = Type1FuzzySet::new();
        for (index, embedded) in set.embedded_type2_sets().enumerate() {
            let (numerator, denominator, grade) = embedded.iter().fold(
                (0.0, 0.0, 1.0f64),
                |(num, den, grade), point| {
                    (
                        num + point.secondary * point.primary,
                        den + point.secondary,
                        grade.min(point.grade),
                    )
                },
            );
            if denominator == 0.0 {
                continue;
            }
            let value = round_to(numerator / denominator, self.config.precision);
            if self.config.information.is_full() {
                debug!(index, centroid = value, grade, "embedded set");
            }
            centroid.add_element(value, grade)?;
        }
        Ok(centroid)
    }
}

/// Mendel-John centroid of `set` with the given configuration.
pub fn mendel_john(
    set: &GeneralType2FuzzySet,
    config: &ReductionConfig,
) -> ReductionResult<Type1FuzzySet> {
    MendelJohn::new(config.clone()).reduce(set)
}
