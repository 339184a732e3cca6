//! Partial-centroid type reduction.
//!
//! Produces the same centroid as Mendel-John without enumerating embedded
//! sets. Walking the primary domain in ascending order, a frontier maps each
//! reachable partial sum `(N, D) = (Σ u·x, Σ u)` to the best minimum grade of
//! any path reaching it. Paths that land on the same `(N, D)` collapse into
//! one entry, which keeps the frontier far smaller than the product of the
//! slice supports.

use std::collections::BTreeMap;
use std::mem;

use tracing::{debug, info};
use type2fuzzy_sets::{round_to, FuzzyKey, GeneralType2FuzzySet, Type1FuzzySet};

use crate::config::ReductionConfig;
use crate::error::ReductionResult;
use crate::traits::TypeReducer;

/// Partial sums are rounded to this many decimals before keying the frontier.
pub const PARTIAL_SUM_DECIMALS: u32 = 5;

type Frontier = BTreeMap<(FuzzyKey, FuzzyKey), f64>;

#[derive(Debug, Clone, Default)]
pub struct PartialCentroid {
    config: ReductionConfig,
}

impl PartialCentroid {
    pub fn new(config: ReductionConfig) -> Self {
        PartialCentroid { config }
    }
}

impl TypeReducer for PartialCentroid {
    type Input = GeneralType2FuzzySet;
    type Output = Type1FuzzySet;

    fn name(&self) -> &'static str {
        "partial-centroid"
    }

    fn config(&self) -> &ReductionConfig {
        &self.config
    }

    fn reduce(&self, set: &GeneralType2FuzzySet) -> ReductionResult<Type1FuzzySet> {
        self.config.validate()?;

        let mut current = Frontier::new();
        current.insert((FuzzyKey::new(0.0), FuzzyKey::new(0.0)), 1.0);
        let mut next = Frontier::new();
        let mut largest_frontier = 1;

        for (x, secondary) in set.iter() {
            next.clear();
            for (&(n, d), &reached) in &current {
                for (u, grade) in secondary.support() {
                    let key = (
                        FuzzyKey::new(round_to(n.value() + u * x, PARTIAL_SUM_DECIMALS)),
                        FuzzyKey::new(round_to(d.value() + u, PARTIAL_SUM_DECIMALS)),
                    );
                    let grade = reached.min(grade);
                    next.entry(key)
                        .and_modify(|g| *g = g.max(grade))
                        .or_insert(grade);
                }
            }
            mem::swap(&mut current, &mut next);
            largest_frontier = largest_frontier.max(current.len());
            if self.config.information.is_full() {
                debug!(x, frontier = current.len(), "partial-centroid step");
            }
        }
        info!(largest_frontier, "partial-centroid reduction");

        let mut centroid = Type1FuzzySet::new();
        for ((n, d), grade) in current {
            if d.value() == 0.0 {
                continue;
            }
            let value = round_to(n.value() / d.value(), self.config.precision);
            centroid.add_element(value, grade)?;
        }
        Ok(centroid)
    }
}

/// Partial-centroid reduction of `set` with the given configuration.
pub fn partial_centroid(
    set: &GeneralType2FuzzySet,
    config: &ReductionConfig,
) -> ReductionResult<Type1FuzzySet> {
    PartialCentroid::new(config.clone()).reduce(set)
}
