//! Karnik-Mendel centroid of an interval type-2 fuzzy set.
//!
//! Each bound of the centroid interval is the fixed point of a weighted
//! average. Starting at the middle primary domain element, the estimate is
//! recomputed with the lower membership on one side of it and the upper
//! membership on the other, until it moves by no more than
//! [`CONVERGENCE_THRESHOLD`] or [`MAX_ITERATIONS`] rounds have run.

use std::fmt;

use tracing::{debug, warn};
use type2fuzzy_sets::{round_to, CrispSet, IntervalType2FuzzySet};

use crate::config::ReductionConfig;
use crate::error::{ReductionError, ReductionResult};
use crate::traits::TypeReducer;

pub const CONVERGENCE_THRESHOLD: f64 = 1e-5;
pub const MAX_ITERATIONS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Left,
    Right,
}

impl Bound {
    fn weight(self, x: f64, estimate: f64, lower: f64, upper: f64) -> f64 {
        match self {
            Bound::Left if x >= estimate => lower,
            Bound::Left => upper,
            Bound::Right if x <= estimate => lower,
            Bound::Right => upper,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Left => write!(f, "left"),
            Bound::Right => write!(f, "right"),
        }
    }
}

/// Karnik-Mendel reducer: interval type-2 set to centroid interval.
#[derive(Debug, Clone, Default)]
pub struct KarnikMendel {
    config: ReductionConfig,
}

impl KarnikMendel {
    pub fn new(config: ReductionConfig) -> Self {
        KarnikMendel { config }
    }

    fn bound(&self, bound: Bound, points: &[(f64, f64, f64)], mid: f64) -> f64 {
        let mut estimate = mid;
        for iteration in 1..=MAX_ITERATIONS {
            let (numerator, denominator) =
                points
                    .iter()
                    .fold((0.0, 0.0), |(num, den), &(x, lower, upper)| {
                        let weight = bound.weight(x, estimate, lower, upper);
                        (num + x * weight, den + weight)
                    });

            if denominator == 0.0 {
                warn!(
                    bound = %bound,
                    fallback = mid,
                    "zero membership weight in Karnik-Mendel iteration, using the mid domain element"
                );
                return mid;
            }

            let next = numerator / denominator;
            if self.config.information.is_full() {
                debug!(bound = %bound, iteration, previous = estimate, estimate = next, "Karnik-Mendel iteration");
            }
            let converged = (next - estimate).abs() <= CONVERGENCE_THRESHOLD;
            estimate = next;
            if converged {
                break;
            }
        }
        estimate
    }
}

impl TypeReducer for KarnikMendel {
    type Input = IntervalType2FuzzySet;
    type Output = CrispSet;

    fn name(&self) -> &'static str {
        "Karnik-Mendel"
    }

    fn config(&self) -> &ReductionConfig {
        &self.config
    }

    fn reduce(&self, set: &IntervalType2FuzzySet) -> ReductionResult<CrispSet> {
        self.config.validate()?;
        let mid = set.mid_domain_element().ok_or_else(|| {
            ReductionError::EmptyInput("interval type-2 set has no elements".to_string())
        })?;
        let points: Vec<(f64, f64, f64)> = set
            .iter()
            .filter_map(|(x, interval)| interval.bounds().map(|(l, u)| (x, l, u)))
            .collect();

        let left = round_to(self.bound(Bound::Left, &points, mid), self.config.precision);
        let right = round_to(self.bound(Bound::Right, &points, mid), self.config.precision);

        let (left, right) = if left <= right {
            (left, right)
        } else {
            warn!(left, right, "Karnik-Mendel bounds crossed, swapping");
            (right, left)
        };
        Ok(CrispSet::interval(left, right)?)
    }
}

/// Karnik-Mendel centroid of `set` with the given configuration.
pub fn karnik_mendel(
    set: &IntervalType2FuzzySet,
    config: &ReductionConfig,
) -> ReductionResult<CrispSet> {
    KarnikMendel::new(config.clone()).reduce(set)
}
