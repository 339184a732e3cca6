//! Defuzzification of type-reduced sets into crisp values.
//!
//! # Defuzzification Methods
//!
//! - **Centroid**: `Σ x·μ / Σ μ` over the discrete type-1 centroid
//! - **Mean of Maximum (MOM)**: average of the values with the highest membership
//! - **Smallest of Maximum (SOM)**: leftmost value with the highest membership
//! - **Largest of Maximum (LOM)**: rightmost value with the highest membership
//!
//! Alpha-cut centroids produced by Hagras reduction are defuzzified with
//! [`zslice_centroid`], Karnik-Mendel intervals with [`interval_midpoint`].

use serde::{Deserialize, Serialize};
use type2fuzzy_sets::{AlphaCutType1FuzzySet, CrispSet, Type1FuzzySet};

use crate::error::{ReductionError, ReductionResult};

/// Defuzzification method selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefuzzificationMethod {
    /// Center of gravity
    #[default]
    Centroid,
    MeanOfMaximum,
    SmallestOfMaximum,
    LargestOfMaximum,
}

/// Defuzzify a type-1 set with the given method.
pub fn defuzzify(set: &Type1FuzzySet, method: DefuzzificationMethod) -> ReductionResult<f64> {
    match method {
        DefuzzificationMethod::Centroid => centroid(set),
        DefuzzificationMethod::MeanOfMaximum => mean_of_maximum(set),
        DefuzzificationMethod::SmallestOfMaximum => smallest_of_maximum(set),
        DefuzzificationMethod::LargestOfMaximum => largest_of_maximum(set),
    }
}

/// Centroid (center of gravity) defuzzification.
pub fn centroid(set: &Type1FuzzySet) -> ReductionResult<f64> {
    let (numerator, denominator) = set
        .iter()
        .fold((0.0, 0.0), |(num, den), (x, mu)| (num + x * mu, den + mu));
    if denominator == 0.0 {
        return Err(ReductionError::DegenerateCentroid(
            "type-1 set has no non-zero membership".to_string(),
        ));
    }
    Ok(numerator / denominator)
}

/// Domain values carrying the highest membership, ascending.
fn maxima(set: &Type1FuzzySet) -> ReductionResult<Vec<f64>> {
    if set.is_empty() {
        return Err(ReductionError::EmptyInput("type-1 set has no elements".to_string()));
    }
    let height = set.height();
    if height == 0.0 {
        return Err(ReductionError::DegenerateCentroid(
            "type-1 set has no non-zero membership".to_string(),
        ));
    }
    Ok(set
        .iter()
        .filter(|&(_, mu)| mu == height)
        .map(|(x, _)| x)
        .collect())
}

/// Mean of maximum defuzzification.
pub fn mean_of_maximum(set: &Type1FuzzySet) -> ReductionResult<f64> {
    let maxima = maxima(set)?;
    Ok(maxima.iter().sum::<f64>() / maxima.len() as f64)
}

/// Smallest of maximum defuzzification.
pub fn smallest_of_maximum(set: &Type1FuzzySet) -> ReductionResult<f64> {
    maxima(set)?
        .first()
        .copied()
        .ok_or_else(|| ReductionError::EmptyInput("no maximum".to_string()))
}

/// Largest of maximum defuzzification.
pub fn largest_of_maximum(set: &Type1FuzzySet) -> ReductionResult<f64> {
    maxima(set)?
        .last()
        .copied()
        .ok_or_else(|| ReductionError::EmptyInput("no maximum".to_string()))
}

/// Defuzzify an alpha-cut centroid: the mean of the cut midpoints weighted
/// by their level, `Σ z·mid(z) / Σ z`.
pub fn zslice_centroid(set: &AlphaCutType1FuzzySet) -> ReductionResult<f64> {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (z, cut) in set.iter() {
        numerator += z * cut.mid()?;
        denominator += z;
    }
    if denominator == 0.0 {
        return Err(ReductionError::DegenerateCentroid(
            "alpha-cut set has no cut above level 0".to_string(),
        ));
    }
    Ok(numerator / denominator)
}

/// Midpoint of a Karnik-Mendel centroid interval.
pub fn interval_midpoint(interval: &CrispSet) -> ReductionResult<f64> {
    Ok(interval.mid()?)
}
