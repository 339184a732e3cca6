//! General type-2 fuzzy sets.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::crisp::CrispSet;
use crate::embedded::EmbeddedSets;
use crate::error::{FuzzySetError, Result};
use crate::interval::IntervalType2FuzzySet;
use crate::key::FuzzyKey;
use crate::type1::Type1FuzzySet;
use crate::util::{ensure_finite, ensure_level, in_unit_interval};

/// Index of the value closest to `target`; the first one wins a tie.
fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - target).abs().total_cmp(&(*b - target).abs()))
        .map(|(i, _)| i)
}

/// A general type-2 fuzzy set: each primary domain value `x` maps to a
/// secondary membership function over `u ∈ [0, 1]`.
///
/// Secondary grades of zero are stored; they take part in equality and in
/// [`to_array_explicit`](Self::to_array_explicit) but never in the footprint
/// of uncertainty or the embedded sets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneralType2FuzzySet {
    vertical_slices: BTreeMap<FuzzyKey, Type1FuzzySet>,
}

impl GeneralType2FuzzySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the point `(x, u)` with the given secondary grade.
    pub fn add_element(&mut self, x: f64, u: f64, grade: f64) -> Result<()> {
        ensure_finite("primary domain value", x)?;
        ensure_finite("secondary domain value", u)?;
        ensure_finite("secondary grade", grade)?;
        if !in_unit_interval(grade) {
            return Err(FuzzySetError::SecondaryGradeOutOfRange { x, u, grade });
        }
        if !in_unit_interval(u) {
            return Err(FuzzySetError::SecondaryDomainOutOfRange { x, u });
        }
        self.vertical_slices
            .entry(FuzzyKey::new(x))
            .or_default()
            .insert_max(u, grade);
        Ok(())
    }

    /// Add every point of `secondary` as the secondary function at `x`.
    pub fn add_membership_function(&mut self, x: f64, secondary: &Type1FuzzySet) -> Result<()> {
        for (u, grade) in secondary.iter() {
            self.add_element(x, u, grade)?;
        }
        Ok(())
    }

    /// Build a set from a grade matrix with one row per secondary value and
    /// one column per primary value.
    pub fn from_array(primary: &[f64], secondary: &[f64], grades: &[Vec<f64>]) -> Result<Self> {
        if grades.len() != secondary.len() {
            return Err(FuzzySetError::DimensionMismatch(format!(
                "{} grade rows for {} secondary domain values",
                grades.len(),
                secondary.len()
            )));
        }
        let mut set = GeneralType2FuzzySet::new();
        for (row, &u) in grades.iter().zip(secondary) {
            if row.len() != primary.len() {
                return Err(FuzzySetError::DimensionMismatch(format!(
                    "grade row of length {} for {} primary domain values",
                    row.len(),
                    primary.len()
                )));
            }
            for (&grade, &x) in row.iter().zip(primary) {
                set.add_element(x, u, grade)?;
            }
        }
        Ok(set)
    }

    /// Explode the set into `(primary, secondary, grades)`, the inverse of
    /// [`from_array`](Self::from_array). Missing points get grade 0.
    pub fn to_array_explicit(&self) -> (Vec<f64>, Vec<f64>, Vec<Vec<f64>>) {
        let primary = self.primary_domain();
        let secondary: Vec<f64> = self
            .vertical_slices
            .values()
            .flat_map(|s| s.domain_elements())
            .map(FuzzyKey::new)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(FuzzyKey::value)
            .collect();
        let grades = secondary
            .iter()
            .map(|&u| {
                self.vertical_slices
                    .values()
                    .map(|s| s.membership(u))
                    .collect()
            })
            .collect();
        (primary, secondary, grades)
    }

    /// Grade matrix over caller-chosen domains, rows per `secondary` value and
    /// columns per `primary` value. Every stored point moves to the nearest
    /// given value; points landing on the same cell keep the larger grade.
    pub fn to_array_implicit(&self, primary: &[f64], secondary: &[f64]) -> Result<Vec<Vec<f64>>> {
        if !self.is_empty() && (primary.is_empty() || secondary.is_empty()) {
            return Err(FuzzySetError::DimensionMismatch(
                "cannot place a non-empty set on an empty domain".to_string(),
            ));
        }
        let mut grades = vec![vec![0.0_f64; primary.len()]; secondary.len()];
        for (x, slice) in self.iter() {
            let Some(column) = nearest_index(primary, x) else {
                continue;
            };
            for (u, grade) in slice.iter() {
                if let Some(row) = nearest_index(secondary, u) {
                    grades[row][column] = grades[row][column].max(grade);
                }
            }
        }
        Ok(grades)
    }

    /// Primary domain values, ascending.
    pub fn primary_domain(&self) -> Vec<f64> {
        self.vertical_slices.keys().map(|k| k.value()).collect()
    }

    /// The secondary membership function at `x`.
    pub fn get(&self, x: f64) -> Result<&Type1FuzzySet> {
        self.vertical_slices
            .get(&FuzzyKey::new(x))
            .ok_or(FuzzySetError::PrimaryValueNotFound(x))
    }

    pub fn vertical_slice(&self, x: f64) -> Result<&Type1FuzzySet> {
        self.get(x)
    }

    /// Secondary domain values recorded at `x`.
    pub fn primary_membership(&self, x: f64) -> Result<Vec<f64>> {
        Ok(self.get(x)?.domain_elements())
    }

    pub fn secondary_grade(&self, x: f64, u: f64) -> Result<f64> {
        if !in_unit_interval(u) {
            return Err(FuzzySetError::SecondaryDomainOutOfRange { x, u });
        }
        Ok(self.get(x)?.membership(u))
    }

    pub fn len(&self) -> usize {
        self.vertical_slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertical_slices.is_empty()
    }

    /// `(x, secondary function)` pairs in ascending `x`.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &Type1FuzzySet)> + '_ {
        self.vertical_slices.iter().map(|(k, s)| (k.value(), s))
    }

    /// Per `x`, the interval of `u` carrying a non-zero grade. Values of `x`
    /// whose secondary grades are all zero are left out.
    pub fn footprint_of_uncertainty(&self) -> Vec<(f64, CrispSet)> {
        self.iter()
            .map(|(x, secondary)| (x, secondary.alpha_cut(0.0)))
            .filter(|(_, cut)| !cut.is_empty())
            .collect()
    }

    /// The interval type-2 set obtained by alpha-cutting every secondary
    /// function at level `z`.
    pub fn z_slice(&self, z: f64) -> Result<IntervalType2FuzzySet> {
        ensure_level(z)?;
        Ok(self.slice_at(z))
    }

    pub(crate) fn slice_at(&self, z: f64) -> IntervalType2FuzzySet {
        let mut slice = IntervalType2FuzzySet::new();
        for (x, secondary) in self.iter() {
            slice.insert_union(x, secondary.alpha_cut(z));
        }
        slice
    }

    /// Lazily enumerate every embedded type-2 set.
    pub fn embedded_type2_sets(&self) -> EmbeddedSets {
        EmbeddedSets::new(self)
    }

    /// Number of embedded type-2 sets, saturating at `usize::MAX`.
    pub fn embedded_type2_sets_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.vertical_slices
            .values()
            .map(|s| s.support().count())
            .fold(1usize, usize::saturating_mul)
    }

    /// Per-`x` join of the secondary functions.
    pub fn union(&self, other: &GeneralType2FuzzySet) -> GeneralType2FuzzySet {
        self.combine(other, Type1FuzzySet::join)
    }

    /// Per-`x` meet of the secondary functions.
    pub fn intersection(&self, other: &GeneralType2FuzzySet) -> GeneralType2FuzzySet {
        self.combine(other, Type1FuzzySet::meet)
    }

    /// Per-`x` negation of the secondary functions.
    pub fn complement(&self) -> GeneralType2FuzzySet {
        GeneralType2FuzzySet {
            vertical_slices: self
                .vertical_slices
                .iter()
                .map(|(k, s)| (*k, s.negation()))
                .collect(),
        }
    }

    // An x present in only one operand keeps that operand's function.
    fn combine(
        &self,
        other: &GeneralType2FuzzySet,
        op: fn(&Type1FuzzySet, &Type1FuzzySet) -> Type1FuzzySet,
    ) -> GeneralType2FuzzySet {
        let mut vertical_slices = self.vertical_slices.clone();
        for (key, theirs) in &other.vertical_slices {
            let merged = match self.vertical_slices.get(key) {
                Some(ours) => op(ours, theirs),
                None => theirs.clone(),
            };
            vertical_slices.insert(*key, merged);
        }
        GeneralType2FuzzySet { vertical_slices }
    }
}
