//! Interval type-2 fuzzy sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::crisp::CrispSet;
use crate::error::{FuzzySetError, Result};
use crate::general::GeneralType2FuzzySet;
use crate::key::FuzzyKey;
use crate::util::{ensure_finite, in_unit_interval};

/// An interval type-2 fuzzy set: each primary domain value maps to a
/// membership interval `[lower, upper] ⊆ [0, 1]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntervalType2FuzzySet {
    intervals: BTreeMap<FuzzyKey, CrispSet>,
}

impl IntervalType2FuzzySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Footprint of uncertainty of a general type-2 set, its z-slice at 0.
    pub fn from_general_type2_set(set: &GeneralType2FuzzySet) -> Self {
        set.slice_at(0.0)
    }

    /// Build a set from parallel upper (`hmf`) and lower (`lmf`) membership
    /// function samples.
    pub fn from_hmf_lmf(domain: &[f64], hmf: &[f64], lmf: &[f64]) -> Result<Self> {
        if domain.len() != hmf.len() || domain.len() != lmf.len() {
            return Err(FuzzySetError::DimensionMismatch(format!(
                "domain has {} values but the upper function has {} and the lower function {}",
                domain.len(),
                hmf.len(),
                lmf.len()
            )));
        }
        let mut set = IntervalType2FuzzySet::new();
        for ((&x, &upper), &lower) in domain.iter().zip(hmf).zip(lmf) {
            set.add_element_from_values(x, lower, upper)?;
        }
        Ok(set)
    }

    /// Union `interval` into the interval stored at `x`. Empty intervals are
    /// ignored.
    pub fn add_element(&mut self, x: f64, interval: CrispSet) -> Result<()> {
        ensure_finite("primary domain value", x)?;
        let Some((lower, upper)) = interval.bounds() else {
            return Ok(());
        };
        if !in_unit_interval(lower) || !in_unit_interval(upper) {
            return Err(FuzzySetError::IntervalOutOfRange { x, lower, upper });
        }
        self.insert_union(x, interval);
        Ok(())
    }

    pub fn add_element_from_values(&mut self, x: f64, lower: f64, upper: f64) -> Result<()> {
        self.add_element(x, CrispSet::interval(lower, upper)?)
    }

    pub(crate) fn insert_union(&mut self, x: f64, interval: CrispSet) {
        if interval.is_empty() {
            return;
        }
        self.intervals
            .entry(FuzzyKey::new(x))
            .and_modify(|existing| existing.union(&interval))
            .or_insert(interval);
    }

    pub fn get(&self, x: f64) -> Result<&CrispSet> {
        self.intervals
            .get(&FuzzyKey::new(x))
            .ok_or(FuzzySetError::PrimaryValueNotFound(x))
    }

    pub fn primary_domain(&self) -> Vec<f64> {
        self.intervals.keys().map(|k| k.value()).collect()
    }

    /// The primary domain value at index `len / 2`.
    pub fn mid_domain_element(&self) -> Option<f64> {
        self.intervals
            .keys()
            .nth(self.intervals.len() / 2)
            .map(|k| k.value())
    }

    /// Lower membership grades in ascending primary order.
    pub fn lower_membership_function(&self) -> Vec<f64> {
        self.intervals.values().filter_map(CrispSet::left).collect()
    }

    /// Upper membership grades in ascending primary order.
    pub fn higher_membership_function(&self) -> Vec<f64> {
        self.intervals.values().filter_map(CrispSet::right).collect()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// `(x, interval)` pairs in ascending `x`.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &CrispSet)> + '_ {
        self.intervals.iter().map(|(k, c)| (k.value(), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_element_unions() {
        let mut set = IntervalType2FuzzySet::new();
        set.add_element_from_values(1.0, 0.2, 0.4).unwrap();
        set.add_element_from_values(1.0, 0.3, 0.7).unwrap();
        assert_eq!(set.get(1.0).unwrap().bounds(), Some((0.2, 0.7)));

        set.add_element(2.0, CrispSet::empty()).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_range_checks() {
        let mut set = IntervalType2FuzzySet::new();
        assert!(matches!(
            set.add_element_from_values(1.0, 0.2, 1.4),
            Err(FuzzySetError::IntervalOutOfRange { .. })
        ));
        assert!(matches!(
            set.add_element_from_values(1.0, 0.8, 0.4),
            Err(FuzzySetError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_membership_functions() {
        let set = IntervalType2FuzzySet::from_hmf_lmf(
            &[3.0, 1.0, 2.0],
            &[0.5, 0.9, 1.0],
            &[0.1, 0.2, 0.6],
        )
        .unwrap();
        assert_eq!(set.primary_domain(), vec![1.0, 2.0, 3.0]);
        assert_eq!(set.lower_membership_function(), vec![0.2, 0.6, 0.1]);
        assert_eq!(set.higher_membership_function(), vec![0.9, 1.0, 0.5]);
        assert_eq!(set.mid_domain_element(), Some(2.0));
    }

    #[test]
    fn test_from_hmf_lmf_length_check() {
        assert!(matches!(
            IntervalType2FuzzySet::from_hmf_lmf(&[1.0, 2.0], &[0.5], &[0.1, 0.2]),
            Err(FuzzySetError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_from_general_type2_set() {
        let mut general = GeneralType2FuzzySet::new();
        general.add_element(1.0, 0.1, 0.5).unwrap();
        general.add_element(1.0, 0.6, 1.0).unwrap();
        general.add_element(2.0, 0.4, 0.0).unwrap();
        let set = IntervalType2FuzzySet::from_general_type2_set(&general);
        assert_eq!(set.primary_domain(), vec![1.0]);
        assert_eq!(set.get(1.0).unwrap().bounds(), Some((0.1, 0.6)));
        assert!(set.get(2.0).is_err());
    }

    #[test]
    fn test_mid_domain_element_even() {
        let mut set = IntervalType2FuzzySet::new();
        for x in [1.0, 2.0, 3.0, 4.0] {
            set.add_element_from_values(x, 0.1, 0.2).unwrap();
        }
        assert_eq!(set.mid_domain_element(), Some(3.0));
        assert_eq!(IntervalType2FuzzySet::new().mid_domain_element(), None);
    }
}
