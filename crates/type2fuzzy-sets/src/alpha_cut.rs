//! Alpha-cut decomposition of a type-1 fuzzy set.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::crisp::CrispSet;
use crate::error::{FuzzySetError, Result};
use crate::key::FuzzyKey;
use crate::type1::Type1FuzzySet;
use crate::util::{decimal_digits, ensure_level, linspace, round_to};

/// A type-1 fuzzy set stored as `α -> CrispSet`.
///
/// Only non-empty cuts are kept. Cuts are expected to shrink as `α` grows,
/// but this is not enforced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlphaCutType1FuzzySet {
    cuts: BTreeMap<FuzzyKey, CrispSet>,
}

impl AlphaCutType1FuzzySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decompose `set` into `number_of_cuts` evenly spaced levels over `[0, 1]`.
    ///
    /// Levels are rounded to as many decimals as `number_of_cuts` has digits.
    pub fn from_type1_set(set: &Type1FuzzySet, number_of_cuts: usize) -> Result<Self> {
        if number_of_cuts == 0 {
            return Err(FuzzySetError::InvalidParameter(
                "number of alpha-cuts must be at least 1".to_string(),
            ));
        }
        let decimals = decimal_digits(number_of_cuts);
        let mut result = AlphaCutType1FuzzySet::new();
        for alpha in linspace(0.0, 1.0, number_of_cuts) {
            let alpha = round_to(alpha, decimals);
            result.add_element(alpha, set.alpha_cut(alpha))?;
        }
        Ok(result)
    }

    /// Store `cut` at level `alpha`, replacing any previous cut there.
    /// Empty cuts are ignored.
    pub fn add_element(&mut self, alpha: f64, cut: CrispSet) -> Result<()> {
        ensure_level(alpha)?;
        if !cut.is_empty() {
            self.cuts.insert(FuzzyKey::new(alpha), cut);
        }
        Ok(())
    }

    pub fn get(&self, alpha: f64) -> Result<&CrispSet> {
        self.cuts
            .get(&FuzzyKey::new(alpha))
            .ok_or(FuzzySetError::AlphaCutNotFound(alpha))
    }

    /// Levels present, ascending.
    pub fn cuts(&self) -> Vec<f64> {
        self.cuts.keys().map(|k| k.value()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &CrispSet)> + '_ {
        self.cuts.iter().map(|(k, c)| (k.value(), c))
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }
}

impl fmt::Display for AlphaCutType1FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (alpha, cut) in self.iter() {
            writeln!(f, "{:.5} : {}", alpha, cut)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Type1FuzzySet {
        let mut set = Type1FuzzySet::new();
        set.add_element(0.0, 0.0).unwrap();
        set.add_element(1.0, 0.5).unwrap();
        set.add_element(2.0, 1.0).unwrap();
        set.add_element(3.0, 0.5).unwrap();
        set.add_element(4.0, 0.0).unwrap();
        set
    }

    #[test]
    fn test_from_type1_set() {
        let cuts = AlphaCutType1FuzzySet::from_type1_set(&triangle(), 3).unwrap();
        assert_eq!(cuts.cuts(), vec![0.0, 0.5, 1.0]);
        assert_eq!(cuts.get(0.0).unwrap().bounds(), Some((1.0, 3.0)));
        assert_eq!(cuts.get(0.5).unwrap().bounds(), Some((1.0, 3.0)));
        assert_eq!(cuts.get(1.0).unwrap().bounds(), Some((2.0, 2.0)));
    }

    #[test]
    fn test_level_rounding() {
        let cuts = AlphaCutType1FuzzySet::from_type1_set(&triangle(), 4).unwrap();
        // 1/3 and 2/3 rounded to a single decimal
        assert_eq!(cuts.cuts(), vec![0.0, 0.3, 0.7, 1.0]);
    }

    #[test]
    fn test_zero_cuts_rejected() {
        assert!(matches!(
            AlphaCutType1FuzzySet::from_type1_set(&triangle(), 0),
            Err(FuzzySetError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_add_element() {
        let mut cuts = AlphaCutType1FuzzySet::new();
        cuts.add_element(0.5, CrispSet::interval(1.0, 2.0).unwrap())
            .unwrap();
        cuts.add_element(0.7, CrispSet::empty()).unwrap();
        assert_eq!(cuts.len(), 1);
        assert!(cuts.add_element(1.5, CrispSet::point(1.0).unwrap()).is_err());
        assert!(matches!(
            cuts.get(0.7),
            Err(FuzzySetError::AlphaCutNotFound(_))
        ));
    }

    #[test]
    fn test_display() {
        let mut cuts = AlphaCutType1FuzzySet::new();
        cuts.add_element(0.5, CrispSet::interval(1.0, 2.0).unwrap())
            .unwrap();
        assert_eq!(cuts.to_string(), "0.50000 : [1.00000, 2.00000]\n");
    }
}
