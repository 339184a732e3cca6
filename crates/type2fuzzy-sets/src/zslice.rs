//! z-slice decomposition of a general type-2 fuzzy set.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzySetError, Result};
use crate::general::GeneralType2FuzzySet;
use crate::interval::IntervalType2FuzzySet;
use crate::key::FuzzyKey;
use crate::util::{ensure_level, linspace};

/// A general type-2 set approximated by interval type-2 slices at a finite
/// number of secondary levels `z`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ZSliceType2FuzzySet {
    slices: BTreeMap<FuzzyKey, IntervalType2FuzzySet>,
}

impl ZSliceType2FuzzySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slice `set` at `number_of_slices` levels evenly spaced over `[0, 1]`.
    /// Levels where the slice is empty are not stored.
    pub fn from_general_type2_set(
        set: &GeneralType2FuzzySet,
        number_of_slices: usize,
    ) -> Result<Self> {
        if number_of_slices == 0 {
            return Err(FuzzySetError::InvalidParameter(
                "number of z-slices must be at least 1".to_string(),
            ));
        }
        let mut result = ZSliceType2FuzzySet::new();
        for z in linspace(0.0, 1.0, number_of_slices) {
            result.insert(z, set.slice_at(z));
        }
        Ok(result)
    }

    /// Store `slice` at level `z`. Empty slices are ignored.
    pub fn add_element(&mut self, z: f64, slice: IntervalType2FuzzySet) -> Result<()> {
        ensure_level(z)?;
        self.insert(z, slice);
        Ok(())
    }

    fn insert(&mut self, z: f64, slice: IntervalType2FuzzySet) {
        if !slice.is_empty() {
            self.slices.insert(FuzzyKey::new(z), slice);
        }
    }

    pub fn get(&self, z: f64) -> Result<&IntervalType2FuzzySet> {
        self.slices
            .get(&FuzzyKey::new(z))
            .ok_or(FuzzySetError::ZSliceNotFound(z))
    }

    /// Stored levels, ascending.
    pub fn zslices(&self) -> Vec<f64> {
        self.slices.keys().map(|k| k.value()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &IntervalType2FuzzySet)> + '_ {
        self.slices.iter().map(|(k, s)| (k.value(), s))
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl fmt::Display for ZSliceType2FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (z, slice) in self.iter() {
            writeln!(f, "z = {:.4}", z)?;
            writeln!(f, "{}", slice)?;
        }
        Ok(())
    }
}
