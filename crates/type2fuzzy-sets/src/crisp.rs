//! Closed real intervals.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzySetError, Result};
use crate::util::{ensure_finite, round_to};

/// A closed interval `[left, right]`.
///
/// Either bound may be unset; a set with an unset bound is empty.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CrispSet {
    left: Option<f64>,
    right: Option<f64>,
}

impl CrispSet {
    /// Create a crisp set from optional limits.
    ///
    /// Fails when both limits are given and `left > right`.
    pub fn new(left: Option<f64>, right: Option<f64>) -> Result<Self> {
        if let Some(l) = left {
            ensure_finite("left limit", l)?;
        }
        if let Some(r) = right {
            ensure_finite("right limit", r)?;
        }
        if let (Some(l), Some(r)) = (left, right) {
            if l > r {
                return Err(FuzzySetError::InvalidInterval { left: l, right: r });
            }
        }
        Ok(CrispSet { left, right })
    }

    pub fn interval(left: f64, right: f64) -> Result<Self> {
        Self::new(Some(left), Some(right))
    }

    pub fn point(value: f64) -> Result<Self> {
        Self::new(Some(value), Some(value))
    }

    pub fn empty() -> Self {
        CrispSet::default()
    }

    /// Internal constructor for limits already known to be ordered and finite.
    pub(crate) fn from_ordered(left: f64, right: f64) -> Self {
        debug_assert!(left <= right);
        CrispSet {
            left: Some(left),
            right: Some(right),
        }
    }

    pub fn left(&self) -> Option<f64> {
        self.left
    }

    pub fn right(&self) -> Option<f64> {
        self.right
    }

    /// Set the left limit, failing if it would exceed the right limit.
    pub fn set_left(&mut self, value: Option<f64>) -> Result<()> {
        if let Some(v) = value {
            ensure_finite("left limit", v)?;
            if let Some(r) = self.right {
                if v > r {
                    return Err(FuzzySetError::InvalidInterval { left: v, right: r });
                }
            }
        }
        self.left = value;
        Ok(())
    }

    /// Set the right limit, failing if it would fall below the left limit.
    pub fn set_right(&mut self, value: Option<f64>) -> Result<()> {
        if let Some(v) = value {
            ensure_finite("right limit", v)?;
            if let Some(l) = self.left {
                if l > v {
                    return Err(FuzzySetError::InvalidInterval { left: l, right: v });
                }
            }
        }
        self.right = value;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() || self.right.is_none()
    }

    /// Both limits, if the set is not empty.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match (self.left, self.right) {
            (Some(l), Some(r)) => Some((l, r)),
            _ => None,
        }
    }

    pub fn mid(&self) -> Result<f64> {
        self.bounds()
            .map(|(l, r)| (l + r) / 2.0)
            .ok_or_else(|| FuzzySetError::EmptySet("mid of an empty crisp set".to_string()))
    }

    pub fn width(&self) -> Option<f64> {
        self.bounds().map(|(l, r)| r - l)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.bounds().is_some_and(|(l, r)| l <= value && value <= r)
    }

    /// Widen this set to cover `other`. An empty operand changes nothing.
    pub fn union(&mut self, other: &CrispSet) {
        match (self.bounds(), other.bounds()) {
            (_, None) => {}
            (None, Some(_)) => *self = *other,
            (Some((l1, r1)), Some((l2, r2))) => {
                self.left = Some(l1.min(l2));
                self.right = Some(r1.max(r2));
            }
        }
    }

    /// Copy of this set with both limits rounded to `decimals` places.
    pub fn round(&self, decimals: u32) -> Self {
        CrispSet {
            left: self.left.map(|l| round_to(l, decimals)),
            right: self.right.map(|r| round_to(r, decimals)),
        }
    }
}

impl fmt::Display for CrispSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds() {
            None => write!(f, "[]"),
            Some((l, r)) if l == r => write!(f, "[{:.5}]", l),
            Some((l, r)) => write!(f, "[{:.5}, {:.5}]", l, r),
        }
    }
}
