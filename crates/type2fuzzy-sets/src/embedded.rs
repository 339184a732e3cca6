//! Lazy enumeration of the embedded type-2 sets of a general type-2 set.

use serde::{Deserialize, Serialize};

use crate::general::GeneralType2FuzzySet;

/// One `(grade, u, x)` choice of an embedded type-2 set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedPoint {
    pub grade: f64,
    pub secondary: f64,
    pub primary: f64,
}

/// Iterator over every combination of one non-zero `(u, grade)` point per
/// primary domain value.
///
/// Works like an odometer over the per-slice supports: the first primary
/// value varies slowest, the last fastest, and each slice is walked in
/// ascending `u`. A set with no primary values, or with a slice whose
/// secondary grades are all zero, has no embedded sets.
#[derive(Debug, Clone)]
pub struct EmbeddedSets {
    slices: Vec<(f64, Vec<(f64, f64)>)>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl EmbeddedSets {
    pub(crate) fn new(set: &GeneralType2FuzzySet) -> Self {
        let slices: Vec<(f64, Vec<(f64, f64)>)> = set
            .iter()
            .map(|(x, secondary)| (x, secondary.support().collect()))
            .collect();
        let exhausted = slices.is_empty() || slices.iter().any(|(_, points)| points.is_empty());
        EmbeddedSets {
            indices: vec![0; slices.len()],
            slices,
            exhausted,
        }
    }

    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.slices[pos].1.len() {
                return;
            }
            self.indices[pos] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for EmbeddedSets {
    type Item = Vec<EmbeddedPoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self
            .indices
            .iter()
            .zip(&self.slices)
            .map(|(&i, (x, points))| {
                let (u, grade) = points[i];
                EmbeddedPoint {
                    grade,
                    secondary: u,
                    primary: *x,
                }
            })
            .collect();
        self.advance();
        Some(item)
    }
}
