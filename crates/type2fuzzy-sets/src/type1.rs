//! Type-1 fuzzy sets: a membership degree per domain value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::alpha_cut::AlphaCutType1FuzzySet;
use crate::crisp::CrispSet;
use crate::error::{FuzzySetError, Result};
use crate::key::FuzzyKey;
use crate::util::ensure_finite;

/// A discrete type-1 fuzzy set `x -> μ(x)`.
///
/// Domain values absent from the set have membership 0. Elements are kept in
/// ascending domain order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Type1FuzzySet {
    elements: BTreeMap<FuzzyKey, f64>,
}

impl Type1FuzzySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `x` with the given degree, keeping the larger degree if `x` is
    /// already present.
    pub fn add_element(&mut self, x: f64, degree: f64) -> Result<()> {
        ensure_finite("domain value", x)?;
        ensure_finite("degree of membership", degree)?;
        if !(0.0..=1.0).contains(&degree) {
            return Err(FuzzySetError::MembershipOutOfRange { x, degree });
        }
        self.insert_max(x, degree);
        Ok(())
    }

    pub(crate) fn insert_max(&mut self, x: f64, degree: f64) {
        self.elements
            .entry(FuzzyKey::new(x))
            .and_modify(|d| *d = d.max(degree))
            .or_insert(degree);
    }

    /// Membership of `x`, 0 if absent.
    pub fn membership(&self, x: f64) -> f64 {
        self.elements
            .get(&FuzzyKey::new(x))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn contains(&self, x: f64) -> bool {
        self.elements.contains_key(&FuzzyKey::new(x))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// `(x, μ)` pairs in ascending `x`.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (f64, f64)> + '_ {
        self.elements.iter().map(|(k, &d)| (k.value(), d))
    }

    /// Elements with non-zero membership.
    pub fn support(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.iter().filter(|&(_, d)| d > 0.0)
    }

    pub fn domain_elements(&self) -> Vec<f64> {
        self.elements.keys().map(|k| k.value()).collect()
    }

    pub fn degrees(&self) -> Vec<f64> {
        self.elements.values().copied().collect()
    }

    /// Largest membership degree, 0 for an empty set.
    pub fn height(&self) -> f64 {
        self.elements.values().copied().fold(0.0, f64::max)
    }

    /// The crisp interval spanning every `x` with `μ(x) >= alpha`.
    ///
    /// At `alpha <= 0` only strictly positive memberships count. Returns an
    /// empty crisp set when nothing qualifies.
    pub fn alpha_cut(&self, alpha: f64) -> CrispSet {
        let mut qualifying = self
            .iter()
            .filter(|&(_, d)| if alpha <= 0.0 { d > 0.0 } else { d >= alpha })
            .map(|(x, _)| x);

        match qualifying.next() {
            None => CrispSet::empty(),
            Some(first) => {
                let last = qualifying.last().unwrap_or(first);
                CrispSet::from_ordered(first, last)
            }
        }
    }

    /// The support's extent, `alpha_cut(0)`.
    pub fn domain_limits(&self) -> CrispSet {
        self.alpha_cut(0.0)
    }

    /// Extension-principle maximum: `max(x1, x2)` with degree `min(μ1, μ2)`
    /// for every pair of elements.
    pub fn join(&self, other: &Type1FuzzySet) -> Type1FuzzySet {
        self.pairwise(other, f64::max)
    }

    /// Extension-principle minimum: `min(x1, x2)` with degree `min(μ1, μ2)`.
    pub fn meet(&self, other: &Type1FuzzySet) -> Type1FuzzySet {
        self.pairwise(other, f64::min)
    }

    fn pairwise(&self, other: &Type1FuzzySet, pick: fn(f64, f64) -> f64) -> Type1FuzzySet {
        let mut result = Type1FuzzySet::new();
        for (x1, d1) in self.iter() {
            for (x2, d2) in other.iter() {
                result.insert_max(pick(x1, x2), d1.min(d2));
            }
        }
        result
    }

    /// Maps every `x` to `1 - x`, degrees unchanged.
    pub fn negation(&self) -> Type1FuzzySet {
        let mut result = Type1FuzzySet::new();
        for (x, d) in self.iter() {
            result.insert_max(1.0 - x, d);
        }
        result
    }

    /// Image of the set under `f`, max-merging elements that collide.
    pub fn extend<F>(&self, f: F) -> Result<Type1FuzzySet>
    where
        F: Fn(f64) -> f64,
    {
        let mut result = Type1FuzzySet::new();
        for (x, d) in self.iter() {
            let image = f(x);
            ensure_finite("extended domain value", image)?;
            result.insert_max(image, d);
        }
        Ok(result)
    }

    /// Pointwise maximum over the union of both domains.
    pub fn union(&self, other: &Type1FuzzySet) -> Type1FuzzySet {
        let mut result = self.clone();
        for (x, d) in other.iter() {
            result.insert_max(x, d);
        }
        result
    }

    /// Pointwise minimum over the union of both domains; a value missing from
    /// one operand has membership 0 there.
    pub fn intersection(&self, other: &Type1FuzzySet) -> Type1FuzzySet {
        let mut elements = BTreeMap::new();
        for key in self.elements.keys().chain(other.elements.keys()) {
            let a = self.elements.get(key).copied().unwrap_or(0.0);
            let b = other.elements.get(key).copied().unwrap_or(0.0);
            elements.insert(*key, a.min(b));
        }
        Type1FuzzySet { elements }
    }

    /// Rebuild a type-1 set on `domain` from its alpha-cut decomposition:
    /// `μ(x)` is the largest level whose cut contains `x`.
    pub fn from_alpha_cut_set(set: &AlphaCutType1FuzzySet, domain: &[f64]) -> Result<Self> {
        let mut result = Type1FuzzySet::new();
        for &x in domain {
            let degree = set
                .iter()
                .filter(|(_, cut)| cut.contains(x))
                .map(|(alpha, _)| alpha)
                .fold(0.0, f64::max);
            result.add_element(x, degree)?;
        }
        Ok(result)
    }
}

impl FromIterator<(f64, f64)> for Type1FuzzySet {
    /// Collects `(x, μ)` pairs; degrees are clamped into `[0, 1]` and
    /// non-finite pairs dropped. Use [`Type1FuzzySet::add_element`] for
    /// validated insertion.
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut set = Type1FuzzySet::new();
        for (x, d) in iter {
            if x.is_finite() && d.is_finite() {
                set.insert_max(x, d.clamp(0.0, 1.0));
            }
        }
        set
    }
}
