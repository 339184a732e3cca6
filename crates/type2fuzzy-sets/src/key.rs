//! Ordered map keys for floating-point domain values.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::util::round_to;

/// Decimal places kept by [`FuzzyKey`].
pub const KEY_DECIMALS: u32 = 6;

/// A finite `f64` rounded to [`KEY_DECIMALS`] places.
///
/// Values that only differ by accumulated floating-point noise land on the
/// same key (`0.1 + 0.2` and `0.3` compare equal), and `-0.0` is folded onto
/// `0.0`. Ordering is plain numeric ordering, so a `BTreeMap<FuzzyKey, _>`
/// iterates its domain in ascending order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct FuzzyKey(f64);

impl FuzzyKey {
    pub fn new(value: f64) -> Self {
        let rounded = round_to(value, KEY_DECIMALS);
        if rounded == 0.0 {
            FuzzyKey(0.0)
        } else {
            FuzzyKey(rounded)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for FuzzyKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FuzzyKey {}

impl PartialOrd for FuzzyKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FuzzyKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for FuzzyKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for FuzzyKey {
    fn from(value: f64) -> Self {
        FuzzyKey::new(value)
    }
}

impl From<FuzzyKey> for f64 {
    fn from(key: FuzzyKey) -> Self {
        key.0
    }
}

impl fmt::Display for FuzzyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_noise_collapses() {
        assert_eq!(FuzzyKey::new(0.1 + 0.2), FuzzyKey::new(0.3));
        assert_ne!(FuzzyKey::new(0.3), FuzzyKey::new(0.300002));
    }

    #[test]
    fn test_negative_zero() {
        let key = FuzzyKey::new(-0.0);
        assert_eq!(key, FuzzyKey::new(0.0));
        assert!(key.value().is_sign_positive());
        assert_eq!(FuzzyKey::new(-0.0000001), FuzzyKey::new(0.0));
    }

    #[test]
    fn test_ordering() {
        let mut map = BTreeMap::new();
        for x in [3.0, -1.0, 2.5, 0.0] {
            map.insert(FuzzyKey::new(x), x);
        }
        let keys: Vec<f64> = map.keys().map(|k| k.value()).collect();
        assert_eq!(keys, vec![-1.0, 0.0, 2.5, 3.0]);
    }

    #[test]
    fn test_serde_normalizes() {
        let key: FuzzyKey = serde_json::from_str("0.30000000000000004").unwrap();
        assert_eq!(key.value(), 0.3);
        assert_eq!(serde_json::to_string(&key).unwrap(), "0.3");
    }
}
