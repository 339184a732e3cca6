//! Reducer configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use type2fuzzy_sets::KEY_DECIMALS;

use crate::error::{ReductionError, ReductionResult};

/// Default number of decimals centroid values are rounded to.
pub const DEFAULT_PRECISION: u32 = 5;

/// Largest accepted rounding precision. Type-1 centroids are keyed by
/// [`FuzzyKey`](type2fuzzy_sets::FuzzyKey), which keeps this many decimals.
pub const MAX_PRECISION: u32 = KEY_DECIMALS;

/// Default cap on the number of embedded sets Mendel-John will enumerate.
pub const DEFAULT_MAX_EMBEDDED_SETS: usize = 1_000_000;

/// How much a reducer narrates through the logging layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Information {
    /// Only warnings and summaries
    #[default]
    None,
    /// Emit a `debug` event per iteration / embedded set / frontier step
    Full,
}

impl Information {
    pub fn is_full(self) -> bool {
        self == Information::Full
    }
}

impl fmt::Display for Information {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Information::None => write!(f, "none"),
            Information::Full => write!(f, "full"),
        }
    }
}

impl FromStr for Information {
    type Err = ReductionError;

    fn from_str(s: &str) -> ReductionResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Information::None),
            "full" => Ok(Information::Full),
            other => Err(ReductionError::InvalidParameter(format!(
                "unknown information level '{}', expected 'none' or 'full'",
                other
            ))),
        }
    }
}

/// Settings shared by all reducers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionConfig {
    /// Decimal places centroid values are rounded to
    pub precision: u32,
    pub information: Information,
    /// Mendel-John refuses inputs with more embedded sets than this; `None`
    /// disables the check
    pub max_embedded_sets: Option<usize>,
    /// Run independent per-slice reductions on the rayon pool
    pub parallel: bool,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        ReductionConfig {
            precision: DEFAULT_PRECISION,
            information: Information::None,
            max_embedded_sets: Some(DEFAULT_MAX_EMBEDDED_SETS),
            parallel: false,
        }
    }
}

impl ReductionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full key precision and no enumeration cap.
    pub fn exact() -> Self {
        ReductionConfig {
            precision: MAX_PRECISION,
            information: Information::None,
            max_embedded_sets: None,
            parallel: false,
        }
    }

    /// Parallel slices and a tight enumeration cap.
    pub fn fast() -> Self {
        ReductionConfig {
            precision: 3,
            information: Information::None,
            max_embedded_sets: Some(10_000),
            parallel: true,
        }
    }

    // Builder methods
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_information(mut self, information: Information) -> Self {
        self.information = information;
        self
    }

    pub fn with_max_embedded_sets(mut self, limit: Option<usize>) -> Self {
        self.max_embedded_sets = limit;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> ReductionResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(ReductionError::InvalidParameter(format!(
                "precision {} exceeds the maximum of {}",
                self.precision, MAX_PRECISION
            )));
        }
        if self.max_embedded_sets == Some(0) {
            return Err(ReductionError::InvalidParameter(
                "max_embedded_sets must be positive; omit it to disable the limit".to_string(),
            ));
        }
        Ok(())
    }
}
