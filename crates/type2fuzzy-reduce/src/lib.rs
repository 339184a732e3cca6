//! # type2fuzzy-reduce
//!
//! **Type reduction for type-2 fuzzy sets**
//!
//! Type reduction turns a type-2 fuzzy set into a type-1 set or a crisp
//! interval, the step a type-2 fuzzy system needs before it can produce a
//! single defuzzified output.
//!
//! ## Reducers
//!
//! | Reducer | Input | Output | Strategy |
//! |---|---|---|---|
//! | [`KarnikMendel`] | [`IntervalType2FuzzySet`] | [`CrispSet`] | iterative fixed point per bound |
//! | [`MendelJohn`] | [`GeneralType2FuzzySet`] | [`Type1FuzzySet`] | exhaustive embedded-set enumeration |
//! | [`PartialCentroid`] | [`GeneralType2FuzzySet`] | [`Type1FuzzySet`] | merged frontier of partial sums |
//! | [`Hagras`] | [`ZSliceType2FuzzySet`] | [`AlphaCutType1FuzzySet`] | Karnik-Mendel per z-slice |
//!
//! Every reducer implements [`TypeReducer`] and is configured with a
//! [`ReductionConfig`]. Mendel-John and partial-centroid produce the same
//! centroid; the latter avoids the exponential enumeration.
//!
//! ## Logging
//!
//! Reducers emit `tracing` events: a `warn` when Karnik-Mendel falls back to
//! the mid domain element, an `info` summary per reduction, and per-step
//! `debug` events when [`Information::Full`] is configured.
//!
//! ## Example
//!
//! ```rust
//! use type2fuzzy_reduce::{MendelJohn, PartialCentroid, ReductionConfig, TypeReducer};
//! use type2fuzzy_sets::GeneralType2FuzzySet;
//!
//! let set: GeneralType2FuzzySet = "(0.5/0.2 + 1.0/0.6)/1.0 + (1.0/0.4 + 0.3/0.8)/2.0"
//!     .parse()
//!     .unwrap();
//!
//! let config = ReductionConfig::default();
//! let exhaustive = MendelJohn::new(config.clone()).reduce(&set).unwrap();
//! let pruned = PartialCentroid::new(config).reduce(&set).unwrap();
//! assert_eq!(exhaustive, pruned);
//! ```

pub mod config;
pub mod defuzzification;
pub mod error;
pub mod hagras;
pub mod karnik_mendel;
pub mod mendel_john;
pub mod partial_centroid;
pub mod traits;

pub use config::{Information, ReductionConfig, DEFAULT_MAX_EMBEDDED_SETS, DEFAULT_PRECISION};
pub use defuzzification::{
    centroid, defuzzify, interval_midpoint, largest_of_maximum, mean_of_maximum,
    smallest_of_maximum, zslice_centroid, DefuzzificationMethod,
};
pub use error::{ReductionError, ReductionResult};
pub use hagras::{hagras, Hagras};
pub use karnik_mendel::{karnik_mendel, KarnikMendel};
pub use mendel_john::{mendel_john, MendelJohn};
pub use partial_centroid::{partial_centroid, PartialCentroid};
pub use traits::TypeReducer;

pub use type2fuzzy_sets::{
    AlphaCutType1FuzzySet, CrispSet, GeneralType2FuzzySet, IntervalType2FuzzySet, Type1FuzzySet,
    ZSliceType2FuzzySet,
};
