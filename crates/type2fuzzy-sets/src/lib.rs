//! # type2fuzzy-sets
//!
//! **Data model for type-2 fuzzy sets**
//!
//! This crate provides the set representations that type reduction operates
//! on, together with the exact algebra connecting them. Everything here is
//! plain data: sets are built incrementally through validating `add_element`
//! calls and are otherwise read-only.
//!
//! ## Core Components
//!
//! | Type | Maps | Notes |
//! |---|---|---|
//! | [`CrispSet`] | – | closed interval `[left, right]`, possibly empty |
//! | [`Type1FuzzySet`] | `x -> μ` | join, meet, negation, alpha-cuts |
//! | [`AlphaCutType1FuzzySet`] | `α -> CrispSet` | decomposed type-1 set |
//! | [`GeneralType2FuzzySet`] | `x -> Type1FuzzySet` | secondary functions over `u ∈ [0, 1]` |
//! | [`IntervalType2FuzzySet`] | `x -> CrispSet` | lower/upper membership |
//! | [`ZSliceType2FuzzySet`] | `z -> IntervalType2FuzzySet` | nested slices of a general set |
//!
//! Data flows downward: a general type-2 set is sliced into interval or
//! z-slice sets, and those are what the reducers in `type2fuzzy-reduce`
//! consume.
//!
//! ## Keys
//!
//! All floating-point map keys are wrapped in [`FuzzyKey`], which rounds to
//! six decimal places, so `0.1 + 0.2` and `0.3` address the same element.
//! Every map is ordered, so iteration is always in ascending key order.
//!
//! ## Quick Start
//!
//! ```rust
//! use type2fuzzy_sets::GeneralType2FuzzySet;
//!
//! let set: GeneralType2FuzzySet =
//!     "(0.9/0.0 + 0.5/0.2 + 0.1/0.8)/1.0 + (0.5/0.0 + 0.5/0.8)/2.0"
//!         .parse()
//!         .unwrap();
//!
//! assert_eq!(set.secondary_grade(1.0, 0.0).unwrap(), 0.9);
//!
//! let fou = set.z_slice(0.0).unwrap();
//! assert_eq!(fou.get(2.0).unwrap().bounds(), Some((0.0, 0.8)));
//! ```

pub mod alpha_cut;
pub mod crisp;
pub mod embedded;
pub mod error;
pub mod general;
pub mod generate;
pub mod interval;
pub mod key;
mod representation;
pub mod type1;
pub mod util;
pub mod zslice;

pub use alpha_cut::AlphaCutType1FuzzySet;
pub use crisp::CrispSet;
pub use embedded::{EmbeddedPoint, EmbeddedSets};
pub use error::{FuzzySetError, Result};
pub use general::GeneralType2FuzzySet;
pub use interval::IntervalType2FuzzySet;
pub use key::{FuzzyKey, KEY_DECIMALS};
pub use type1::Type1FuzzySet;
pub use util::round_to;
pub use zslice::ZSliceType2FuzzySet;
