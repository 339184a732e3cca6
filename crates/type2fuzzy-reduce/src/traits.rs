//! The reducer seam.

use crate::config::ReductionConfig;
use crate::error::ReductionResult;

/// A type-reduction algorithm.
///
/// Reducers read their input and build a fresh output; they never mutate
/// the set they are given.
pub trait TypeReducer {
    type Input;
    type Output;

    /// Human-readable algorithm name.
    fn name(&self) -> &'static str;

    fn config(&self) -> &ReductionConfig;

    fn reduce(&self, input: &Self::Input) -> ReductionResult<Self::Output>;
}
