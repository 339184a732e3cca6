//! Error types for type reduction.

use thiserror::Error;
use type2fuzzy_sets::FuzzySetError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReductionError {
    #[error(transparent)]
    Set(#[from] FuzzySetError),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Too many embedded type-2 sets: {count} exceeds the limit of {limit}")]
    TooManyEmbeddedSets { count: usize, limit: usize },

    #[error("Degenerate centroid: {0}")]
    DegenerateCentroid(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type ReductionResult<T> = Result<T, ReductionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_set_error() {
        let err: ReductionError = FuzzySetError::ZSliceNotFound(0.5).into();
        assert_eq!(err.to_string(), "z-slice 0.5 not found in set");
        assert!(matches!(err, ReductionError::Set(_)));
    }

    #[test]
    fn test_messages() {
        let err = ReductionError::TooManyEmbeddedSets {
            count: 4096,
            limit: 1000,
        };
        assert_eq!(
            err.to_string(),
            "Too many embedded type-2 sets: 4096 exceeds the limit of 1000"
        );
    }
}
