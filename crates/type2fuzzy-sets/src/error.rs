//! Error types for fuzzy set construction and lookup.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuzzySetError {
    #[error("Invalid crisp set limits: left {left} is greater than right {right}")]
    InvalidInterval { left: f64, right: f64 },
    #[error("Degree of membership {degree} at x={x} is outside [0, 1]")]
    MembershipOutOfRange { x: f64, degree: f64 },
    #[error("Secondary domain value {u} at x={x} is outside [0, 1]")]
    SecondaryDomainOutOfRange { x: f64, u: f64 },
    #[error("Secondary grade {grade} at x={x}, u={u} is outside [0, 1]")]
    SecondaryGradeOutOfRange { x: f64, u: f64, grade: f64 },
    #[error("Interval [{lower}, {upper}] at x={x} is outside [0, 1]")]
    IntervalOutOfRange { x: f64, lower: f64, upper: f64 },
    #[error("Level {0} is outside [0, 1]")]
    LevelOutOfRange(f64),
    #[error("{what} must be finite, got {value}")]
    NonFiniteValue { what: &'static str, value: f64 },
    #[error("Primary domain value {0} not found in set")]
    PrimaryValueNotFound(f64),
    #[error("z-slice {0} not found in set")]
    ZSliceNotFound(f64),
    #[error("Alpha-cut {0} not found in set")]
    AlphaCutNotFound(f64),
    #[error("Empty set: {0}")]
    EmptySet(String),
    #[error("Invalid set representation: {0}")]
    InvalidFormat(String),
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, FuzzySetError>;

impl FuzzySetError {
    /// True for lookup misses (`*NotFound`).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FuzzySetError::PrimaryValueNotFound(_)
                | FuzzySetError::ZSliceNotFound(_)
                | FuzzySetError::AlphaCutNotFound(_)
        )
    }

    /// True for range violations rejected at a mutating call.
    pub fn is_range_violation(&self) -> bool {
        matches!(
            self,
            FuzzySetError::InvalidInterval { .. }
                | FuzzySetError::MembershipOutOfRange { .. }
                | FuzzySetError::SecondaryDomainOutOfRange { .. }
                | FuzzySetError::SecondaryGradeOutOfRange { .. }
                | FuzzySetError::IntervalOutOfRange { .. }
                | FuzzySetError::LevelOutOfRange(_)
                | FuzzySetError::NonFiniteValue { .. }
        )
    }
}
