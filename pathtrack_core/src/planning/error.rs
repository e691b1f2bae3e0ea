// pathtrack_core/src/planning/error.rs

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplineError {
    #[error("at least 2 points are required to fit a spline, got {0}")]
    TooFewPoints(usize),

    #[error("knot and value sequences differ in length ({knots} vs {values})")]
    LengthMismatch { knots: usize, values: usize },

    #[error("knots must be strictly increasing (violated at index {index})")]
    NonIncreasingKnots { index: usize },

    #[error("waypoints {index} and {} coincide, producing a zero-length segment", .index + 1)]
    ZeroLengthSegment { index: usize },

    #[error("query {t} is outside the spline domain [{min}, {max}]")]
    OutOfDomain { t: f64, min: f64, max: f64 },

    #[error("the spline coefficient system could not be solved")]
    SingularSystem,

    #[error("sampling step must be positive and finite, got {0}")]
    InvalidStep(f64),
}
