// pathtrack_core/src/control/error.rs

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    #[error("matrix dimensions do not agree: {0}")]
    DimensionMismatch(String),

    #[error("matrix is not invertible during {stage}")]
    SingularMatrix { stage: &'static str },

    #[error("Riccati iteration did not converge after {iterations} iterations (last change {last_change})")]
    RiccatiNotConverged { iterations: usize, last_change: f64 },

    #[error("the reference path has no samples")]
    EmptyPath,
}
