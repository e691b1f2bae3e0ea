// pathtrack_core/src/error.rs

use thiserror::Error;

use crate::control::error::ControlError;
use crate::planning::error::SplineError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid configuration value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Anything that can abort a closed-loop run.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("course generation failed: {0}")]
    Spline(#[from] SplineError),

    #[error("control tick failed: {0}")]
    Control(#[from] ControlError),

    #[error("speed profile has {profile} entries but the path has {path} samples")]
    SpeedProfileMismatch { path: usize, profile: usize },
}
