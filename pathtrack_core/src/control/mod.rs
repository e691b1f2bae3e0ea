// pathtrack_core/src/control/mod.rs

//! Lateral (LQR) and longitudinal (proportional) control.

pub mod error;
pub mod lqr;
pub mod riccati;
pub mod speed;
pub mod tracking;

pub use error::ControlError;
pub use lqr::{dlqr, LqrSolution, LqrWeights};
pub use riccati::{riccati_update, solve_dare, DareSolution, RiccatiSettings};
pub use speed::SpeedController;
pub use tracking::{
    calc_nearest_index, error_dynamics, SteeringCommand, TrackingController, TrackingErrors,
};
