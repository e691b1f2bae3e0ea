// pathtrack_core/src/prelude.rs

// --- Core Abstractions ---
pub use crate::models::Dynamics;
pub use crate::simulation::TrajectorySink;
pub use crate::types::{Control, State, Waypoint};
pub use crate::utils::integrators::{Integrator, RK1};

// --- Configuration and Errors ---
pub use crate::config::{SpeedGains, TrackingConfig};
pub use crate::control::{ControlError, LqrWeights, RiccatiSettings};
pub use crate::error::{ConfigError, SimulationError};
pub use crate::planning::SplineError;

// --- Path Generation ---
pub use crate::planning::{
    calc_speed_profile, calc_spline_course, CubicSpline1D, CubicSpline2D, ReferencePath,
};

// --- Control ---
pub use crate::control::{
    dlqr, solve_dare, SpeedController, SteeringCommand, TrackingController, TrackingErrors,
};

// --- Vehicle Model and Closed Loop ---
pub use crate::models::bicycle_kinematic::{BicycleKinematicModel, VehicleState};
pub use crate::simulation::{
    ClosedLoopSimulation, SimulationOutcome, Termination, Trajectory, TrajectorySample,
};
pub use crate::utils::angles::pi_2_pi;
