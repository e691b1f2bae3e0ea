// pathtrack_core/src/models/mod.rs

use std::fmt::Debug;

use crate::types::{Control, State};
use crate::utils::integrators::Integrator;

// --- DYNAMICS MODEL TRAIT ---
// Represents the kinematic model of a vehicle. `x_dot = f(x, u)`
/// Defines how a vehicle's state evolves over time based on control inputs.
pub trait Dynamics: Debug + Send + Sync {
    /// Returns the number of dimensions in the state vector `x`.
    fn get_state_dim(&self) -> usize;

    /// Returns the number of dimensions in the control input vector `u`.
    fn get_control_dim(&self) -> usize;

    /// Computes the time derivative of the state vector: `x_dot = f(x, u, t)`.
    fn get_derivatives(&self, x: &State, u: &Control, t: f64) -> State;

    /// Propagates the state forward in time using a numerical integrator.
    ///
    /// # Arguments
    /// * `x`: Current state vector.
    /// * `u`: Current control input vector. Assumed constant over `dt`.
    /// * `t`: Current simulation time.
    /// * `dt`: Time step duration. Must be non-negative.
    /// * `integrator`: The integration scheme, e.g. `RK1`.
    fn propagate(
        &self,
        x: &State,
        u: &Control,
        t: f64,
        dt: f64,
        integrator: &dyn Integrator<f64>,
    ) -> State {
        debug_assert!(dt >= 0.0, "Dynamics::propagate: dt cannot be negative");
        debug_assert_eq!(x.nrows(), self.get_state_dim());
        debug_assert_eq!(u.nrows(), self.get_control_dim());

        // Define the closure f(x, t) for the integrator, capturing the current control input 'u'.
        let func = |func_x: &State, func_t: f64| -> State { self.get_derivatives(func_x, u, func_t) };

        integrator.step(&func, x, t, t + dt)
    }
}

pub mod bicycle_kinematic;
