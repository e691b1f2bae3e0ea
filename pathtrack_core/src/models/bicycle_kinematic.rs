// pathtrack_core/src/models/bicycle_kinematic.rs

use serde::{Deserialize, Serialize};

use crate::models::Dynamics;
use crate::types::{Control, State};
use crate::utils::angles::pi_2_pi;
use crate::utils::integrators::RK1;

/// Planar pose and speed of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleState {
    pub x: f64,
    pub y: f64,
    /// Heading in radians, kept wrapped.
    pub yaw: f64,
    /// Longitudinal speed in m/s.
    pub v: f64,
}

impl VehicleState {
    pub fn new(x: f64, y: f64, yaw: f64, v: f64) -> Self {
        Self { x, y, yaw, v }
    }

    pub fn to_vector(&self) -> State {
        State::from_vec(vec![self.x, self.y, self.yaw, self.v])
    }

    pub fn from_vector(x: &State) -> Self {
        Self {
            x: x[0],
            y: x[1],
            yaw: x[2],
            v: x[3],
        }
    }

    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }
}

/// Kinematic Bicycle Model for car-like vehicles.
/// State vector: [x, y, yaw, v]
/// Control input: [delta, a] (steering_angle, longitudinal_acceleration)
#[derive(Debug, Clone)]
pub struct BicycleKinematicModel {
    /// Distance between front and rear axles (meters).
    pub wheelbase: f64,
    /// Maximum allowable steering angle (radians).
    pub max_steer_angle: f64,
}

impl BicycleKinematicModel {
    pub fn new(wheelbase: f64, max_steer_angle: f64) -> Self {
        Self {
            wheelbase,
            max_steer_angle,
        }
    }

    const STATE_DIM: usize = 4;
    const CONTROL_DIM: usize = 2;

    /// The steering angle the wheels actually reach for a command.
    pub fn saturate_steering(&self, delta: f64) -> f64 {
        delta.clamp(-self.max_steer_angle, self.max_steer_angle)
    }

    /// Advances `state` by one explicit Euler step of length `dt`.
    pub fn step(&self, state: &VehicleState, accel: f64, delta: f64, dt: f64) -> VehicleState {
        let u = Control::from_vec(vec![self.saturate_steering(delta), accel]);
        let x_next = self.propagate(&state.to_vector(), &u, 0.0, dt, &RK1);

        let mut next = VehicleState::from_vector(&x_next);
        next.yaw = pi_2_pi(next.yaw);
        next
    }
}

impl Dynamics for BicycleKinematicModel {
    fn get_state_dim(&self) -> usize {
        Self::STATE_DIM
    }

    fn get_control_dim(&self) -> usize {
        Self::CONTROL_DIM
    }

    /// x_dot = [v*cos(yaw), v*sin(yaw), v*tan(delta)/L, a]
    fn get_derivatives(&self, x: &State, u: &Control, _t: f64) -> State {
        let yaw = x[2];
        let v = x[3];
        let delta = self.saturate_steering(u[0]);
        let a = u[1];

        State::from_vec(vec![
            v * yaw.cos(),
            v * yaw.sin(),
            v / self.wheelbase * delta.tan(),
            a,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn model() -> BicycleKinematicModel {
        BicycleKinematicModel::new(0.5, 45.0_f64.to_radians())
    }

    #[test]
    fn test_straight_line_step() {
        let s0 = VehicleState::new(1.0, 2.0, 0.0, 3.0);
        let s1 = model().step(&s0, 1.0, 0.0, 0.1);
        assert_relative_eq!(s1.x, 1.3, epsilon = 1e-12);
        assert_relative_eq!(s1.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(s1.yaw, 0.0, epsilon = 1e-12);
        assert_relative_eq!(s1.v, 3.1, epsilon = 1e-12);
    }

    #[test]
    fn test_update_uses_state_before_the_step() {
        // Position advances with the old speed and heading.
        let s0 = VehicleState::new(0.0, 0.0, PI / 2.0, 2.0);
        let s1 = model().step(&s0, -5.0, 0.2, 0.1);
        assert_relative_eq!(s1.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(s1.y, 0.2, epsilon = 1e-12);
        assert_relative_eq!(s1.yaw, PI / 2.0 + 2.0 / 0.5 * 0.2_f64.tan() * 0.1, epsilon = 1e-12);
        assert_relative_eq!(s1.v, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_steering_is_saturated() {
        let m = model();
        let max = m.max_steer_angle;
        assert_eq!(m.saturate_steering(3.0), max);
        assert_eq!(m.saturate_steering(-3.0), -max);
        assert_eq!(m.saturate_steering(0.3), 0.3);

        let s0 = VehicleState::new(0.0, 0.0, 0.0, 1.0);
        let over = m.step(&s0, 0.0, 2.5, 0.1);
        let at_limit = m.step(&s0, 0.0, max, 0.1);
        assert_eq!(over, at_limit);
        assert_relative_eq!(over.yaw, 1.0 / 0.5 * max.tan() * 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_yaw_stays_wrapped() {
        let s0 = VehicleState::new(0.0, 0.0, PI - 0.01, 5.0);
        let s1 = model().step(&s0, 0.0, 0.5, 0.1);
        assert!(s1.yaw >= -PI && s1.yaw < PI);
        assert!(s1.yaw < 0.0);
    }

    #[test]
    fn test_vector_round_trip_and_dimensions() {
        let s = VehicleState::new(1.0, -2.0, 0.5, 3.0);
        assert_eq!(VehicleState::from_vector(&s.to_vector()), s);
        assert_eq!(model().get_state_dim(), 4);
        assert_eq!(model().get_control_dim(), 2);
    }
}
