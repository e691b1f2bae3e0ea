// pathtrack_core/src/utils/angles.rs

use std::f64::consts::PI;

/// Wraps an angle into `[-pi, pi)`.
///
/// Uses a floored modulo so negative inputs wrap the same way as positive ones.
pub fn pi_2_pi(angle: f64) -> f64 {
    (angle + PI).rem_euclid(2.0 * PI) - PI
}
