// pathtrack_core/src/control/tracking.rs

use nalgebra::{DMatrix, DVector};
use tracing::{trace, warn};

use crate::config::TrackingConfig;
use crate::control::error::ControlError;
use crate::control::lqr::dlqr;
use crate::control::riccati::RiccatiSettings;
use crate::models::bicycle_kinematic::VehicleState;
use crate::planning::course::ReferencePath;
use crate::utils::angles::pi_2_pi;

/// Lateral and heading error of one tick. Fed back as "previous" on the next tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackingErrors {
    /// Signed distance to the nearest path sample, positive to the left of the path.
    pub lateral: f64,
    /// `yaw - path_yaw`, wrapped.
    pub heading: f64,
}

/// Output of one controller tick.
#[derive(Debug, Clone)]
pub struct SteeringCommand {
    /// `feedforward + feedback`, not yet saturated.
    pub steering: f64,
    pub feedforward: f64,
    pub feedback: f64,
    pub nearest_index: usize,
    pub errors: TrackingErrors,
    /// The 1x4 LQR gain synthesized for this tick.
    pub gain: DMatrix<f64>,
    pub riccati_converged: bool,
}

/// Finds the nearest path sample and the signed lateral error to it.
///
/// Full linear scan; ties resolve to the lowest index.
pub fn calc_nearest_index(
    state: &VehicleState,
    path: &ReferencePath,
) -> Result<(usize, f64), ControlError> {
    let mut best: Option<(usize, f64)> = None;
    for (i, (cx, cy)) in path.cx.iter().zip(path.cy.iter()).enumerate() {
        let d = (state.x - cx).powi(2) + (state.y - cy).powi(2);
        match best {
            Some((_, d_min)) if d >= d_min => {}
            _ => best = Some((i, d)),
        }
    }
    let (ind, d_min) = best.ok_or(ControlError::EmptyPath)?;

    let mut e = d_min.sqrt();
    let dxl = path.cx[ind] - state.x;
    let dyl = path.cy[ind] - state.y;
    if pi_2_pi(path.cyaw[ind] - dyl.atan2(dxl)) < 0.0 {
        e = -e;
    }

    Ok((ind, e))
}

/// Discrete error dynamics for the state `[e, e_dot, th_e, th_e_dot]`,
/// linearized around speed `v`.
pub fn error_dynamics(v: f64, dt: f64, wheelbase: f64) -> (DMatrix<f64>, DMatrix<f64>) {
    let mut a = DMatrix::<f64>::zeros(4, 4);
    a[(0, 0)] = 1.0;
    a[(0, 1)] = dt;
    a[(1, 2)] = v;
    a[(2, 2)] = 1.0;
    a[(2, 3)] = dt;

    let mut b = DMatrix::<f64>::zeros(4, 1);
    b[(3, 0)] = v / wheelbase;

    (a, b)
}

/// LQR lateral controller with curvature feedforward.
///
/// Holds no state between ticks; the previous errors are passed in explicitly.
#[derive(Debug, Clone)]
pub struct TrackingController {
    dt: f64,
    wheelbase: f64,
    q: DMatrix<f64>,
    r: DMatrix<f64>,
    riccati: RiccatiSettings,
}

impl TrackingController {
    pub fn new(config: &TrackingConfig) -> Self {
        Self {
            dt: config.dt,
            wheelbase: config.wheelbase,
            q: config.lqr.q(),
            r: config.lqr.r(),
            riccati: config.riccati,
        }
    }

    pub fn compute(
        &self,
        state: &VehicleState,
        path: &ReferencePath,
        previous: TrackingErrors,
    ) -> Result<SteeringCommand, ControlError> {
        let (ind, e) = calc_nearest_index(state, path)?;

        let k = path.ck[ind];
        let th_e = pi_2_pi(state.yaw - path.cyaw[ind]);

        // B depends on v, so the gain is resynthesized every tick.
        let (a, b) = error_dynamics(state.v, self.dt, self.wheelbase);
        let lqr = dlqr(&a, &b, &self.q, &self.r, &self.riccati)?;
        if !lqr.riccati.converged {
            warn!(
                iterations = lqr.riccati.iterations,
                last_change = lqr.riccati.last_change,
                "Riccati iteration hit its cap; using the last iterate"
            );
        }

        let x = DVector::from_vec(vec![
            e,
            (e - previous.lateral) / self.dt,
            th_e,
            (th_e - previous.heading) / self.dt,
        ]);

        let feedforward = (self.wheelbase * k).atan2(1.0);
        let feedback = pi_2_pi((-&lqr.k * x)[0]);
        let steering = feedforward + feedback;

        trace!(ind, e, th_e, feedforward, feedback, "lqr steering");

        Ok(SteeringCommand {
            steering,
            feedforward,
            feedback,
            nearest_index: ind,
            errors: TrackingErrors {
                lateral: e,
                heading: th_e,
            },
            gain: lqr.k,
            riccati_converged: lqr.riccati.converged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::course::calc_spline_course;
    use crate::types::Waypoint;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn straight_path() -> ReferencePath {
        calc_spline_course(&[Waypoint::new(0.0, 0.0), Waypoint::new(10.0, 0.0)], 0.1).unwrap()
    }

    #[test]
    fn test_lateral_error_sign_convention() {
        let path = straight_path();

        let left = VehicleState::new(5.0, 1.0, 0.0, 1.0);
        let (ind, e) = calc_nearest_index(&left, &path).unwrap();
        assert_eq!(ind, 50);
        assert_relative_eq!(e, 1.0, epsilon = 1e-9);

        let right = VehicleState::new(5.0, -1.0, 0.0, 1.0);
        let (_, e) = calc_nearest_index(&right, &path).unwrap();
        assert_relative_eq!(e, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_nearest_index_ties_pick_the_lowest_index() {
        let path = ReferencePath {
            cx: vec![0.0, 1.0, 2.0],
            cy: vec![1.0, 0.0, 1.0],
            cyaw: vec![0.0; 3],
            ck: vec![0.0; 3],
            s: vec![0.0, 1.0, 2.0],
        };
        // Equidistant from samples 0 and 2, farther from 1.
        let state = VehicleState::new(1.0, 2.0, 0.0, 0.0);
        let (ind, _) = calc_nearest_index(&state, &path).unwrap();
        assert_eq!(ind, 0);
    }

    #[test]
    fn test_nearest_index_stays_in_bounds() {
        let path = straight_path();
        let far_ahead = VehicleState::new(50.0, 0.0, 0.0, 0.0);
        let (ind, _) = calc_nearest_index(&far_ahead, &path).unwrap();
        assert_eq!(ind, path.len() - 1);

        let behind = VehicleState::new(-50.0, 3.0, 0.0, 0.0);
        let (ind, _) = calc_nearest_index(&behind, &path).unwrap();
        assert_eq!(ind, 0);
    }

    #[test]
    fn test_empty_path_is_an_error() {
        let path = ReferencePath {
            cx: vec![],
            cy: vec![],
            cyaw: vec![],
            ck: vec![],
            s: vec![],
        };
        assert_eq!(
            calc_nearest_index(&VehicleState::default(), &path).unwrap_err(),
            ControlError::EmptyPath
        );
    }

    #[test]
    fn test_error_dynamics_layout() {
        let (a, b) = error_dynamics(2.0, 0.1, 0.5);
        let expected_a = DMatrix::from_row_slice(
            4,
            4,
            &[
                1.0, 0.1, 0.0, 0.0, //
                0.0, 0.0, 2.0, 0.0, //
                0.0, 0.0, 1.0, 0.1, //
                0.0, 0.0, 0.0, 0.0,
            ],
        );
        assert_eq!(a, expected_a);
        assert_eq!(b, DMatrix::from_row_slice(4, 1, &[0.0, 0.0, 0.0, 4.0]));
    }

    #[test]
    fn test_on_path_straight_line_gives_zero_steering() {
        let controller = TrackingController::new(&TrackingConfig::default());
        let path = straight_path();
        let state = VehicleState::new(3.0, 0.0, 0.0, 2.0);
        let cmd = controller
            .compute(&state, &path, TrackingErrors::default())
            .unwrap();
        assert_abs_diff_eq!(cmd.feedforward, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cmd.steering, 0.0, epsilon = 1e-9);
        assert_eq!(cmd.gain.shape(), (1, 4));
    }

    #[test]
    fn test_feedback_steers_back_towards_the_path() {
        let controller = TrackingController::new(&TrackingConfig::default());
        let path = straight_path();

        // Left of the path: steer right (negative).
        let left = VehicleState::new(3.0, 0.5, 0.0, 2.0);
        let previous = TrackingErrors {
            lateral: 0.5,
            heading: 0.0,
        };
        let cmd = controller.compute(&left, &path, previous).unwrap();
        assert!(cmd.steering < 0.0, "steering {}", cmd.steering);
        assert_relative_eq!(cmd.errors.lateral, 0.5, epsilon = 1e-9);

        // Right of the path: steer left (positive).
        let right = VehicleState::new(3.0, -0.5, 0.0, 2.0);
        let previous = TrackingErrors {
            lateral: -0.5,
            heading: 0.0,
        };
        let cmd = controller.compute(&right, &path, previous).unwrap();
        assert!(cmd.steering > 0.0, "steering {}", cmd.steering);
    }

    #[test]
    fn test_feedforward_matches_curvature() {
        let controller = TrackingController::new(&TrackingConfig::default());
        let path = ReferencePath {
            cx: vec![0.0],
            cy: vec![0.0],
            cyaw: vec![0.0],
            ck: vec![0.4],
            s: vec![0.0],
        };
        let cmd = controller
            .compute(&VehicleState::default(), &path, TrackingErrors::default())
            .unwrap();
        assert_relative_eq!(cmd.feedforward, (0.5_f64 * 0.4).atan(), epsilon = 1e-12);
    }
}
