// pathtrack_core/src/planning/course.rs

use serde::Serialize;
use tracing::debug;

use crate::planning::error::SplineError;
use crate::planning::spline_2d::CubicSpline2D;
use crate::types::Waypoint;

/// A discretized reference path. All sequences share the same length and index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReferencePath {
    pub cx: Vec<f64>,
    pub cy: Vec<f64>,
    /// Tangent heading in radians.
    pub cyaw: Vec<f64>,
    /// Signed curvature in 1/m.
    pub ck: Vec<f64>,
    /// Arc length of each sample, strictly increasing from 0.
    pub s: Vec<f64>,
}

impl ReferencePath {
    /// Walks `spline` at a fixed arc-length step, from 0 up to but excluding `s_max`.
    pub fn sample(spline: &CubicSpline2D, ds: f64) -> Result<Self, SplineError> {
        if !(ds > 0.0 && ds.is_finite()) {
            return Err(SplineError::InvalidStep(ds));
        }

        let s_max = spline.s_max();
        let n = (s_max / ds).ceil() as usize;

        let mut path = Self {
            cx: Vec::with_capacity(n),
            cy: Vec::with_capacity(n),
            cyaw: Vec::with_capacity(n),
            ck: Vec::with_capacity(n),
            s: Vec::with_capacity(n),
        };

        for i in 0..n {
            let s = i as f64 * ds;
            let p = spline.position(s)?;
            path.cx.push(p.x);
            path.cy.push(p.y);
            path.cyaw.push(spline.yaw(s)?);
            path.ck.push(spline.curvature(s)?);
            path.s.push(s);
        }

        debug!(samples = n, s_max, ds, "Sampled reference path");
        Ok(path)
    }

    pub fn len(&self) -> usize {
        self.cx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cx.is_empty()
    }
}

/// Fits a spline through `waypoints` and samples it every `ds` meters.
pub fn calc_spline_course(waypoints: &[Waypoint], ds: f64) -> Result<ReferencePath, SplineError> {
    let spline = CubicSpline2D::new(waypoints)?;
    ReferencePath::sample(&spline, ds)
}

/// Constant target speed along the course with a forced stop at the last sample.
pub fn calc_speed_profile(path: &ReferencePath, target_speed: f64) -> Vec<f64> {
    let mut speed = vec![target_speed; path.len()];
    if let Some(last) = speed.last_mut() {
        *last = 0.0;
    }
    speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn course_waypoints() -> Vec<Waypoint> {
        vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(6.0, -3.0),
            Waypoint::new(12.5, -5.0),
            Waypoint::new(10.0, 6.5),
        ]
    }

    #[test]
    fn test_sample_count_and_spacing() {
        let spline = CubicSpline2D::new(&course_waypoints()).unwrap();
        let path = ReferencePath::sample(&spline, 0.1).unwrap();

        assert_eq!(path.len(), (spline.s_max() / 0.1).ceil() as usize);
        assert_eq!(path.s[0], 0.0);
        assert!(path.s.windows(2).all(|w| w[1] > w[0]));
        assert!(*path.s.last().unwrap() < spline.s_max());
        assert_eq!(path.cy.len(), path.len());
        assert_eq!(path.cyaw.len(), path.len());
        assert_eq!(path.ck.len(), path.len());
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let a = calc_spline_course(&course_waypoints(), 0.1).unwrap();
        let b = calc_spline_course(&course_waypoints(), 0.1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_first_sample_is_first_waypoint() {
        let path = calc_spline_course(&course_waypoints(), 0.25).unwrap();
        assert_abs_diff_eq!(path.cx[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(path.cy[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_step_is_rejected() {
        let spline = CubicSpline2D::new(&course_waypoints()).unwrap();
        assert_eq!(
            ReferencePath::sample(&spline, 0.0).unwrap_err(),
            SplineError::InvalidStep(0.0)
        );
        assert!(ReferencePath::sample(&spline, -1.0).is_err());
    }

    #[test]
    fn test_speed_profile_stops_at_the_end() {
        let path = calc_spline_course(&course_waypoints(), 0.1).unwrap();
        let profile = calc_speed_profile(&path, 10.0 / 3.6);
        assert_eq!(profile.len(), path.len());
        assert_eq!(*profile.last().unwrap(), 0.0);
        assert!(profile[..profile.len() - 1]
            .iter()
            .all(|&v| v == 10.0 / 3.6));
    }
}
