// pathtrack_core/src/planning/spline_2d.rs

use nalgebra::Point2;

use crate::planning::cubic_spline::CubicSpline1D;
use crate::planning::error::SplineError;
use crate::types::Waypoint;

/// A planar curve `(x(s), y(s))` parametrized by cumulative chord length.
#[derive(Debug, Clone)]
pub struct CubicSpline2D {
    s: Vec<f64>,
    sx: CubicSpline1D,
    sy: CubicSpline1D,
}

impl CubicSpline2D {
    /// Fits the curve through `waypoints`.
    ///
    /// Rejects fewer than two points and consecutive points that coincide,
    /// before any coefficient system is built.
    pub fn new(waypoints: &[Waypoint]) -> Result<Self, SplineError> {
        if waypoints.len() < 2 {
            return Err(SplineError::TooFewPoints(waypoints.len()));
        }

        let s = Self::calc_s(waypoints)?;
        let x: Vec<f64> = waypoints.iter().map(|p| p.x).collect();
        let y: Vec<f64> = waypoints.iter().map(|p| p.y).collect();

        Ok(Self {
            sx: CubicSpline1D::new(&s, &x)?,
            sy: CubicSpline1D::new(&s, &y)?,
            s,
        })
    }

    fn calc_s(waypoints: &[Waypoint]) -> Result<Vec<f64>, SplineError> {
        let mut s = Vec::with_capacity(waypoints.len());
        s.push(0.0);
        for (index, pair) in waypoints.windows(2).enumerate() {
            let ds = (pair[1] - pair[0]).norm();
            if !(ds > f64::EPSILON) {
                return Err(SplineError::ZeroLengthSegment { index });
            }
            s.push(s[index] + ds);
        }
        Ok(s)
    }

    /// Cumulative chord length at each waypoint. Starts at 0.
    pub fn arc_lengths(&self) -> &[f64] {
        &self.s
    }

    /// Total chord length, the upper end of the domain.
    pub fn s_max(&self) -> f64 {
        self.s[self.s.len() - 1]
    }

    pub fn position(&self, s: f64) -> Result<Point2<f64>, SplineError> {
        Ok(Point2::new(self.sx.value(s)?, self.sy.value(s)?))
    }

    pub fn yaw(&self, s: f64) -> Result<f64, SplineError> {
        let dx = self.sx.first_derivative(s)?;
        let dy = self.sy.first_derivative(s)?;
        Ok(dy.atan2(dx))
    }

    /// Signed curvature, positive when the curve turns counter-clockwise.
    pub fn curvature(&self, s: f64) -> Result<f64, SplineError> {
        let dx = self.sx.first_derivative(s)?;
        let ddx = self.sx.second_derivative(s)?;
        let dy = self.sy.first_derivative(s)?;
        let ddy = self.sy.second_derivative(s)?;
        Ok((ddy * dx - ddx * dy) / (dx.powi(2) + dy.powi(2)).powf(1.5))
    }
}
