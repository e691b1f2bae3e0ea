// pathtrack_core/src/planning/cubic_spline.rs

use nalgebra::{DMatrix, DVector};

use crate::planning::error::SplineError;

/// A natural cubic spline through `(x[i], y[i])`.
///
/// Segment `i` covers `[x[i], x[i+1]]` and evaluates
/// `a[i] + b[i]*dx + c[i]*dx^2 + d[i]*dx^3` with `dx = t - x[i]`.
/// The second derivative is zero at both ends.
#[derive(Debug, Clone)]
pub struct CubicSpline1D {
    x: Vec<f64>,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl CubicSpline1D {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, SplineError> {
        if x.len() != y.len() {
            return Err(SplineError::LengthMismatch {
                knots: x.len(),
                values: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(SplineError::TooFewPoints(x.len()));
        }
        if let Some(index) = x.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(SplineError::NonIncreasingKnots { index });
        }

        let nx = x.len();
        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let a = y.to_vec();

        let c_vec = Self::calc_a(&h)
            .lu()
            .solve(&Self::calc_b(&h, &a))
            .ok_or(SplineError::SingularSystem)?;
        let c: Vec<f64> = c_vec.iter().copied().collect();

        let mut b = Vec::with_capacity(nx - 1);
        let mut d = Vec::with_capacity(nx - 1);
        for i in 0..nx - 1 {
            d.push((c[i + 1] - c[i]) / (3.0 * h[i]));
            b.push((a[i + 1] - a[i]) / h[i] - h[i] * (c[i + 1] + 2.0 * c[i]) / 3.0);
        }

        Ok(Self {
            x: x.to_vec(),
            a,
            b,
            c,
            d,
        })
    }

    /// The fitted domain `[x[0], x[n-1]]`.
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    pub fn value(&self, t: f64) -> Result<f64, SplineError> {
        let (i, dx) = self.locate(t)?;
        Ok(self.a[i] + self.b[i] * dx + self.c[i] * dx.powi(2) + self.d[i] * dx.powi(3))
    }

    pub fn first_derivative(&self, t: f64) -> Result<f64, SplineError> {
        let (i, dx) = self.locate(t)?;
        Ok(self.b[i] + 2.0 * self.c[i] * dx + 3.0 * self.d[i] * dx.powi(2))
    }

    pub fn second_derivative(&self, t: f64) -> Result<f64, SplineError> {
        let (i, dx) = self.locate(t)?;
        Ok(2.0 * self.c[i] + 6.0 * self.d[i] * dx)
    }

    /// Finds the segment containing `t` and the offset into it.
    fn locate(&self, t: f64) -> Result<(usize, f64), SplineError> {
        let (min, max) = self.domain();
        // Written as a negation so NaN is rejected too.
        if !(t >= min && t <= max) {
            return Err(SplineError::OutOfDomain { t, min, max });
        }
        // Rightmost knot <= t. The last knot belongs to the final segment.
        let i = (self.x.partition_point(|&k| k <= t) - 1).min(self.x.len() - 2);
        Ok((i, t - self.x[i]))
    }

    /// Banded system matrix for `c`. The first and last rows pin `c` to zero.
    fn calc_a(h: &[f64]) -> DMatrix<f64> {
        let nx = h.len() + 1;
        let mut a = DMatrix::<f64>::zeros(nx, nx);
        a[(0, 0)] = 1.0;
        for i in 0..nx - 1 {
            if i != nx - 2 {
                a[(i + 1, i + 1)] = 2.0 * (h[i] + h[i + 1]);
            }
            a[(i + 1, i)] = h[i];
            a[(i, i + 1)] = h[i];
        }
        a[(0, 1)] = 0.0;
        a[(nx - 1, nx - 2)] = 0.0;
        a[(nx - 1, nx - 1)] = 1.0;
        a
    }

    fn calc_b(h: &[f64], a: &[f64]) -> DVector<f64> {
        let nx = h.len() + 1;
        let mut b = DVector::<f64>::zeros(nx);
        for i in 0..nx.saturating_sub(2) {
            b[i + 1] = 3.0 * (a[i + 2] - a[i + 1]) / h[i + 1] - 3.0 * (a[i + 1] - a[i]) / h[i];
        }
        b
    }
}
