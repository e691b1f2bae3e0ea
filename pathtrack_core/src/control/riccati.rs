// pathtrack_core/src/control/riccati.rs

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::control::error::ControlError;

/// Stopping rule for the fixed-point DARE iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiccatiSettings {
    /// Stop once the largest absolute entry change drops below this.
    pub tolerance: f64,
    pub max_iterations: usize,
    /// Treat hitting `max_iterations` as an error instead of using the last iterate.
    pub require_convergence: bool,
}

impl Default for RiccatiSettings {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            max_iterations: 150,
            require_convergence: false,
        }
    }
}

/// Result of [`solve_dare`].
#[derive(Debug, Clone)]
pub struct DareSolution {
    pub x: DMatrix<f64>,
    /// Number of updates performed, at most `max_iterations`.
    pub iterations: usize,
    /// True when the tolerance was met before the cap.
    pub converged: bool,
    /// Max absolute entry change of the final update.
    pub last_change: f64,
}

/// One application of the Riccati map
/// `F(X) = A'XA - A'XB (R + B'XB)^-1 B'XA + Q`.
pub fn riccati_update(
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
    q: &DMatrix<f64>,
    r: &DMatrix<f64>,
    x: &DMatrix<f64>,
) -> Result<DMatrix<f64>, ControlError> {
    let at = a.transpose();
    let bt = b.transpose();
    let inner = (r + &bt * x * b)
        .try_inverse()
        .ok_or(ControlError::SingularMatrix {
            stage: "Riccati iteration",
        })?;
    Ok(&at * x * a - &at * x * b * inner * &bt * x * a + q)
}

/// Solves the discrete algebraic Riccati equation by iterating from `X0 = Q`.
///
/// The returned `X` is the newest iterate whether or not the tolerance was met;
/// `converged` tells the two cases apart.
pub fn solve_dare(
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
    q: &DMatrix<f64>,
    r: &DMatrix<f64>,
    settings: &RiccatiSettings,
) -> Result<DareSolution, ControlError> {
    check_dimensions(a, b, q, r)?;

    let mut x = q.clone();
    let mut x_next = q.clone();
    let mut last_change = f64::INFINITY;

    for i in 0..settings.max_iterations {
        x_next = riccati_update(a, b, q, r, &x)?;
        last_change = (&x_next - &x).abs().max();
        if last_change < settings.tolerance {
            return Ok(DareSolution {
                x: x_next,
                iterations: i + 1,
                converged: true,
                last_change,
            });
        }
        x = x_next.clone();
    }

    if settings.require_convergence {
        return Err(ControlError::RiccatiNotConverged {
            iterations: settings.max_iterations,
            last_change,
        });
    }

    Ok(DareSolution {
        x: x_next,
        iterations: settings.max_iterations,
        converged: false,
        last_change,
    })
}

pub(crate) fn check_dimensions(
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
    q: &DMatrix<f64>,
    r: &DMatrix<f64>,
) -> Result<(), ControlError> {
    let n = a.nrows();
    if !a.is_square() {
        return Err(ControlError::DimensionMismatch(format!(
            "A is {}x{}, expected square",
            a.nrows(),
            a.ncols()
        )));
    }
    if b.nrows() != n {
        return Err(ControlError::DimensionMismatch(format!(
            "B has {} rows, A has {}",
            b.nrows(),
            n
        )));
    }
    if q.shape() != (n, n) {
        return Err(ControlError::DimensionMismatch(format!(
            "Q is {:?}, expected ({}, {})",
            q.shape(),
            n,
            n
        )));
    }
    let m = b.ncols();
    if r.shape() != (m, m) {
        return Err(ControlError::DimensionMismatch(format!(
            "R is {:?}, expected ({}, {})",
            r.shape(),
            m,
            m
        )));
    }
    Ok(())
}
