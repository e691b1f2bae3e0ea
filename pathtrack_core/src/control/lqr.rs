// pathtrack_core/src/control/lqr.rs

use nalgebra::{Complex, DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::control::error::ControlError;
use crate::control::riccati::{check_dimensions, solve_dare, DareSolution, RiccatiSettings};

/// Diagonal state weight `Q` and scalar input weight `R` of the quadratic cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LqrWeights {
    /// Diagonal of the 4x4 error-state weight.
    pub q_diag: [f64; 4],
    pub r: f64,
}

impl Default for LqrWeights {
    fn default() -> Self {
        Self {
            q_diag: [1.0; 4],
            r: 1.0,
        }
    }
}

impl LqrWeights {
    pub fn q(&self) -> DMatrix<f64> {
        DMatrix::from_diagonal(&DVector::from_row_slice(&self.q_diag))
    }

    pub fn r(&self) -> DMatrix<f64> {
        DMatrix::from_element(1, 1, self.r)
    }
}

/// The discrete-time LQR solution for `x[k+1] = A x[k] + B u[k]`.
#[derive(Debug, Clone)]
pub struct LqrSolution {
    /// Feedback gain, `u = -K x`.
    pub k: DMatrix<f64>,
    pub riccati: DareSolution,
    /// Eigenvalues of `A - B K`. Diagnostic only.
    pub closed_loop_eigenvalues: DVector<Complex<f64>>,
}

impl LqrSolution {
    /// Largest eigenvalue modulus of the closed loop.
    pub fn spectral_radius(&self) -> f64 {
        self.closed_loop_eigenvalues
            .iter()
            .map(|e| e.norm())
            .fold(0.0, f64::max)
    }
}

/// Synthesizes `K = (B'XB + R)^-1 (B'XA)` from the DARE solution.
pub fn dlqr(
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
    q: &DMatrix<f64>,
    r: &DMatrix<f64>,
    settings: &RiccatiSettings,
) -> Result<LqrSolution, ControlError> {
    check_dimensions(a, b, q, r)?;

    let riccati = solve_dare(a, b, q, r, settings)?;
    let x = &riccati.x;
    let bt = b.transpose();

    let k = (&bt * x * b + r)
        .try_inverse()
        .ok_or(ControlError::SingularMatrix {
            stage: "gain synthesis",
        })?
        * (&bt * x * a);

    let closed_loop_eigenvalues = (a - b * &k).complex_eigenvalues();

    Ok(LqrSolution {
        k,
        riccati,
        closed_loop_eigenvalues,
    })
}
