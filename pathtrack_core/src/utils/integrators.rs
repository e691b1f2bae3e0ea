// pathtrack_core/src/utils/integrators.rs

use nalgebra::DVector;

pub trait Integrator<T> {
    fn step(
        &self,
        func: &dyn Fn(&DVector<T>, T) -> DVector<T>,
        x0: &DVector<T>,
        t0: T,
        tf: T,
    ) -> DVector<T>;
}

/// First-order Runge-Kutta, i.e. explicit forward Euler.
/// A single evaluation of `f` at the start of the interval, no sub-stepping.
#[derive(Debug, Default, Clone, Copy)]
pub struct RK1;

impl<T> Integrator<T> for RK1
where
    T: Copy
        + std::ops::Sub<Output = T>
        + std::ops::Mul<DVector<T>, Output = DVector<T>>
        + num_traits::Float,
    DVector<T>: std::ops::Add<Output = DVector<T>>,
{
    fn step(
        &self,
        func: &dyn Fn(&DVector<T>, T) -> DVector<T>,
        x0: &DVector<T>,
        t0: T,
        tf: T,
    ) -> DVector<T> {
        let dt: T = tf - t0; // Calculate the time step
        x0.clone() + dt * func(x0, t0) // Euler's method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rk1_single_step_matches_euler() {
        // x_dot = -x, one step of 0.1 from x = 1.0 gives 0.9 exactly with Euler.
        let f = |x: &DVector<f64>, _t: f64| -x.clone();
        let x0 = DVector::from_vec(vec![1.0, 2.0]);
        let x1 = RK1.step(&f, &x0, 0.0, 0.1);
        assert_relative_eq!(x1[0], 0.9, epsilon = 1e-12);
        assert_relative_eq!(x1[1], 1.8, epsilon = 1e-12);
    }

    #[test]
    fn test_rk1_zero_interval_is_identity() {
        let f = |x: &DVector<f64>, _t: f64| x.map(|v| v * 10.0);
        let x0 = DVector::from_vec(vec![3.0]);
        let x1 = RK1.step(&f, &x0, 5.0, 5.0);
        assert_relative_eq!(x1[0], 3.0);
    }
}
