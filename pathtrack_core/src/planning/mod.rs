// pathtrack_core/src/planning/mod.rs

//! Reference path generation: natural cubic splines through waypoints,
//! arc-length parametrization and fixed-step sampling.

pub mod course;
pub mod cubic_spline;
pub mod error;
pub mod spline_2d;

pub use course::{calc_speed_profile, calc_spline_course, ReferencePath};
pub use cubic_spline::CubicSpline1D;
pub use error::SplineError;
pub use spline_2d::CubicSpline2D;
