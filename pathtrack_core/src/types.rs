// pathtrack_core/src/types.rs

use nalgebra::{DVector, Point2};

// --- Core Type Aliases ---
pub type State = DVector<f64>;
pub type Control = DVector<f64>;

/// A 2-D waypoint in the world frame, in meters.
pub type Waypoint = Point2<f64>;
