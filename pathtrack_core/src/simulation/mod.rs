// pathtrack_core/src/simulation/mod.rs

pub mod closed_loop;
pub mod trajectory;

pub use closed_loop::ClosedLoopSimulation;
pub use trajectory::{
    SimulationOutcome, Termination, Trajectory, TrajectorySample, TrajectorySink,
};
