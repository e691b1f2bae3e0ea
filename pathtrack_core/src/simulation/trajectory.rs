// pathtrack_core/src/simulation/trajectory.rs

use serde::Serialize;

use crate::models::bicycle_kinematic::VehicleState;
use crate::planning::course::ReferencePath;

/// One recorded tick of the closed loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
    pub v: f64,
    /// Nearest path sample used by the controller on the tick that produced this state.
    pub target_index: usize,
}

impl TrajectorySample {
    pub fn new(time: f64, state: &VehicleState, target_index: usize) -> Self {
        Self {
            time,
            x: state.x,
            y: state.y,
            yaw: state.yaw,
            v: state.v,
            target_index,
        }
    }
}

/// Recorded time series of the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trajectory {
    pub samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn push(&mut self, sample: TrajectorySample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }

    pub fn yaws(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.yaw).collect()
    }

    pub fn speeds(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.v).collect()
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Termination {
    GoalReached { time: f64 },
    Timeout { time: f64 },
}

impl Termination {
    pub fn time(&self) -> f64 {
        match self {
            Termination::GoalReached { time } | Termination::Timeout { time } => *time,
        }
    }

    pub fn reached_goal(&self) -> bool {
        matches!(self, Termination::GoalReached { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    pub trajectory: Trajectory,
    pub termination: Termination,
    /// State after the terminating tick. It is not part of `trajectory`.
    pub final_state: VehicleState,
    pub ticks: usize,
}

/// Consumer of a finished run, e.g. a plotter or a file writer.
pub trait TrajectorySink {
    fn publish(&mut self, course: &ReferencePath, outcome: &SimulationOutcome)
        -> std::io::Result<()>;
}
