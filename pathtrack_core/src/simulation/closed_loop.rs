// pathtrack_core/src/simulation/closed_loop.rs

use tracing::{debug, info};

use crate::config::TrackingConfig;
use crate::control::speed::SpeedController;
use crate::control::tracking::{TrackingController, TrackingErrors};
use crate::error::SimulationError;
use crate::models::bicycle_kinematic::{BicycleKinematicModel, VehicleState};
use crate::planning::course::ReferencePath;
use crate::simulation::trajectory::{
    SimulationOutcome, Termination, Trajectory, TrajectorySample,
};
use crate::types::Waypoint;

/// Drives the bicycle model along a reference path until the goal is reached
/// or the time budget runs out.
#[derive(Debug, Clone)]
pub struct ClosedLoopSimulation {
    dt: f64,
    max_time: f64,
    goal_radius: f64,
    initial_state: VehicleState,
    model: BicycleKinematicModel,
    steering: TrackingController,
    speed: SpeedController,
    path: ReferencePath,
    speed_profile: Vec<f64>,
    goal: Waypoint,
}

impl ClosedLoopSimulation {
    pub fn new(
        config: &TrackingConfig,
        path: ReferencePath,
        speed_profile: Vec<f64>,
        goal: Waypoint,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        if speed_profile.len() != path.len() {
            return Err(SimulationError::SpeedProfileMismatch {
                path: path.len(),
                profile: speed_profile.len(),
            });
        }

        Ok(Self {
            dt: config.dt,
            max_time: config.max_time,
            goal_radius: config.goal_radius,
            initial_state: config.initial_state,
            model: BicycleKinematicModel::new(config.wheelbase, config.max_steer()),
            steering: TrackingController::new(config),
            speed: SpeedController::new(config.speed),
            path,
            speed_profile,
            goal,
        })
    }

    pub fn path(&self) -> &ReferencePath {
        &self.path
    }

    pub fn speed_profile(&self) -> &[f64] {
        &self.speed_profile
    }

    pub fn goal(&self) -> Waypoint {
        self.goal
    }

    /// Runs from the configured initial state.
    pub fn run(&self) -> Result<SimulationOutcome, SimulationError> {
        self.run_from(self.initial_state)
    }

    /// Runs from `initial`. The first trajectory sample is `initial` at t = 0.
    pub fn run_from(&self, initial: VehicleState) -> Result<SimulationOutcome, SimulationError> {
        debug!(
            samples = self.path.len(),
            goal_x = self.goal.x,
            goal_y = self.goal.y,
            "Starting closed-loop run"
        );

        let mut state = initial;
        let mut previous = TrackingErrors::default();
        let mut trajectory = Trajectory::default();
        trajectory.push(TrajectorySample::new(0.0, &state, 0));

        let mut ticks = 0usize;
        let termination = loop {
            let cmd = self.steering.compute(&state, &self.path, previous)?;
            let accel = self
                .speed
                .acceleration(self.speed_profile[cmd.nearest_index], state.v);
            state = self.model.step(&state, accel, cmd.steering, self.dt);
            previous = cmd.errors;

            ticks += 1;
            let time = ticks as f64 * self.dt;

            if state.distance_to(self.goal.x, self.goal.y) <= self.goal_radius {
                break Termination::GoalReached { time };
            }
            if time >= self.max_time {
                break Termination::Timeout { time };
            }

            trajectory.push(TrajectorySample::new(time, &state, cmd.nearest_index));
        };

        match termination {
            Termination::GoalReached { time } => info!(time, ticks, "Goal reached"),
            Termination::Timeout { time } => info!(time, ticks, "Simulation timed out"),
        }

        Ok(SimulationOutcome {
            trajectory,
            termination,
            final_state: state,
            ticks,
        })
    }
}
