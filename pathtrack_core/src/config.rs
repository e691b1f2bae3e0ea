// pathtrack_core/src/config.rs

//! The single immutable configuration value shared by every component.
//!
//! Every field has a default, so a partial TOML table deserializes cleanly.

use serde::{Deserialize, Serialize};

use crate::control::lqr::LqrWeights;
use crate::control::riccati::RiccatiSettings;
use crate::error::ConfigError;
use crate::models::bicycle_kinematic::VehicleState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Control period and integration step, in seconds.
    pub dt: f64,
    /// Distance between front and rear axles, in meters.
    pub wheelbase: f64,
    /// Steering saturation, in degrees.
    pub max_steer_deg: f64,
    /// Cruise speed along the course, in km/h.
    pub target_speed_kmh: f64,
    /// Arc-length spacing of the sampled reference path, in meters.
    pub course_step: f64,
    /// Simulated time budget, in seconds.
    pub max_time: f64,
    /// Distance to the goal that counts as arrival, in meters.
    pub goal_radius: f64,
    pub speed: SpeedGains,
    pub lqr: LqrWeights,
    pub riccati: RiccatiSettings,
    pub initial_state: VehicleState,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            dt: 0.1,
            wheelbase: 0.5,
            max_steer_deg: 45.0,
            target_speed_kmh: 10.0,
            course_step: 0.1,
            max_time: 500.0,
            goal_radius: 0.3,
            speed: SpeedGains::default(),
            lqr: LqrWeights::default(),
            riccati: RiccatiSettings::default(),
            initial_state: VehicleState::default(),
        }
    }
}

/// Longitudinal PID gains. Only `kp` takes part in the control law.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedGains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
}

impl Default for SpeedGains {
    fn default() -> Self {
        Self {
            kp: 10.0,
            ki: 0.001,
            kd: 2.0,
        }
    }
}

impl TrackingConfig {
    /// Steering saturation in radians.
    pub fn max_steer(&self) -> f64 {
        self.max_steer_deg.to_radians()
    }

    /// Cruise speed in m/s.
    pub fn target_speed(&self) -> f64 {
        self.target_speed_kmh / 3.6
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("dt", self.dt)?;
        positive("wheelbase", self.wheelbase)?;
        positive("max_steer_deg", self.max_steer_deg)?;
        positive("course_step", self.course_step)?;
        positive("max_time", self.max_time)?;
        positive("goal_radius", self.goal_radius)?;
        positive("riccati.tolerance", self.riccati.tolerance)?;

        if self.max_steer_deg >= 90.0 {
            return Err(ConfigError::Invalid {
                field: "max_steer_deg",
                reason: format!("must be below 90 degrees, got {}", self.max_steer_deg),
            });
        }
        if self.riccati.max_iterations == 0 {
            return Err(ConfigError::Invalid {
                field: "riccati.max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.target_speed_kmh.is_finite() {
            return Err(ConfigError::Invalid {
                field: "target_speed_kmh",
                reason: format!("must be finite, got {}", self.target_speed_kmh),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be positive and finite, got {}", value),
        })
    }
}
