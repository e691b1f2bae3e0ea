// pathtrack_core/src/control/speed.rs

use crate::config::SpeedGains;

/// Proportional longitudinal controller.
#[derive(Debug, Clone, Copy)]
pub struct SpeedController {
    gains: SpeedGains,
}

impl SpeedController {
    pub fn new(gains: SpeedGains) -> Self {
        Self { gains }
    }

    /// Acceleration command, `kp * (target - current)`.
    pub fn acceleration(&self, target_speed: f64, current_speed: f64) -> f64 {
        self.gains.kp * (target_speed - current_speed)
    }
}
