// pathtrack_sim/src/config.rs

//! Scenario configuration, layered as built-in defaults, then a TOML file,
//! then `PATHTRACK_*` environment variables.

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use pathtrack_core::config::TrackingConfig;
use pathtrack_core::types::Waypoint;
use serde::{Deserialize, Serialize};

use crate::scenarios::competition_item;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub name: String,
    /// Built-in waypoint set used when `waypoints` is empty.
    pub item: u32,
    /// Explicit `[x, y]` waypoints. Takes precedence over `item`.
    pub waypoints: Vec<[f64; 2]>,
    /// Leading points for item 4.
    pub extra_waypoints: Vec<[f64; 2]>,
    pub tracking: TrackingConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: "standard_course".to_string(),
            item: 1,
            waypoints: Vec::new(),
            extra_waypoints: Vec::new(),
            tracking: TrackingConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Loads a scenario file on top of the defaults.
    pub fn load(path: &Path) -> Result<Self, figment::Error> {
        Self::extract(Toml::file(path))
    }

    /// Parses scenario TOML text on top of the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, figment::Error> {
        Self::extract(Toml::string(toml))
    }

    fn extract(file: figment::providers::Data<Toml>) -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(ScenarioConfig::default()))
            .merge(file)
            .merge(Env::prefixed("PATHTRACK_").split("__"))
            .extract()
    }

    /// A built-in scenario with no file behind it.
    pub fn builtin(item: u32, extra: &[Waypoint]) -> Self {
        Self {
            name: format!("item_{}", item),
            item,
            extra_waypoints: extra.iter().map(|p| [p.x, p.y]).collect(),
            ..Default::default()
        }
    }

    /// The waypoints this scenario drives through.
    pub fn resolve_waypoints(&self) -> Vec<Waypoint> {
        if !self.waypoints.is_empty() {
            return to_points(&self.waypoints);
        }
        competition_item(self.item, &to_points(&self.extra_waypoints))
    }
}

fn to_points(raw: &[[f64; 2]]) -> Vec<Waypoint> {
    raw.iter().map(|&[x, y]| Waypoint::new(x, y)).collect()
}
