// pathtrack_sim/src/cli.rs

use clap::Parser;
use pathtrack_core::types::Waypoint;
use std::path::PathBuf;

/// Pathtrack: LQR steering and PID speed tracking of a kinematic bicycle
/// along a cubic-spline course.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Scenario to run, either a catalog name or a path to a TOML file.
    /// Without it the built-in `--item` course is used.
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Directory scanned for scenario files.
    #[arg(long, default_value = "assets/scenarios")]
    pub catalog: PathBuf,

    /// Built-in competition item.
    #[arg(long, default_value_t = 1)]
    pub item: u32,

    /// Leading waypoint for item 4, given as `X,Y`. Repeatable.
    #[arg(long = "waypoint", value_parser = parse_waypoint)]
    pub waypoints: Vec<Waypoint>,

    /// List the catalog and exit.
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Print every trajectory sample after the run.
    #[arg(long, default_value_t = false)]
    pub show: bool,
}

fn parse_waypoint(raw: &str) -> Result<Waypoint, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{}`", raw))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x `{}`: {}", x, e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y `{}`: {}", y, e))?;
    Ok(Waypoint::new(x, y))
}
