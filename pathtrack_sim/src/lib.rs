// pathtrack_sim/src/lib.rs

//! Command-line front end: scenario loading, course construction and reporting
//! around the closed-loop simulation in `pathtrack_core`.

use std::error::Error;
use std::io;

use pathtrack_core::prelude::*;
use tracing::{info, warn};

pub mod catalog;
pub mod cli;
pub mod config;
pub mod report;
pub mod scenarios;

use crate::catalog::ScenarioCatalog;
use crate::cli::Cli;
use crate::config::ScenarioConfig;
use crate::report::{LogSummary, TablePrinter};

/// Picks the scenario named on the command line, or the built-in item.
pub fn select_scenario(
    cli: &Cli,
    catalog: &ScenarioCatalog,
) -> Result<ScenarioConfig, Box<dyn Error>> {
    match &cli.scenario {
        Some(name) => {
            let path = catalog
                .resolve(name)
                .ok_or_else(|| format!("unknown scenario '{}'", name))?;
            info!("Loading scenario from {:?}", path);
            Ok(ScenarioConfig::load(&path)?)
        }
        None => Ok(ScenarioConfig::builtin(cli.item, &cli.waypoints)),
    }
}

/// Builds the course for `scenario` and runs it to termination.
pub fn run_scenario(
    scenario: &ScenarioConfig,
) -> Result<(ReferencePath, SimulationOutcome), Box<dyn Error>> {
    let waypoints = scenario.resolve_waypoints();
    let goal = scenarios::goal_of(&waypoints).ok_or("scenario has no waypoints")?;
    let tracking = &scenario.tracking;
    tracking.validate()?;

    let path = calc_spline_course(&waypoints, tracking.course_step)?;
    let profile = calc_speed_profile(&path, tracking.target_speed());
    info!(
        scenario = %scenario.name,
        waypoints = waypoints.len(),
        samples = path.len(),
        "Course built"
    );

    let sim = ClosedLoopSimulation::new(tracking, path, profile, goal)?;
    let outcome = sim.run()?;
    if !outcome.termination.reached_goal() {
        warn!(scenario = %scenario.name, "Goal not reached within the time budget");
    }
    Ok((sim.path().clone(), outcome))
}

/// Entry point shared by the binary.
pub fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let catalog = ScenarioCatalog::scan(&cli.catalog);
    if cli.list {
        for name in catalog.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let scenario = select_scenario(cli, &catalog)?;
    let (path, outcome) = run_scenario(&scenario)?;

    LogSummary::new(scenario.name.clone()).publish(&path, &outcome)?;
    if cli.show {
        TablePrinter::new(io::stdout().lock()).publish(&path, &outcome)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_builtin_standard_course_reaches_the_goal() {
        let scenario = ScenarioConfig::builtin(1, &[]);
        let (path, outcome) = run_scenario(&scenario).unwrap();
        assert!(!path.is_empty());
        assert!(outcome.termination.reached_goal());
    }

    #[test]
    fn test_item_four_without_leading_points_fails_to_build() {
        let scenario = ScenarioConfig::builtin(4, &[]);
        assert!(run_scenario(&scenario).is_err());
    }

    #[test]
    fn test_unknown_scenario_name_is_an_error() {
        let cli = Cli::try_parse_from(["pathtrack", "--scenario", "no_such_scenario"]).unwrap();
        let err = select_scenario(&cli, &ScenarioCatalog::default()).unwrap_err();
        assert!(err.to_string().contains("no_such_scenario"));
    }
}
