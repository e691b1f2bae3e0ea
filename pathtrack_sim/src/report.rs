// pathtrack_sim/src/report.rs

//! Consumers of a finished run.

use std::io::{self, Write};

use pathtrack_core::planning::course::ReferencePath;
use pathtrack_core::simulation::trajectory::{SimulationOutcome, TrajectorySink};
use tracing::info;

/// Writes the trajectory as a whitespace-aligned table.
pub struct TablePrinter<W: Write> {
    out: W,
}

impl<W: Write> TablePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TrajectorySink for TablePrinter<W> {
    fn publish(&mut self, _course: &ReferencePath, outcome: &SimulationOutcome) -> io::Result<()> {
        writeln!(
            self.out,
            "{:>8} {:>10} {:>10} {:>8} {:>7} {:>6}",
            "t[s]", "x[m]", "y[m]", "yaw", "v[m/s]", "idx"
        )?;
        for s in &outcome.trajectory.samples {
            writeln!(
                self.out,
                "{:>8.2} {:>10.3} {:>10.3} {:>8.3} {:>7.3} {:>6}",
                s.time, s.x, s.y, s.yaw, s.v, s.target_index
            )?;
        }
        self.out.flush()
    }
}

/// Emits one `info!` record summarizing the run.
pub struct LogSummary {
    scenario: String,
}

impl LogSummary {
    pub fn new(scenario: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
        }
    }
}

impl TrajectorySink for LogSummary {
    fn publish(&mut self, course: &ReferencePath, outcome: &SimulationOutcome) -> io::Result<()> {
        let fin = &outcome.final_state;
        info!(
            scenario = %self.scenario,
            reached_goal = outcome.termination.reached_goal(),
            time = outcome.termination.time(),
            ticks = outcome.ticks,
            samples = outcome.trajectory.len(),
            course_length = course.s.last().copied().unwrap_or(0.0),
            final_x = fin.x,
            final_y = fin.y,
            final_v = fin.v,
            "Run finished"
        );
        Ok(())
    }
}
