//! Simulation driver.
//!
//! Owns the seed workload and runs disciplines over it one after another.
//! The working collection is reset before every run, since Round Robin
//! consumes burst times.

use tracing::info;

use crate::error::Result;
use crate::models::Process;
use crate::report::{RunReport, SimulationReport};
use crate::scheduler::{Discipline, Metrics};
use crate::validation::validate_processes;

/// A validated workload ready to be scheduled repeatedly.
#[derive(Debug, Clone)]
pub struct Simulation {
    processes: Vec<Process>,
}

impl Simulation {
    /// Creates a simulation over `processes`.
    pub fn new(processes: Vec<Process>) -> Result<Self> {
        validate_processes(&processes)?;
        Ok(Self { processes })
    }

    /// The seed workload.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Runs one discipline over a fresh copy of the workload.
    pub fn run(&self, discipline: Discipline) -> Result<RunReport> {
        let mut working = self.processes.clone();
        Self::run_on(&mut working, discipline)
    }

    /// Runs each discipline in turn over one working collection, resetting
    /// it between runs.
    pub fn run_all(&self, disciplines: &[Discipline]) -> Result<SimulationReport> {
        let mut working = self.processes.clone();
        let runs = disciplines
            .iter()
            .map(|&d| Self::run_on(&mut working, d))
            .collect::<Result<Vec<_>>>()?;
        Ok(SimulationReport { runs })
    }

    fn run_on(working: &mut [Process], discipline: Discipline) -> Result<RunReport> {
        working.iter_mut().for_each(Process::reset);

        let timeline = discipline.schedule(working)?;
        let metrics = Metrics::calculate(working)?;
        info!(
            scheduler = discipline.short_name(),
            discipline = %discipline,
            avg_waiting = metrics.average_waiting,
            avg_turnaround = metrics.average_turnaround,
            makespan = metrics.makespan,
            "run complete"
        );

        Ok(RunReport {
            discipline,
            processes: working.to_vec(),
            timeline,
            metrics,
        })
    }
}
