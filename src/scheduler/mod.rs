//! Single-CPU schedulers and run metrics.
//!
//! Each scheduler borrows a process collection, simulates a discrete-time
//! single-CPU run, writes waiting and turnaround times back into the
//! records and returns the run's [`Timeline`].
//!
//! # Disciplines
//!
//! | Discipline | Preemptive | Selection |
//! |------------|-----------|-----------|
//! | FCFS | no | earliest arrival |
//! | SJN | no | smallest burst among arrived processes |
//! | Round Robin | yes, fixed quantum | FIFO ready queue |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

mod fcfs;
mod metrics;
mod round_robin;
mod sjn;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Process, Timeline};

pub use fcfs::FcfsScheduler;
pub use metrics::Metrics;
pub use round_robin::RoundRobinScheduler;
pub use sjn::SjnScheduler;

/// A scheduling discipline that runs a process collection to completion.
///
/// Implementations validate the collection before mutating anything, so
/// an `Err` leaves every record as it was.
pub trait Scheduler {
    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Simulates the run, writing `waiting_time` and `turnaround_time`
    /// into every record.
    fn schedule(&self, processes: &mut [Process]) -> Result<Timeline>;

    /// Long-form name.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Tagged selection of a scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "discipline")]
pub enum Discipline {
    /// First-Come-First-Served.
    Fcfs,
    /// Round Robin with a fixed quantum.
    RoundRobin { quantum: i64 },
    /// Shortest Job Next, non-preemptive.
    Sjn,
}

impl Discipline {
    /// Runs this discipline over `processes`.
    pub fn schedule(&self, processes: &mut [Process]) -> Result<Timeline> {
        match *self {
            Discipline::Fcfs => FcfsScheduler.schedule(processes),
            Discipline::RoundRobin { quantum } => {
                RoundRobinScheduler::new(quantum)?.schedule(processes)
            }
            Discipline::Sjn => SjnScheduler.schedule(processes),
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match *self {
            Discipline::Fcfs => FcfsScheduler.description(),
            Discipline::RoundRobin { quantum } => RoundRobinScheduler { quantum }.description(),
            Discipline::Sjn => SjnScheduler.description(),
        }
    }

    /// Short name of the underlying scheduler (e.g., "FCFS", "RR").
    pub fn short_name(&self) -> &'static str {
        match *self {
            Discipline::Fcfs => FcfsScheduler.name(),
            Discipline::RoundRobin { quantum } => RoundRobinScheduler { quantum }.name(),
            Discipline::Sjn => SjnScheduler.name(),
        }
    }

    /// The three disciplines, in the classic demonstration order.
    pub fn all(quantum: i64) -> [Discipline; 3] {
        [
            Discipline::Fcfs,
            Discipline::RoundRobin { quantum },
            Discipline::Sjn,
        ]
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::RoundRobin { quantum } => write!(f, "{} (quantum={quantum})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Indices of `processes` sorted by arrival time. Ties keep input order.
fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival_time);
    indices
}
