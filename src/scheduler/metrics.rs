//! Run quality metrics.
//!
//! Reduces a completed process collection to summary statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average waiting | mean(waiting_time) |
//! | Average turnaround | mean(turnaround_time) |
//! | Max waiting / turnaround | largest single value |
//! | Makespan | latest completion time |
//! | Throughput | processes / makespan |

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulingError};
use crate::models::Process;

/// Summary statistics for one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Number of processes aggregated.
    pub process_count: usize,
    /// Sum of waiting times.
    pub total_waiting: i64,
    /// Sum of turnaround times.
    pub total_turnaround: i64,
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Largest waiting time of any process.
    pub max_waiting: i64,
    /// Largest turnaround time of any process.
    pub max_turnaround: i64,
    /// Latest completion time.
    pub makespan: i64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl Metrics {
    /// Computes metrics from a collection every scheduler has completed.
    ///
    /// # Errors
    /// - [`SchedulingError::EmptyInput`] for an empty collection.
    /// - [`SchedulingError::IncompleteProcess`] if a record was never
    ///   scheduled.
    pub fn calculate(processes: &[Process]) -> Result<Self> {
        if processes.is_empty() {
            return Err(SchedulingError::EmptyInput);
        }
        if let Some(p) = processes.iter().find(|p| !p.is_completed()) {
            return Err(SchedulingError::IncompleteProcess(p.id));
        }

        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut max_waiting: i64 = 0;
        let mut max_turnaround: i64 = 0;
        let mut makespan: i64 = 0;

        for p in processes {
            total_waiting += p.waiting_time;
            total_turnaround += p.turnaround_time;
            max_waiting = max_waiting.max(p.waiting_time);
            max_turnaround = max_turnaround.max(p.turnaround_time);
            makespan = makespan.max(p.completion_time());
        }

        let count = processes.len();
        Ok(Self {
            process_count: count,
            total_waiting,
            total_turnaround,
            average_waiting: total_waiting as f64 / count as f64,
            average_turnaround: total_turnaround as f64 / count as f64,
            max_waiting,
            max_turnaround,
            makespan,
            // makespan > 0: every completed process has a positive burst
            throughput: count as f64 / makespan as f64,
        })
    }

    /// `(average_waiting, average_turnaround)`.
    pub fn averages(&self) -> (f64, f64) {
        (self.average_waiting, self.average_turnaround)
    }
}
