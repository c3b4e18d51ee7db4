//! Process record model.
//!
//! A process is the unit of work the simulated CPU executes. It carries
//! its scheduling inputs (arrival, burst) and the outputs a scheduler
//! writes back (waiting, turnaround).
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulingError};

/// One process's scheduling attributes and computed results.
///
/// Outputs are only meaningful after a scheduler has run the record to
/// completion. Round Robin consumes `burst_time` as remaining time, so a
/// record must be [`reset`](Process::reset) before it is scheduled again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique positive identifier.
    pub id: u32,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// CPU time still required. Equal to `original_burst` until a
    /// preemptive scheduler consumes it.
    pub burst_time: i64,
    /// Burst supplied at construction.
    pub original_burst: i64,
    /// Time spent eligible but not running.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
}

impl Process {
    /// Creates a new process record.
    ///
    /// # Errors
    /// - [`SchedulingError::InvalidProcessId`] if `id` is 0.
    /// - [`SchedulingError::NonPositiveBurst`] if `burst_time <= 0`.
    /// - [`SchedulingError::NegativeArrival`] if `arrival_time < 0`.
    pub fn new(id: u32, burst_time: i64, arrival_time: i64) -> Result<Self> {
        if id == 0 {
            return Err(SchedulingError::InvalidProcessId);
        }
        if burst_time <= 0 {
            return Err(SchedulingError::NonPositiveBurst {
                id,
                burst: burst_time,
            });
        }
        if arrival_time < 0 {
            return Err(SchedulingError::NegativeArrival {
                id,
                arrival: arrival_time,
            });
        }
        Ok(Self {
            id,
            arrival_time,
            burst_time,
            original_burst: burst_time,
            waiting_time: 0,
            turnaround_time: 0,
        })
    }

    /// Restores the record to its freshly constructed state.
    pub fn reset(&mut self) {
        self.burst_time = self.original_burst;
        self.waiting_time = 0;
        self.turnaround_time = 0;
    }

    /// Time at which the process finished (arrival + turnaround).
    #[inline]
    pub fn completion_time(&self) -> i64 {
        self.arrival_time + self.turnaround_time
    }

    /// Whether a scheduler has written results for this record.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.original_burst > 0 && self.turnaround_time >= self.original_burst
    }
}
