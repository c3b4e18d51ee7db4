//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time.
//! 2. Run each to completion in that order, jumping the clock forward
//!    over idle gaps.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the run.

use tracing::debug;

use super::{arrival_order, Scheduler};
use crate::error::Result;
use crate::models::{Process, Slice, Timeline};
use crate::validation::validate_processes;

/// Non-preemptive scheduler that runs processes in arrival order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &mut [Process]) -> Result<Timeline> {
        validate_processes(processes)?;

        let mut timeline = Timeline::new();
        let mut current_time: i64 = 0;

        for idx in arrival_order(processes) {
            let p = &mut processes[idx];
            current_time = current_time.max(p.arrival_time);
            p.waiting_time = current_time - p.arrival_time;
            p.turnaround_time = p.waiting_time + p.burst_time;

            debug!(pid = p.id, start = current_time, burst = p.burst_time, "fcfs dispatch");
            timeline.push(Slice::new(p.id, current_time, current_time + p.burst_time));
            current_time += p.burst_time;
        }

        Ok(timeline)
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}
