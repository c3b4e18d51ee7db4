//! Shortest Job Next (non-preemptive) scheduler.
//!
//! # Algorithm
//!
//! Processes are admitted in arrival order into a ready set keyed by
//! `(burst, arrival, input position)`. At every decision point the
//! minimum is run to completion. When nothing is ready the clock jumps
//! to the next arrival.
//!
//! Sorting the whole collection by burst once is only correct when every
//! process is available at t=0; this scheduler honors arrivals.
//!
//! # Complexity
//! O(n log n).
//!
//! # Reference
//! Smith (1956), SPT is optimal for mean flow time on a single machine
//! with simultaneous release.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::{arrival_order, Scheduler};
use crate::error::Result;
use crate::models::{Process, Slice, Timeline};
use crate::validation::validate_processes;

/// Non-preemptive shortest-burst-first scheduler.
///
/// Ties on burst go to the earlier arrival, then to the earlier input
/// position.
#[derive(Debug, Clone, Copy, Default)]
pub struct SjnScheduler;

impl Scheduler for SjnScheduler {
    fn name(&self) -> &'static str {
        "SJN"
    }

    fn schedule(&self, processes: &mut [Process]) -> Result<Timeline> {
        validate_processes(processes)?;

        let order = arrival_order(processes);
        let mut timeline = Timeline::new();
        let mut ready: BinaryHeap<Reverse<(i64, i64, usize)>> = BinaryHeap::new();
        let mut next = 0;
        let mut current_time: i64 = 0;

        while next < order.len() || !ready.is_empty() {
            while let Some(&idx) = order.get(next) {
                let p = &processes[idx];
                if p.arrival_time > current_time {
                    break;
                }
                trace!(pid = p.id, time = current_time, "sjn admit");
                ready.push(Reverse((p.burst_time, p.arrival_time, idx)));
                next += 1;
            }

            match ready.pop() {
                Some(Reverse((_, _, idx))) => {
                    let p = &mut processes[idx];
                    p.waiting_time = current_time - p.arrival_time;
                    p.turnaround_time = p.waiting_time + p.burst_time;

                    debug!(pid = p.id, start = current_time, burst = p.burst_time, "sjn dispatch");
                    timeline.push(Slice::new(p.id, current_time, current_time + p.burst_time));
                    current_time += p.burst_time;
                }
                None => match order.get(next) {
                    Some(&idx) => {
                        trace!(from = current_time, to = processes[idx].arrival_time, "sjn idle");
                        current_time = processes[idx].arrival_time;
                    }
                    None => break,
                },
            }
        }

        Ok(timeline)
    }

    fn description(&self) -> &'static str {
        "Shortest Job Next"
    }
}
