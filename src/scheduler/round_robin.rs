//! Round Robin scheduler.
//!
//! # Algorithm
//!
//! 1. Admit every arrived process to the back of a FIFO ready queue.
//! 2. If the queue is empty, jump the clock to the next arrival.
//! 3. Pop the front process and run it for at most one quantum.
//! 4. A preempted process goes to the back of the queue *after* the
//!    processes that arrived during its slice.
//!
//! Remaining time is tracked per process id. The record's `burst_time`
//! mirrors it, so it reads 0 once the run completes and the record must
//! be reset before it is scheduled again.
//!
//! # Complexity
//! O(n log n + total_burst / quantum).

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use super::{arrival_order, Scheduler};
use crate::error::Result;
use crate::models::{Process, Slice, Timeline};
use crate::validation::{validate_processes, validate_quantum};

/// Preemptive time-sliced scheduler with a fixed quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinScheduler {
    pub(super) quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// # Errors
    /// [`SchedulingError::InvalidQuantum`](crate::SchedulingError::InvalidQuantum)
    /// if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self> {
        validate_quantum(quantum)?;
        Ok(Self { quantum })
    }

    /// Maximum CPU time a process receives per turn.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

/// Moves every process that has arrived by `now` to the back of `queue`.
fn admit(
    processes: &[Process],
    order: &[usize],
    next: &mut usize,
    now: i64,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&idx) = order.get(*next) {
        if processes[idx].arrival_time > now {
            break;
        }
        trace!(pid = processes[idx].id, time = now, "rr admit");
        queue.push_back(idx);
        *next += 1;
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &mut [Process]) -> Result<Timeline> {
        validate_quantum(self.quantum)?;
        validate_processes(processes)?;

        let order = arrival_order(processes);
        let mut remaining: HashMap<u32, i64> =
            processes.iter().map(|p| (p.id, p.burst_time)).collect();
        let mut timeline = Timeline::new();
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
        let mut next = 0;
        let mut current_time: i64 = 0;

        while next < order.len() || !queue.is_empty() {
            admit(processes, &order, &mut next, current_time, &mut queue);

            let Some(idx) = queue.pop_front() else {
                match order.get(next) {
                    Some(&idx) => {
                        trace!(from = current_time, to = processes[idx].arrival_time, "rr idle");
                        current_time = processes[idx].arrival_time;
                        continue;
                    }
                    None => break,
                }
            };

            let id = processes[idx].id;
            let left = remaining.get(&id).copied().unwrap_or_default();
            let start = current_time;

            if left > self.quantum {
                current_time += self.quantum;
                remaining.insert(id, left - self.quantum);
                processes[idx].burst_time = left - self.quantum;
                debug!(pid = id, start, left = left - self.quantum, "rr preempt");

                timeline.push(Slice::new(id, start, current_time));
                admit(processes, &order, &mut next, current_time, &mut queue);
                queue.push_back(idx);
            } else {
                current_time += left;
                remaining.insert(id, 0);

                let p = &mut processes[idx];
                p.burst_time = 0;
                p.turnaround_time = current_time - p.arrival_time;
                p.waiting_time = p.turnaround_time - p.original_burst;
                debug!(pid = id, start, end = current_time, "rr complete");

                timeline.push(Slice::new(id, start, current_time));
            }
        }

        Ok(timeline)
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
