//! Execution timeline model.
//!
//! A timeline is the record of a single-CPU run: which process held the
//! CPU during which interval. Gaps between slices are idle time.

use serde::{Deserialize, Serialize};

/// The CPU intervals produced by one scheduling run, in time order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

/// A half-open interval `[start, end)` during which one process ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Running process.
    pub process_id: u32,
    /// Start time.
    pub start: i64,
    /// End time.
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process_id: u32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice, merging it into the previous one when the same
    /// process continues without a gap.
    pub fn push(&mut self, slice: Slice) {
        if let Some(last) = self.slices.last_mut() {
            if last.process_id == slice.process_id && last.end == slice.start {
                last.end = slice.end;
                return;
            }
        }
        self.slices.push(slice);
    }

    /// All slices in time order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Slices belonging to one process.
    pub fn slices_for(&self, process_id: u32) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total time the CPU was running a process.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// End of the last slice, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Time within `[0, makespan)` the CPU spent idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Busy time over makespan. 0.0 for an empty timeline.
    pub fn utilization(&self) -> f64 {
        let horizon = self.makespan();
        if horizon <= 0 {
            return 0.0;
        }
        self.busy_time() as f64 / horizon as f64
    }

    /// Number of times the CPU switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Process ids ordered by the end of their final slice.
    pub fn completion_order(&self) -> Vec<u32> {
        let mut order: Vec<u32> = Vec::new();
        for slice in self.slices.iter().rev() {
            if !order.contains(&slice.process_id) {
                order.push(slice.process_id);
            }
        }
        order.reverse();
        order
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing ran.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(Slice::new(1, 2, 6));
        t.push(Slice::new(2, 6, 10));
        t.push(Slice::new(1, 10, 12));
        t.push(Slice::new(3, 15, 18));
        t
    }

    #[test]
    fn test_timeline_makespan_and_busy() {
        let t = sample_timeline();
        assert_eq!(t.makespan(), 18);
        assert_eq!(t.busy_time(), 13);
        assert_eq!(t.idle_time(), 5);
        assert!((t.utilization() - 13.0 / 18.0).abs() < 1e-10);
    }

    #[test]
    fn test_timeline_merges_contiguous_slices() {
        let mut t = Timeline::new();
        t.push(Slice::new(1, 0, 4));
        t.push(Slice::new(1, 4, 6));
        assert_eq!(t.len(), 1);
        assert_eq!(t.slices()[0], Slice::new(1, 0, 6));

        // A gap keeps slices apart
        t.push(Slice::new(1, 8, 9));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_timeline_context_switches() {
        let t = sample_timeline();
        assert_eq!(t.context_switches(), 3);
    }

    #[test]
    fn test_timeline_completion_order() {
        let t = sample_timeline();
        assert_eq!(t.completion_order(), vec![2, 1, 3]);
    }

    #[test]
    fn test_slices_for() {
        let t = sample_timeline();
        let p1 = t.slices_for(1);
        assert_eq!(p1.len(), 2);
        assert_eq!(p1.iter().map(|s| s.duration()).sum::<i64>(), 6);
        assert!(t.slices_for(99).is_empty());
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.idle_time(), 0);
        assert!((t.utilization() - 0.0).abs() < 1e-10);
        assert!(t.completion_order().is_empty());
    }
}
