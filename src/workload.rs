//! Workload construction.
//!
//! Builds process collections from literals, JSON files, or a seeded
//! random generator. Every record goes through [`Process::new`] and the
//! whole collection through [`validate_processes`], so a workload that
//! loads is always schedulable.
//!
//! # File Format
//!
//! ```json
//! [
//!   { "id": 1, "burst_time": 6, "arrival_time": 0 },
//!   { "id": 2, "burst_time": 8, "arrival_time": 1 }
//! ]
//! ```
//!
//! `arrival_time` defaults to 0 when omitted.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SchedulingError};
use crate::models::Process;
use crate::validation::validate_processes;

/// The four-process demonstration set as `(id, burst, arrival)`.
pub const CLASSIC: [(u32, i64, i64); 4] = [(1, 6, 0), (2, 8, 1), (3, 7, 2), (4, 3, 3)];

/// One process as written in a workload file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub id: u32,
    pub burst_time: i64,
    #[serde(default)]
    pub arrival_time: i64,
}

/// The demonstration workload.
pub fn classic() -> Vec<Process> {
    CLASSIC
        .iter()
        .filter_map(|&(id, burst, arrival)| Process::new(id, burst, arrival).ok())
        .collect()
}

/// Builds a workload from `(id, burst, arrival)` tuples.
pub fn from_tuples(tuples: &[(u32, i64, i64)]) -> Result<Vec<Process>> {
    let processes = tuples
        .iter()
        .map(|&(id, burst, arrival)| Process::new(id, burst, arrival))
        .collect::<Result<Vec<_>>>()?;
    validate_processes(&processes)?;
    Ok(processes)
}

/// Parses a JSON array of [`ProcessSpec`]s.
pub fn from_json_str(json: &str) -> Result<Vec<Process>> {
    let specs: Vec<ProcessSpec> = serde_json::from_str(json)?;
    let tuples: Vec<_> = specs
        .iter()
        .map(|s| (s.id, s.burst_time, s.arrival_time))
        .collect();
    from_tuples(&tuples)
}

/// Reads and parses a JSON workload file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .map_err(|e| SchedulingError::Io(format!("{}: {e}", path.display())))?;
    let processes = from_json_str(&json)?;
    debug!(path = %path.display(), count = processes.len(), "workload loaded");
    Ok(processes)
}

/// Shape of a randomly generated workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomWorkload {
    /// Number of processes.
    pub count: usize,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Bursts are drawn from `1..=max_burst`.
    pub max_burst: i64,
}

impl Default for RandomWorkload {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            max_burst: 10,
        }
    }
}

impl RandomWorkload {
    /// Creates a shape with `count` processes and default bounds.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest possible burst.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Draws a workload from `rng`. Ids are `1..=count`.
    ///
    /// Out-of-range bounds are clamped (arrival ≥ 0, burst ≥ 1).
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<Process>> {
        if self.count == 0 {
            return Err(SchedulingError::EmptyInput);
        }
        let max_arrival = self.max_arrival.max(0);
        let max_burst = self.max_burst.max(1);

        (1..=self.count)
            .map(|i| {
                let id = u32::try_from(i).map_err(|_| SchedulingError::InvalidProcessId)?;
                Process::new(
                    id,
                    rng.random_range(1..=max_burst),
                    rng.random_range(0..=max_arrival),
                )
            })
            .collect()
    }
}

/// Draws a reproducible random workload.
pub fn random(shape: RandomWorkload, seed: u64) -> Result<Vec<Process>> {
    let mut rng = StdRng::seed_from_u64(seed);
    shape.generate(&mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic() {
        let processes = classic();
        assert_eq!(processes.len(), CLASSIC.len());
        assert_eq!(processes, from_tuples(&CLASSIC).unwrap());
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_from_tuples_rejects_duplicates() {
        assert_eq!(
            from_tuples(&[(1, 2, 0), (1, 3, 0)]),
            Err(SchedulingError::DuplicateProcessId(1))
        );
        assert_eq!(from_tuples(&[]), Err(SchedulingError::EmptyInput));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            { "id": 1, "burst_time": 6, "arrival_time": 0 },
            { "id": 2, "burst_time": 8 }
        ]"#;
        let processes = from_json_str(json).unwrap();
        assert_eq!(processes.len(), 2);
        assert_eq!(processes[1].arrival_time, 0);
        assert_eq!(processes[1].original_burst, 8);
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(matches!(
            from_json_str("{ not json"),
            Err(SchedulingError::Parse(_))
        ));
        assert_eq!(
            from_json_str(r#"[{ "id": 1, "burst_time": 0 }]"#),
            Err(SchedulingError::NonPositiveBurst { id: 1, burst: 0 })
        );
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load("/nonexistent/workload.json"),
            Err(SchedulingError::Io(_))
        ));
    }

    #[test]
    fn test_random_is_reproducible() {
        let shape = RandomWorkload::new(8).with_max_arrival(20).with_max_burst(5);
        let a = random(shape, 7).unwrap();
        let b = random(shape, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
        assert!(a
            .iter()
            .all(|p| (1..=5).contains(&p.burst_time) && (0..=20).contains(&p.arrival_time)));
        assert!(validate_processes(&a).is_ok());
    }

    #[test]
    fn test_random_empty() {
        assert_eq!(
            random(RandomWorkload::new(0), 1),
            Err(SchedulingError::EmptyInput)
        );
    }
}
