//! Input validation for scheduling runs.
//!
//! Checks the structural integrity of a process collection before any
//! scheduler touches it. Detects:
//! - Empty collections
//! - Duplicate process IDs
//! - Malformed records (zero id, non-positive burst, negative arrival)
//! - Records whose burst no longer matches their original burst
//! - Non-positive Round Robin quanta

use std::collections::HashSet;

use crate::error::{Result, SchedulingError};
use crate::models::Process;

/// Validates a process collection, returning the first problem found.
///
/// Records are public structs and may be edited after construction, so
/// schedulers re-run these checks rather than trusting `Process::new`.
pub fn validate_processes(processes: &[Process]) -> Result<()> {
    match collect_issues(processes).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Collects every problem in a process collection.
///
/// Checks:
/// 1. The collection is not empty
/// 2. No two records share an id
/// 3. Every id is positive
/// 4. Every burst is positive
/// 5. Every burst still equals the original burst (fresh or reset record)
/// 6. Every arrival is non-negative
pub fn collect_issues(processes: &[Process]) -> Vec<SchedulingError> {
    if processes.is_empty() {
        return vec![SchedulingError::EmptyInput];
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(SchedulingError::DuplicateProcessId(p.id));
        }
        if p.id == 0 {
            errors.push(SchedulingError::InvalidProcessId);
        }
        if p.burst_time <= 0 {
            errors.push(SchedulingError::NonPositiveBurst {
                id: p.id,
                burst: p.burst_time,
            });
        } else if p.original_burst <= 0 {
            errors.push(SchedulingError::NonPositiveBurst {
                id: p.id,
                burst: p.original_burst,
            });
        } else if p.burst_time != p.original_burst {
            errors.push(SchedulingError::BurstMismatch {
                id: p.id,
                burst: p.burst_time,
                original: p.original_burst,
            });
        }
        if p.arrival_time < 0 {
            errors.push(SchedulingError::NegativeArrival {
                id: p.id,
                arrival: p.arrival_time,
            });
        }
    }

    errors
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: i64) -> Result<()> {
    if quantum <= 0 {
        return Err(SchedulingError::InvalidQuantum(quantum));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 6, 0).unwrap(),
            Process::new(2, 8, 1).unwrap(),
            Process::new(3, 7, 2).unwrap(),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(validate_processes(&[]), Err(SchedulingError::EmptyInput));
    }

    #[test]
    fn test_duplicate_process_id() {
        let mut processes = sample_processes();
        processes.push(Process::new(2, 1, 5).unwrap());

        assert_eq!(
            validate_processes(&processes),
            Err(SchedulingError::DuplicateProcessId(2))
        );
    }

    #[test]
    fn test_consumed_burst_rejected() {
        // A record Round Robin ran to completion and nobody reset
        let mut processes = sample_processes();
        processes[1].burst_time = 0;

        assert_eq!(
            validate_processes(&processes),
            Err(SchedulingError::NonPositiveBurst { id: 2, burst: 0 })
        );
    }

    #[test]
    fn test_burst_mismatch_rejected() {
        let mut processes = sample_processes();
        processes[0].burst_time = 1;

        assert_eq!(
            validate_processes(&processes),
            Err(SchedulingError::BurstMismatch {
                id: 1,
                burst: 1,
                original: 6
            })
        );
    }

    #[test]
    fn test_non_positive_original_burst_rejected() {
        let mut processes = sample_processes();
        processes[2].original_burst = 0;

        assert_eq!(
            validate_processes(&processes),
            Err(SchedulingError::NonPositiveBurst { id: 3, burst: 0 })
        );
    }

    #[test]
    fn test_deserialized_mismatch_rejected() {
        let json = r#"{"id":1,"arrival_time":0,"burst_time":3,"original_burst":9,"waiting_time":0,"turnaround_time":0}"#;
        let p: Process = serde_json::from_str(json).unwrap();

        assert_eq!(
            validate_processes(&[p]),
            Err(SchedulingError::BurstMismatch {
                id: 1,
                burst: 3,
                original: 9
            })
        );
    }

    #[test]
    fn test_edited_record_rejected() {
        let mut processes = sample_processes();
        processes[0].arrival_time = -4;
        processes[2].id = 0;

        let errors = collect_issues(&processes);
        assert!(errors.contains(&SchedulingError::NegativeArrival { id: 1, arrival: -4 }));
        assert!(errors.contains(&SchedulingError::InvalidProcessId));
    }

    #[test]
    fn test_multiple_errors() {
        let mut processes = sample_processes();
        processes.push(Process::new(1, 2, 0).unwrap());
        processes[2].burst_time = -1;

        let errors = collect_issues(&processes);
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_validate_quantum() {
        assert!(validate_quantum(1).is_ok());
        assert_eq!(validate_quantum(0), Err(SchedulingError::InvalidQuantum(0)));
        assert_eq!(
            validate_quantum(-2),
            Err(SchedulingError::InvalidQuantum(-2))
        );
    }
}
