//! Error taxonomy for scheduling runs.
//!
//! Every error is detected before a scheduler mutates any record, so a
//! failed call leaves the process collection untouched.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SchedulingError>;

/// Errors raised while constructing, validating, scheduling or
/// aggregating processes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchedulingError {
    /// Round Robin quantum was zero or negative.
    #[error("invalid quantum {0}: must be a positive integer")]
    InvalidQuantum(i64),

    /// No processes were supplied.
    #[error("no processes supplied")]
    EmptyInput,

    /// Two records in one collection share an id.
    #[error("duplicate process id {0}")]
    DuplicateProcessId(u32),

    /// Process ids must be positive.
    #[error("process id must be positive")]
    InvalidProcessId,

    /// Burst time was zero or negative.
    #[error("process {id}: burst time {burst} must be positive")]
    NonPositiveBurst { id: u32, burst: i64 },

    /// Remaining burst differs from the burst the record was built with,
    /// e.g. a record that was edited or never reset after a run.
    #[error("process {id}: burst time {burst} does not match original burst {original}")]
    BurstMismatch { id: u32, burst: i64, original: i64 },

    /// Arrival time was negative.
    #[error("process {id}: arrival time {arrival} must not be negative")]
    NegativeArrival { id: u32, arrival: i64 },

    /// Aggregation was asked for a record no scheduler has completed.
    #[error("process {0} has not been scheduled to completion")]
    IncompleteProcess(u32),

    /// Workload file could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// Workload file could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for SchedulingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SchedulingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
