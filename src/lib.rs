//! Discrete-time CPU scheduling simulator.
//!
//! Computes per-process waiting and turnaround times for a static
//! workload under First-Come-First-Served, Round Robin and Shortest Job
//! Next, on a single simulated CPU.
//!
//! # Modules
//!
//! - **`models`**: `Process` records and the `Timeline` of a run
//! - **`scheduler`**: the `Scheduler` trait, the three disciplines,
//!   the `Discipline` selector and `Metrics`
//! - **`validation`**: collection and quantum checks (duplicate IDs,
//!   malformed records, empty input)
//! - **`simulation`**: driver that runs disciplines back to back
//! - **`workload`**: demonstration, JSON and random workloads
//! - **`report`**: text and JSON reports
//!
//! # Example
//!
//! ```
//! use cpu_schedule::scheduler::{FcfsScheduler, Metrics, Scheduler};
//! use cpu_schedule::workload;
//!
//! let mut processes = workload::classic();
//! FcfsScheduler.schedule(&mut processes).unwrap();
//!
//! let (avg_wait, avg_tat) = Metrics::calculate(&processes).unwrap().averages();
//! assert!((avg_wait - 8.75).abs() < 1e-10);
//! assert!((avg_tat - 14.75).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{Result, SchedulingError};
pub use models::{Process, Slice, Timeline};
pub use scheduler::{Discipline, Metrics, Scheduler};
pub use simulation::Simulation;
