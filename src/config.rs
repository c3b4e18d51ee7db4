//! Command-line configuration.
//!
//! ```bash
//! cpu-schedule --quantum 4
//! cpu-schedule --input workload.json --algorithm sjn
//! cpu-schedule --random 20 --seed 7 --format json
//! SCHED_QUANTUM=2 cpu-schedule --timeline
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::Result;
use crate::models::Process;
use crate::scheduler::Discipline;
use crate::workload::{self, RandomWorkload};

/// Simulator configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "cpu-schedule")]
#[command(about = "Simulates FCFS, Round Robin and Shortest Job Next CPU scheduling")]
#[command(version)]
pub struct Config {
    /// Round Robin time quantum
    #[arg(short, long, default_value = "4", env = "SCHED_QUANTUM", allow_negative_numbers = true)]
    pub quantum: i64,

    /// JSON workload file (array of {id, burst_time, arrival_time})
    #[arg(short, long, env = "SCHED_INPUT", conflicts_with = "random")]
    pub input: Option<PathBuf>,

    /// Generate a random workload with this many processes
    #[arg(long)]
    pub random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value = "42", env = "SCHED_SEED")]
    pub seed: u64,

    /// Latest arrival time for --random
    #[arg(long = "max-arrival", default_value = "10")]
    pub max_arrival: i64,

    /// Longest burst time for --random
    #[arg(long = "max-burst", default_value = "10")]
    pub max_burst: i64,

    /// Discipline(s) to run
    #[arg(short, long, value_enum, default_value_t = Algorithm::All)]
    pub algorithm: Algorithm,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the CPU timeline of each run
    #[arg(long)]
    pub timeline: bool,
}

/// Discipline selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Fcfs,
    Rr,
    Sjn,
    All,
}

/// Report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Config {
    /// Disciplines selected by `--algorithm`.
    pub fn disciplines(&self) -> Vec<Discipline> {
        match self.algorithm {
            Algorithm::Fcfs => vec![Discipline::Fcfs],
            Algorithm::Rr => vec![Discipline::RoundRobin {
                quantum: self.quantum,
            }],
            Algorithm::Sjn => vec![Discipline::Sjn],
            Algorithm::All => Discipline::all(self.quantum).to_vec(),
        }
    }

    /// Workload selected by `--input` / `--random`, or the classic set.
    pub fn workload(&self) -> Result<Vec<Process>> {
        if let Some(ref path) = self.input {
            return workload::load(path);
        }
        if let Some(count) = self.random {
            let shape = RandomWorkload::new(count)
                .with_max_arrival(self.max_arrival)
                .with_max_burst(self.max_burst);
            return workload::random(shape, self.seed);
        }
        Ok(workload::classic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["cpu-schedule"]).unwrap();
        assert_eq!(config.algorithm, Algorithm::All);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.timeline);
        assert_eq!(config.disciplines().len(), 3);
        assert_eq!(config.workload().unwrap(), workload::classic());
    }

    #[test]
    fn test_single_algorithm() {
        let config =
            Config::try_parse_from(["cpu-schedule", "-a", "rr", "-q", "2"]).unwrap();
        assert_eq!(
            config.disciplines(),
            vec![Discipline::RoundRobin { quantum: 2 }]
        );
    }

    #[test]
    fn test_negative_quantum_parses() {
        // Rejected later by the scheduler, not by the parser
        let config = Config::try_parse_from(["cpu-schedule", "--quantum", "-1"]).unwrap();
        assert_eq!(config.quantum, -1);
    }

    #[test]
    fn test_random_workload() {
        let config = Config::try_parse_from([
            "cpu-schedule",
            "--random",
            "6",
            "--seed",
            "3",
            "--max-burst",
            "4",
        ])
        .unwrap();
        let processes = config.workload().unwrap();
        assert_eq!(processes.len(), 6);
        assert!(processes.iter().all(|p| p.burst_time <= 4));
    }

    #[test]
    fn test_input_conflicts_with_random() {
        assert!(Config::try_parse_from([
            "cpu-schedule",
            "--input",
            "w.json",
            "--random",
            "3"
        ])
        .is_err());
    }
}
