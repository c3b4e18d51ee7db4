//! Run reports and their text rendering.
//!
//! Averages are always rendered with two decimals.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Process, Timeline};
use crate::scheduler::{Discipline, Metrics};

/// Outcome of one discipline over one workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Discipline that produced this run.
    pub discipline: Discipline,
    /// Records with waiting/turnaround filled in, in input order.
    pub processes: Vec<Process>,
    /// CPU slices of the run.
    pub timeline: Timeline,
    /// Summary statistics.
    pub metrics: Metrics,
}

/// Outcomes of several disciplines over the same workload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub runs: Vec<RunReport>,
}

impl SimulationReport {
    /// The run with the lowest average waiting time. Earlier runs win ties.
    pub fn best_by_waiting(&self) -> Option<&RunReport> {
        self.runs.iter().reduce(|best, run| {
            if run.metrics.average_waiting < best.metrics.average_waiting {
                run
            } else {
                best
            }
        })
    }

    /// Finds the run for a discipline.
    pub fn run_for(&self, discipline: Discipline) -> Option<&RunReport> {
        self.runs.iter().find(|r| r.discipline == discipline)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Scheduling:", self.discipline)?;
        writeln!(
            f,
            "{:>5} {:>8} {:>6} {:>8} {:>11}",
            "PID", "Arrival", "Burst", "Waiting", "Turnaround"
        )?;
        for p in &self.processes {
            writeln!(
                f,
                "{:>5} {:>8} {:>6} {:>8} {:>11}",
                p.id, p.arrival_time, p.original_burst, p.waiting_time, p.turnaround_time
            )?;
        }
        writeln!(f, "Average Waiting Time: {:.2}", self.metrics.average_waiting)?;
        writeln!(
            f,
            "Average Turnaround Time: {:.2}",
            self.metrics.average_turnaround
        )
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, run) in self.runs.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{run}")?;
        }
        if self.runs.len() > 1 {
            if let Some(best) = self.best_by_waiting() {
                writeln!(f)?;
                writeln!(
                    f,
                    "Lowest average waiting time: {} ({:.2})",
                    best.discipline, best.metrics.average_waiting
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Timeline {
    /// Renders slices as `| 0-4 P1 | 4-8 P2 |`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(idle)");
        }
        f.write_str("|")?;
        for s in self.slices() {
            write!(f, " {}-{} P{} |", s.start, s.end, s.process_id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slice;
    use crate::simulation::Simulation;
    use crate::workload;

    fn classic_report() -> SimulationReport {
        Simulation::new(workload::classic())
            .unwrap()
            .run_all(&Discipline::all(4))
            .unwrap()
    }

    #[test]
    fn test_run_report_text() {
        let report = classic_report();
        let fcfs = report.run_for(Discipline::Fcfs).unwrap().to_string();

        assert!(fcfs.starts_with("First-Come-First-Served Scheduling:\n"));
        assert!(fcfs.contains("Average Waiting Time: 8.75\n"));
        assert!(fcfs.contains("Average Turnaround Time: 14.75\n"));
    }

    #[test]
    fn test_rr_report_shows_original_burst() {
        let report = classic_report();
        let rr = report
            .run_for(Discipline::RoundRobin { quantum: 4 })
            .unwrap();
        let text = rr.to_string();

        assert!(text.starts_with("Round Robin (quantum=4) Scheduling:\n"));
        assert!(text.contains("    1        0      6       11          17\n"));
        assert!(text.contains("Average Waiting Time: 11.75\n"));
    }

    #[test]
    fn test_simulation_report_text() {
        let text = classic_report().to_string();
        assert!(text.ends_with("Lowest average waiting time: Shortest Job Next (6.25)\n"));
    }

    #[test]
    fn test_best_by_waiting() {
        let report = classic_report();
        assert_eq!(report.best_by_waiting().unwrap().discipline, Discipline::Sjn);
        assert!(SimulationReport::default().best_by_waiting().is_none());
    }

    #[test]
    fn test_timeline_text() {
        let mut t = Timeline::new();
        assert_eq!(t.to_string(), "(idle)");
        t.push(Slice::new(1, 0, 4));
        t.push(Slice::new(2, 4, 8));
        assert_eq!(t.to_string(), "| 0-4 P1 | 4-8 P2 |");
    }

    #[test]
    fn test_report_json() {
        let report = classic_report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["runs"].as_array().unwrap().len(), 3);
        assert_eq!(json["runs"][0]["metrics"]["average_waiting"], 8.75);
        assert_eq!(json["runs"][1]["discipline"]["discipline"], "round_robin");
    }
}
