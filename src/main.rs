use anyhow::Context;
use clap::Parser;

use cpu_schedule::config::{Config, OutputFormat};
use cpu_schedule::{logging, Simulation};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init_tracing();

    let processes = config.workload().context("failed to build workload")?;
    let simulation = Simulation::new(processes).context("invalid workload")?;
    let report = simulation
        .run_all(&config.disciplines())
        .context("simulation failed")?;

    match config.format {
        OutputFormat::Text => {
            print!("{report}");
            if config.timeline {
                println!();
                for run in &report.runs {
                    println!("{}: {}", run.discipline, run.timeline);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
