use anyhow::Result;
use clap::{Parser, Subcommand};
use goosino_simulator::{telemetry, Simulator, SimulatorConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Goose casino simulation", long_about = None)]
struct Args {
    /// Where debug and warning records go (default: sim.log).
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the casino for a number of ticks.
    RunSimulation {
        /// Number of ticks (default: 20).
        #[arg(long)]
        steps: Option<u64>,

        /// Seed for a reproducible run.
        #[arg(long)]
        seed: Option<u64>,

        /// YAML file with run settings. Flags take precedence.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pause between ticks in milliseconds; 0 runs flat out.
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Extra pause while the wheel spins in milliseconds.
        #[arg(long)]
        spin_delay_ms: Option<u64>,
    },
    /// Does nothing.
    Main,
}

fn build_config(args: &Args) -> Result<SimulatorConfig> {
    let Command::RunSimulation {
        steps,
        seed,
        config,
        delay_ms,
        spin_delay_ms,
    } = &args.command
    else {
        anyhow::bail!("no simulation requested");
    };

    let mut resolved = match config {
        Some(path) => SimulatorConfig::load(path)?,
        None => SimulatorConfig::default(),
    };
    if let Some(steps) = steps {
        resolved.steps = *steps;
    }
    if seed.is_some() {
        resolved.seed = *seed;
    }
    if let Some(delay) = delay_ms {
        resolved.step_delay_ms = *delay;
    }
    if let Some(delay) = spin_delay_ms {
        resolved.spin_delay_ms = *delay;
    }
    if let Some(log_file) = &args.log_file {
        resolved.log_file = log_file.clone();
    }
    Ok(resolved)
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Command::Main = args.command {
        return Ok(());
    }

    let config = build_config(&args)?;
    telemetry::init(&config.log_file)?;
    Simulator::new(config)?.run()?;
    Ok(())
}
