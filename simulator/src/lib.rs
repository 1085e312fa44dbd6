//! Goosino simulation driver.
//!
//! Wraps a [Casino] with run configuration, pacing between ticks and an end-of-run summary.
//! Logging setup lives in [telemetry].

use anyhow::{Context, Result};
use goosino_execution::{Casino, EventKind, KillOutcome, StepOutcome};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

mod config;
pub mod telemetry;

pub use config::{
    SimulatorConfig, DEFAULT_LOG_FILE, DEFAULT_SPIN_DELAY_MS, DEFAULT_STEPS,
    DEFAULT_STEP_DELAY_MS,
};

/// Counters collected over a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    /// Completed events, indexed by [EventKind] discriminant.
    pub events: [u64; 5],
    pub skipped: u64,
    pub murders: u64,
    pub self_destructs: u64,
    pub players: usize,
    pub geese: usize,
    pub total_balance: i64,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &StepOutcome) {
        self.ticks += 1;
        match outcome {
            StepOutcome::Skipped { .. } => self.skipped += 1,
            StepOutcome::Kill(KillOutcome::Murder { .. }) => self.murders += 1,
            StepOutcome::Kill(KillOutcome::SelfDestruct { .. }) => self.self_destructs += 1,
            other => {
                if let Some(event) = other.event() {
                    self.events[event as usize] += 1;
                }
            }
        }
    }

    pub fn events_of(&self, event: EventKind) -> u64 {
        self.events[event as usize]
    }

    pub fn kills(&self) -> u64 {
        self.murders + self.self_destructs
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🏁 Simulation finished after {} ticks:", self.ticks)?;
        for event in EventKind::ALL {
            write!(f, " {}={}", event, self.events_of(event))?;
        }
        write!(
            f,
            " kills={} skipped={}. Survivors: {} players holding {}, {} geese",
            self.kills(),
            self.skipped,
            self.players,
            self.total_balance,
            self.geese
        )
    }
}

pub struct Simulator {
    casino: Casino,
    config: SimulatorConfig,
    summary: RunSummary,
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        let chips = config.chip_collection()?;
        let casino = Casino::new(config.casino_config(), config.seed).with_chips(chips);
        Ok(Self::with_casino(config, casino))
    }

    /// Drive an already populated casino. `config` only supplies steps and pacing.
    pub fn with_casino(config: SimulatorConfig, casino: Casino) -> Self {
        Self {
            casino,
            config,
            summary: RunSummary::default(),
        }
    }

    pub fn casino(&self) -> &Casino {
        &self.casino
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Run a single tick without pacing.
    pub fn step(&mut self) -> Result<StepOutcome> {
        let outcome = self
            .casino
            .perform_step()
            .with_context(|| format!("tick {} failed", self.summary.ticks + 1))?;
        self.summary.record(&outcome);
        Ok(outcome)
    }

    /// Pause owed after `outcome`.
    pub fn delay_for(&self, outcome: &StepOutcome) -> Duration {
        let mut millis = self.config.step_delay_ms;
        if matches!(outcome, StepOutcome::Spin { .. }) {
            millis += self.config.spin_delay_ms;
        }
        Duration::from_millis(millis)
    }

    /// Run the configured number of ticks and report what happened.
    pub fn run(mut self) -> Result<RunSummary> {
        debug!(
            steps = self.config.steps,
            seed = ?self.config.seed,
            max_entities = self.config.max_entities,
            "Starting simulation"
        );
        for _ in 0..self.config.steps {
            let outcome = self.step()?;
            let delay = self.delay_for(&outcome);
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }

        self.summary.players = self.casino.players.len();
        self.summary.geese = self.casino.geese.len();
        self.summary.total_balance = self.casino.players.total_balance();
        info!("{}", self.summary);
        Ok(self.summary)
    }
}
