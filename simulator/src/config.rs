use anyhow::{Context, Result};
use goosino_execution::CasinoConfig;
use goosino_types::casino::{
    Chip, ChipCollection, GOOSE_NAMES, MAX_ENTITIES, PLAYER_NAMES,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_STEPS: u64 = 20;
pub const DEFAULT_STEP_DELAY_MS: u64 = 1_500;
pub const DEFAULT_SPIN_DELAY_MS: u64 = 1_000;
pub const DEFAULT_LOG_FILE: &str = "sim.log";

/// Configuration for a [crate::Simulator] run.
///
/// Every field is optional in the YAML file; missing ones fall back to [Default].
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub steps: u64,
    pub seed: Option<u64>,
    /// Pause after every tick.
    pub step_delay_ms: u64,
    /// Extra pause after a tick that spun the wheel.
    pub spin_delay_ms: u64,
    pub log_file: PathBuf,
    pub max_entities: usize,
    pub player_names: Vec<String>,
    pub goose_names: Vec<String>,
    pub chips: Vec<Chip>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            seed: None,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            spin_delay_ms: DEFAULT_SPIN_DELAY_MS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            max_entities: MAX_ENTITIES,
            player_names: PLAYER_NAMES.iter().map(|name| name.to_string()).collect(),
            goose_names: GOOSE_NAMES.iter().map(|name| name.to_string()).collect(),
            chips: ChipCollection::standard().iter().cloned().collect(),
        }
    }
}

impl SimulatorConfig {
    /// Read a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let config: Self =
            serde_yaml::from_str(&contents).context("Could not parse config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_entities == 0 {
            anyhow::bail!("max_entities must be > 0");
        }
        if let Some(chip) = self.chips.iter().find(|chip| chip.value <= 0) {
            anyhow::bail!("chip {} must have a positive value", chip.color);
        }
        Ok(())
    }

    pub fn casino_config(&self) -> CasinoConfig {
        CasinoConfig {
            max_entities: self.max_entities,
            player_names: self.player_names.clone(),
            goose_names: self.goose_names.clone(),
        }
    }

    /// The chip set, rejecting duplicate colours.
    pub fn chip_collection(&self) -> Result<ChipCollection> {
        let mut chips = ChipCollection::new();
        for chip in &self.chips {
            chips
                .push(chip.clone())
                .with_context(|| format!("invalid chip set: {}", chip.color))?;
        }
        Ok(chips)
    }
}
