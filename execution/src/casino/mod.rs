//! Casino state and the per-tick dispatcher.
//!
//! Each [`Casino::perform_step`] does exactly one of:
//! - kill resolution, when a psycho player's level beats a fresh uniform draw;
//! - one weighted event: bet, spin, steal, new entity or goose action.
//!
//! Handlers live in the submodules and are also callable directly, which is how tests pin
//! down individual effects.

mod betting;
mod geese;
#[cfg(test)]
mod integration_tests;
pub mod logging;
mod population;
pub mod roulette;
mod weights;

pub use weights::{EventKind, EventWeights, PopulationSnapshot};

use goosino_types::casino::{
    BetKind, BetLedger, ChipCollection, Goose, GooseAction, GooseCollection, GooseKind, Player,
    PlayerCollection, GOOSE_NAMES, MAX_ENTITIES, PLAYER_NAMES,
};
use tracing::{debug, warn};

use crate::{CasinoError, CasinoRng};

/// Tunables for a casino instance.
#[derive(Clone, Debug, PartialEq)]
pub struct CasinoConfig {
    /// Population ceiling used by the arrival weight and the player/goose split.
    pub max_entities: usize,
    /// Names handed out to arriving players, each at most once.
    pub player_names: Vec<String>,
    /// Names handed out to arriving geese, each at most once.
    pub goose_names: Vec<String>,
}

impl Default for CasinoConfig {
    fn default() -> Self {
        Self {
            max_entities: MAX_ENTITIES,
            player_names: PLAYER_NAMES.iter().map(|name| name.to_string()).collect(),
            goose_names: GOOSE_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

/// How one bettor fared on a spin.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinResult {
    pub player: String,
    pub kind: BetKind,
    pub amount: i64,
    pub won: bool,
    pub balance: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum KillOutcome {
    /// The killer removed themselves.
    SelfDestruct { killer: String },
    /// The killer took the victim's balance and the victim left.
    Murder {
        killer: String,
        victim: String,
        loot: i64,
    },
}

/// What happened during a tick.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    Bet {
        player: String,
        kind: BetKind,
        amount: i64,
        balance: i64,
    },
    Spin {
        number: u8,
        color: BetKind,
        results: Vec<SpinResult>,
    },
    Steal {
        goose: String,
        player: String,
        amount: i64,
        balance: i64,
    },
    GooseAction {
        goose: String,
        action: GooseAction,
        affected: Vec<String>,
    },
    NewPlayer {
        name: String,
        balance: i64,
        psycho: bool,
    },
    NewGoose {
        name: String,
        kind: GooseKind,
        honk_volume: u8,
    },
    Kill(KillOutcome),
    /// The chosen handler had nothing to act on.
    Skipped { event: EventKind, reason: String },
}

impl StepOutcome {
    /// The event this outcome belongs to, `None` for kills.
    pub fn event(&self) -> Option<EventKind> {
        match self {
            StepOutcome::Bet { .. } => Some(EventKind::Bet),
            StepOutcome::Spin { .. } => Some(EventKind::Spin),
            StepOutcome::Steal { .. } => Some(EventKind::Steal),
            StepOutcome::GooseAction { .. } => Some(EventKind::GooseAction),
            StepOutcome::NewPlayer { .. } | StepOutcome::NewGoose { .. } => {
                Some(EventKind::NewEntity)
            }
            StepOutcome::Kill(_) => None,
            StepOutcome::Skipped { event, .. } => Some(*event),
        }
    }
}

/// The casino floor: everyone in it, the open bets, and the random stream driving it.
pub struct Casino {
    pub players: PlayerCollection,
    pub geese: GooseCollection,
    pub bets: BetLedger,
    pub chips: ChipCollection,
    config: CasinoConfig,
    player_pool: Vec<String>,
    goose_pool: Vec<String>,
    weights: EventWeights,
    rng: CasinoRng,
}

impl Casino {
    pub fn new(config: CasinoConfig, seed: Option<u64>) -> Self {
        Self::with_rng(config, CasinoRng::new(seed))
    }

    pub fn with_rng(config: CasinoConfig, rng: CasinoRng) -> Self {
        let player_pool = config.player_names.clone();
        let goose_pool = config.goose_names.clone();
        Self {
            players: PlayerCollection::new(),
            geese: GooseCollection::new(),
            bets: BetLedger::new(),
            chips: ChipCollection::standard(),
            config,
            player_pool,
            goose_pool,
            weights: EventWeights::default(),
            rng,
        }
    }

    pub fn with_chips(mut self, chips: ChipCollection) -> Self {
        self.chips = chips;
        self
    }

    pub fn config(&self) -> &CasinoConfig {
        &self.config
    }

    pub fn weights(&self) -> &EventWeights {
        &self.weights
    }

    pub fn weights_mut(&mut self) -> &mut EventWeights {
        &mut self.weights
    }

    /// Names still available to arriving players.
    pub fn player_pool(&self) -> &[String] {
        &self.player_pool
    }

    /// Names still available to arriving geese.
    pub fn goose_pool(&self) -> &[String] {
        &self.goose_pool
    }

    /// Seat a player. The name is withdrawn from the arrival pool so it is never reused.
    pub fn add_player(&mut self, player: Player) -> Result<(), CasinoError> {
        self.player_pool.retain(|name| name != &player.name);
        self.players.push(player)?;
        Ok(())
    }

    /// Let a goose in. The name is withdrawn from the arrival pool so it is never reused.
    pub fn add_goose(&mut self, goose: Goose) -> Result<(), CasinoError> {
        self.goose_pool.retain(|name| name != &goose.name);
        self.geese.push(goose)?;
        Ok(())
    }

    pub fn snapshot(&self) -> PopulationSnapshot {
        PopulationSnapshot {
            players: self.players.len(),
            geese: self.geese.len(),
            active_bets: self.bets.len(),
            mean_balance: self.players.mean_balance(),
        }
    }

    /// Run one tick.
    ///
    /// Recoverable handler errors become [`StepOutcome::Skipped`]; an all-zero weight vector
    /// is returned as [`CasinoError::AllWeightsZero`].
    pub fn perform_step(&mut self) -> Result<StepOutcome, CasinoError> {
        if let Some(killer) = self.find_killer() {
            return self.kill_player(&killer).map(StepOutcome::Kill);
        }

        let snapshot = self.snapshot();
        self.weights.recompute(&snapshot, self.config.max_entities);
        debug!(weights = %self.weights, "New events weights");

        let event = self.sample_event()?;
        debug!(%event, "Selected event");
        match self.dispatch(event) {
            Ok(outcome) => Ok(outcome),
            Err(err) if err.is_recoverable() => {
                warn!(%event, %err, "Skipping event");
                Ok(StepOutcome::Skipped {
                    event,
                    reason: err.to_string(),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Run the handler for `event`.
    pub fn dispatch(&mut self, event: EventKind) -> Result<StepOutcome, CasinoError> {
        match event {
            EventKind::Bet => self.make_random_bet(),
            EventKind::Spin => Ok(self.spin_wheel()),
            EventKind::Steal => self.goose_steal(),
            EventKind::NewEntity => self.add_random_entity(),
            EventKind::GooseAction => self.goose_action(),
        }
    }

    fn sample_event(&mut self) -> Result<EventKind, CasinoError> {
        let index = self.rng.weighted(self.weights.as_slice())?;
        Ok(EventKind::ALL[index])
    }

    /// Scan psycho players in seating order; the first whose level beats a fresh draw is
    /// the killer. Plain players consume no randomness.
    pub fn find_killer(&mut self) -> Option<String> {
        for player in self.players.iter() {
            let Some(level) = player.psycho_level() else {
                continue;
            };
            if level > self.rng.unit() {
                return Some(player.name.clone());
            }
        }
        None
    }
}
