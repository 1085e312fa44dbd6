//! Per-tick event weights.
//!
//! Weights are unnormalized and persist between ticks: each recompute only touches the
//! entries whose preconditions hold, everything else keeps its previous value.

use goosino_types::casino::{GOOSE_BALANCE_SCALE, NEW_ENTITY_SCALE};
use std::fmt;

/// Named actions the dispatcher can choose between.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Bet = 0,
    Spin = 1,
    Steal = 2,
    NewEntity = 3,
    GooseAction = 4,
}

impl EventKind {
    /// Sampling order. Index `i` of [`EventWeights::as_slice`] belongs to `ALL[i]`.
    pub const ALL: [EventKind; 5] = [
        EventKind::Bet,
        EventKind::Spin,
        EventKind::Steal,
        EventKind::NewEntity,
        EventKind::GooseAction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Bet => "bet",
            EventKind::Spin => "spin",
            EventKind::Steal => "steal",
            EventKind::NewEntity => "new_entity",
            EventKind::GooseAction => "goose_action",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Population figures the weight rules read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopulationSnapshot {
    pub players: usize,
    pub geese: usize,
    pub active_bets: usize,
    pub mean_balance: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventWeights {
    weights: [f64; 5],
}

impl Default for EventWeights {
    /// Only arrivals are possible in an empty casino.
    fn default() -> Self {
        let mut weights = [0.0; 5];
        weights[EventKind::NewEntity as usize] = 1.0;
        Self { weights }
    }
}

impl EventWeights {
    pub fn get(&self, event: EventKind) -> f64 {
        self.weights[event as usize]
    }

    pub fn set(&mut self, event: EventKind, weight: f64) {
        self.weights[event as usize] = weight;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Apply this tick's rules in order.
    ///
    /// 1. With players: spin grows with the share of players holding a bet, bet takes the
    ///    rest. Without players both are zero.
    /// 2. With players and geese: theft and goose actions scale with the square root of the
    ///    mean balance.
    /// 3. Arrivals always follow the free room under `max_entities`, squared. The value is
    ///    not clamped, so it grows again past the ceiling.
    pub fn recompute(&mut self, population: &PopulationSnapshot, max_entities: usize) {
        if population.players > 0 {
            let spin = (population.active_bets as f64 / population.players as f64).sqrt();
            self.set(EventKind::Spin, spin);
            self.set(EventKind::Bet, (1.0 - spin).max(0.0));
        } else {
            self.set(EventKind::Spin, 0.0);
            self.set(EventKind::Bet, 0.0);
        }

        if population.players > 0 && population.geese > 0 {
            let goose = (population.mean_balance.max(0.0) / GOOSE_BALANCE_SCALE).sqrt();
            self.set(EventKind::Steal, goose);
            self.set(EventKind::GooseAction, goose);
        }

        let room = max_entities as f64 - population.players as f64 - population.geese as f64;
        self.set(EventKind::NewEntity, (room / NEW_ENTITY_SCALE).powi(2) * 2.0);
    }
}

impl fmt::Display for EventWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, event) in EventKind::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={:.4}", event, self.weights[i])?;
        }
        Ok(())
    }
}
