use goosino_types::casino::RosterError;
use rand::distributions::WeightedError;
use thiserror::Error as ThisError;

use crate::casino::EventKind;

/// Errors raised while running a tick.
#[derive(Clone, Debug, ThisError, PartialEq)]
pub enum CasinoError {
    /// A handler ran with nobody eligible to act on.
    #[error("no eligible entity for {event}")]
    EmptyPopulation { event: EventKind },
    /// Every candidate name for this kind of entity has been used.
    #[error("{kind} name pool exhausted")]
    NamePoolExhausted { kind: &'static str },
    #[error("player not found: {0}")]
    PlayerNotFound(String),
    #[error(transparent)]
    Roster(#[from] RosterError),
    /// Sampling was asked to choose among weights that are all zero.
    #[error("event weights are all zero")]
    AllWeightsZero,
    #[error("invalid weights: {0}")]
    InvalidWeights(WeightedError),
}

impl CasinoError {
    /// Whether the dispatcher may log the error and carry on with the next tick.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            CasinoError::AllWeightsZero | CasinoError::InvalidWeights(_)
        )
    }
}

impl From<WeightedError> for CasinoError {
    fn from(err: WeightedError) -> Self {
        match err {
            WeightedError::AllWeightsZero => CasinoError::AllWeightsZero,
            other => CasinoError::InvalidWeights(other),
        }
    }
}
