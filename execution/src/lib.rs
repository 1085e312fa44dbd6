//! Goosino execution layer.
//!
//! This crate contains the event weight model, the per-tick dispatcher ([`Casino`]) and the
//! handlers that mutate players, geese and bets.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time inside execution; pacing belongs to the driver.
//! - All randomness flows through the single [`CasinoRng`] owned by the casino. The order and
//!   number of draws per tick is part of the contract, so a seeded run replays exactly.
//!
//! ## Minimal loop (example)
//! ```rust
//! use goosino_execution::{Casino, CasinoConfig};
//!
//! let mut casino = Casino::new(CasinoConfig::default(), Some(42));
//! for _ in 0..10 {
//!     casino.perform_step().expect("weights never all zero with default config");
//! }
//! ```

pub mod casino;
mod error;
mod rng;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use casino::{
    Casino, CasinoConfig, EventKind, EventWeights, KillOutcome, SpinResult, StepOutcome,
};
pub use error::CasinoError;
pub use rng::CasinoRng;
