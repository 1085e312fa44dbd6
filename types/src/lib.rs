//! Common types used throughout goosino.
//!
//! Entities (players, geese, chips), the ordered [`casino::Roster`] that holds them, and
//! the [`casino::BetLedger`] tracking active wagers. Nothing in here draws randomness on its
//! own; behaviours that need it take the caller's generator.

pub mod casino;
