//! Casino domain types.
//!
//! Defines player/goose/chip/bet state and constants used by the execution layer and the
//! simulator.

mod bet;
mod chip;
mod constants;
mod goose;
mod player;
mod roster;

pub use bet::*;
pub use chip::*;
pub use constants::*;
pub use goose::*;
pub use player::*;
pub use roster::*;
