//! Log targets, one per event category.
//!
//! The simulator's console formatter colours records by these targets, so every handler
//! reports its outcome under exactly one of them.

pub const BET: &str = "casino::bet";
pub const WHEEL: &str = "casino::wheel";
pub const WIN: &str = "casino::win";
pub const LOSS: &str = "casino::loss";
pub const GOOSE: &str = "casino::goose";
pub const ENTITY: &str = "casino::entity";
pub const KILL: &str = "casino::kill";
