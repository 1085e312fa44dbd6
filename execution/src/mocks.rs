use crate::{Casino, CasinoConfig};
use goosino_types::casino::{Goose, Player};

/// Creates a seeded casino with one plain player (`TestPlayer`, balance 100) and one honk
/// goose (`TestGoose`, volume 5).
pub fn create_casino(seed: u64) -> Casino {
    let mut casino = Casino::new(CasinoConfig::default(), Some(seed));
    casino
        .add_player(Player::new("TestPlayer", 100))
        .expect("fresh casino accepts player");
    casino
        .add_goose(Goose::honk("TestGoose", 5))
        .expect("fresh casino accepts goose");
    casino
}

/// Creates a seeded, empty casino with a custom population ceiling.
pub fn create_empty_casino(seed: u64, max_entities: usize) -> Casino {
    let config = CasinoConfig {
        max_entities,
        ..CasinoConfig::default()
    };
    Casino::new(config, Some(seed))
}
