/// Population ceiling used by the arrival weight (players + geese).
pub const MAX_ENTITIES: usize = 20;

/// Divisor applied to the free population slots before squaring the arrival weight.
pub const NEW_ENTITY_SCALE: f64 = 10.0;

/// Mean balance at which theft and goose actions reach weight 1.0.
pub const GOOSE_BALANCE_SCALE: f64 = 300.0;

/// Probability that a killer turns on themselves instead of another player.
pub const SELF_DESTRUCT_PROBABILITY: f64 = 0.4;

/// Probability that a newly arrived player is psycho-capable.
pub const PSYCHO_PROBABILITY: f64 = 0.45;

/// Roulette pays this multiple of the stake on a matching bet.
pub const PAYOUT_MULTIPLIER: i64 = 2;

/// Largest number on a European wheel (0 included, so 37 pockets).
pub const WHEEL_MAX_NUMBER: u8 = 36;

/// Red numbers on a European roulette wheel.
pub const RED_NUMBERS: [u8; 18] = [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

/// Weight of each bet colour when a player picks one at random (red, black, zero).
pub const BET_KIND_WEIGHTS: [f64; 3] = [0.47, 0.48, 0.05];

/// Starting balances for new players and their weights.
pub const STARTING_BALANCES: [(i64, f64); 6] = [
    (50, 0.3),
    (100, 0.25),
    (150, 0.15),
    (200, 0.15),
    (300, 0.1),
    (500, 0.05),
];

/// Honk volume range for new geese (inclusive).
pub const MIN_HONK_VOLUME: u8 = 1;
pub const MAX_HONK_VOLUME: u8 = 10;

/// A honk costs every frightened player this multiple of the goose's volume.
pub const HONK_TOLL_MULTIPLIER: i64 = 2;

/// Range a rich goose hands out to every player (inclusive).
pub const MIN_GOOSE_GIFT: i64 = 1;
pub const MAX_GOOSE_GIFT: i64 = 100;

/// Psycho increase per unit of loss relative to the remaining balance.
pub const PSYCHO_LOSS_FACTOR: f64 = 0.02;

/// Exponent applied after a loss (values below 1 pull the level toward 1).
pub const PSYCHO_LOSS_EXPONENT: f64 = 0.8;

/// Default names for arriving players.
pub const PLAYER_NAMES: [&str; 10] = [
    "Alex", "Boris", "Viktor", "Grigory", "Dmitry", "Yegor", "Zakhar", "Ilya", "Konstantin",
    "Leonid",
];

/// Default names for arriving geese.
pub const GOOSE_NAMES: [&str; 10] = [
    "Goose-Sigma",
    "Goose-Swag",
    "Goose-Prankster",
    "Goose-Pickpocket",
    "Goose-Joker",
    "Goose-Baron",
    "Goose-Foghorn",
    "Goose-Tycoon",
    "Goose-Rascal",
    "Goose-Duke",
];
