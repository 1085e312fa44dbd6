//! European roulette wheel.
//!
//! Pocket 0 is the zero; the remaining 36 pockets alternate red and black following the
//! standard single-zero layout.

use goosino_types::casino::{BetKind, RED_NUMBERS};

/// Check if a number is red.
pub fn is_red(number: u8) -> bool {
    RED_NUMBERS.contains(&number)
}

/// Colour a ball landing on `number` pays out on.
pub fn color_of(number: u8) -> BetKind {
    if number == 0 {
        BetKind::Zero
    } else if is_red(number) {
        BetKind::Red
    } else {
        BetKind::Black
    }
}
