use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::ops::Add;

use super::{Named, Roster};

/// A chip denomination on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    pub color: String,
    pub value: i64,
}

impl Chip {
    pub fn new(color: impl Into<String>, value: i64) -> Self {
        Self {
            color: color.into(),
            value,
        }
    }
}

/// Stacking two chips keeps the left colour and sums the values.
impl Add for Chip {
    type Output = Chip;

    fn add(self, other: Chip) -> Chip {
        Chip::new(self.color, self.value + other.value)
    }
}

impl Named for Chip {
    fn name(&self) -> &str {
        &self.color
    }
}

pub type ChipCollection = Roster<Chip>;

impl ChipCollection {
    /// White 1, red 5, green 25, black 100.
    pub fn standard() -> Self {
        Self::from_unique(vec![
            Chip::new("white", 1),
            Chip::new("red", 5),
            Chip::new("green", 25),
            Chip::new("black", 100),
        ])
    }

    /// Break `amount` into chips, largest denomination first.
    ///
    /// Whatever the smallest chip cannot cover is left out, so the sum of the stack may be
    /// below `amount` when there is no unit chip.
    pub fn stack(&self, amount: i64) -> Vec<(&Chip, i64)> {
        let mut denominations: Vec<&Chip> = self.iter().filter(|chip| chip.value > 0).collect();
        denominations.sort_by(|a, b| b.value.cmp(&a.value));

        let mut remaining = amount.max(0);
        let mut stack = Vec::new();
        for chip in denominations {
            let count = remaining / chip.value;
            if count > 0 {
                stack.push((chip, count));
                remaining -= count * chip.value;
            }
        }
        stack
    }

    /// Human-readable stack, e.g. `2xblack 1xgreen 3xwhite`.
    pub fn describe_stack(&self, amount: i64) -> String {
        let mut out = String::new();
        for (chip, count) in self.stack(amount) {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{}x{}", count, chip.color);
        }
        out
    }
}
