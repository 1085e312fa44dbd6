use rand::Rng;

use super::{Named, Roster, HONK_TOLL_MULTIPLIER, MAX_GOOSE_GIFT, MIN_GOOSE_GIFT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GooseKind {
    /// Scares players out of their chips.
    Honk,
    /// Showers every player with money.
    Rich,
}

impl GooseKind {
    pub const ALL: [GooseKind; 2] = [GooseKind::Honk, GooseKind::Rich];

    pub fn label(&self) -> &'static str {
        match self {
            GooseKind::Honk => "honk",
            GooseKind::Rich => "rich",
        }
    }
}

/// What a goose does when it is its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GooseAction {
    /// Every player holding more than `toll` pays it.
    Fright { toll: i64, honk: String },
    /// Every player receives `amount`.
    Gift { amount: i64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Goose {
    pub name: String,
    pub honk_volume: u8,
    pub kind: GooseKind,
}

impl Goose {
    pub fn new(name: impl Into<String>, kind: GooseKind, honk_volume: u8) -> Self {
        Self {
            name: name.into(),
            honk_volume,
            kind,
        }
    }

    pub fn honk(name: impl Into<String>, honk_volume: u8) -> Self {
        Self::new(name, GooseKind::Honk, honk_volume)
    }

    pub fn rich(name: impl Into<String>, honk_volume: u8) -> Self {
        Self::new(name, GooseKind::Rich, honk_volume)
    }

    /// Amount a honk costs each frightened player.
    pub fn toll(&self) -> i64 {
        HONK_TOLL_MULTIPLIER * i64::from(self.honk_volume)
    }

    /// Draw a gift in `[MIN_GOOSE_GIFT, MAX_GOOSE_GIFT]`.
    pub fn spend<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.gen_range(MIN_GOOSE_GIFT..=MAX_GOOSE_GIFT)
    }

    pub fn honk_text(&self) -> String {
        "Honk! ".repeat(usize::from(self.honk_volume)).trim_end().to_string()
    }

    /// Decide this goose's action. Only rich geese consume randomness.
    pub fn act<R: Rng + ?Sized>(&self, rng: &mut R) -> GooseAction {
        match self.kind {
            GooseKind::Honk => GooseAction::Fright {
                toll: self.toll(),
                honk: self.honk_text(),
            },
            GooseKind::Rich => GooseAction::Gift {
                amount: self.spend(rng),
            },
        }
    }
}

impl Named for Goose {
    fn name(&self) -> &str {
        &self.name
    }
}

pub type GooseCollection = Roster<Goose>;

impl GooseCollection {
    pub fn count_kind(&self, kind: GooseKind) -> usize {
        self.iter().filter(|goose| goose.kind == kind).count()
    }
}
