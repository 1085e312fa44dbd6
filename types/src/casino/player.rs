use super::{Named, Roster, PSYCHO_LOSS_EXPONENT, PSYCHO_LOSS_FACTOR};

/// How a player reacts to money moving through their hands.
#[derive(Clone, Debug, PartialEq)]
pub enum Temperament {
    /// Balance changes leave no mark.
    Plain,
    /// Wins calm the player down, losses wind them up. Level is always within `[0, 1]`.
    Psycho { level: f64 },
}

/// A gambler at the tables.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub name: String,
    pub balance: i64,
    pub temperament: Temperament,
}

impl Player {
    pub fn new(name: impl Into<String>, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
            temperament: Temperament::Plain,
        }
    }

    /// A psycho-capable player starting completely calm.
    pub fn psycho(name: impl Into<String>, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
            temperament: Temperament::Psycho { level: 0.0 },
        }
    }

    pub fn with_psycho_level(mut self, level: f64) -> Self {
        self.temperament = Temperament::Psycho {
            level: level.clamp(0.0, 1.0),
        };
        self
    }

    pub fn update_balance(&mut self, amount: i64) {
        self.balance += amount;
    }

    /// Current psycho level, `None` for plain players.
    pub fn psycho_level(&self) -> Option<f64> {
        match self.temperament {
            Temperament::Plain => None,
            Temperament::Psycho { level } => Some(level),
        }
    }

    pub fn is_psycho(&self) -> bool {
        matches!(self.temperament, Temperament::Psycho { .. })
    }

    /// Hook invoked after every balance change the player is exposed to.
    ///
    /// `money` is the signed amount that just moved (positive for a gain).
    pub fn on_balance_change(&mut self, money: i64) {
        if self.is_psycho() {
            self.update_psycho(money);
        }
    }

    /// Move the psycho level after a gain or loss of `money`, already applied to the balance.
    ///
    /// A gain lowers the level by the share of the new balance it represents. A loss adds
    /// `0.02 * loss / remaining` and raises the sum to the power 0.8. No-op for plain players.
    pub fn update_psycho(&mut self, money: i64) {
        let post = self.balance;
        let Temperament::Psycho { level } = &mut self.temperament else {
            return;
        };
        let next = if money > 0 {
            if post > 0 {
                let share = (money as f64 / post as f64).min(1.0);
                *level - *level * share
            } else {
                *level
            }
        } else if money < 0 {
            let loss = -(money as f64);
            let remaining = post.max(1) as f64;
            (*level + PSYCHO_LOSS_FACTOR * loss / remaining).powf(PSYCHO_LOSS_EXPONENT)
        } else {
            *level
        };
        *level = if next.is_nan() { 0.0 } else { next.clamp(0.0, 1.0) };
    }
}

impl Named for Player {
    fn name(&self) -> &str {
        &self.name
    }
}

pub type PlayerCollection = Roster<Player>;

impl PlayerCollection {
    pub fn total_balance(&self) -> i64 {
        self.iter().map(|player| player.balance).sum()
    }

    /// Mean balance across all players, `0.0` when empty.
    pub fn mean_balance(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.total_balance() as f64 / self.len() as f64
    }
}
