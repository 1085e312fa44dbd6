use std::fmt;

/// Roulette bet colours offered at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BetKind {
    Red,
    Black,
    Zero,
}

impl BetKind {
    /// In the same order as [`super::BET_KIND_WEIGHTS`].
    pub const ALL: [BetKind; 3] = [BetKind::Red, BetKind::Black, BetKind::Zero];

    pub fn as_str(&self) -> &'static str {
        match self {
            BetKind::Red => "red",
            BetKind::Black => "black",
            BetKind::Zero => "zero",
        }
    }
}

impl fmt::Display for BetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bet {
    pub kind: BetKind,
    pub amount: i64,
}

/// Active bets keyed by player name, iterated in placement order.
///
/// A player holds at most one bet; a second placement for the same name is ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BetLedger {
    bets: Vec<(String, Bet)>,
}

impl BetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a bet for `player`. Returns `false` (and changes nothing) if one already exists.
    pub fn place_bet(&mut self, player: &str, kind: BetKind, amount: i64) -> bool {
        if self.contains(player) {
            return false;
        }
        self.bets.push((player.to_string(), Bet { kind, amount }));
        true
    }

    pub fn get(&self, player: &str) -> Option<&Bet> {
        self.bets
            .iter()
            .find(|(name, _)| name == player)
            .map(|(_, bet)| bet)
    }

    pub fn contains(&self, player: &str) -> bool {
        self.get(player).is_some()
    }

    pub fn remove(&mut self, player: &str) -> Option<Bet> {
        let index = self.bets.iter().position(|(name, _)| name == player)?;
        Some(self.bets.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.bets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bet)> {
        self.bets.iter().map(|(name, bet)| (name.as_str(), bet))
    }

    /// Remove every bet, handing them back in placement order.
    pub fn drain(&mut self) -> Vec<(String, Bet)> {
        std::mem::take(&mut self.bets)
    }

    pub fn clear(&mut self) {
        self.bets.clear();
    }
}
