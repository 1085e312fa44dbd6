use goosino_types::casino::{BetKind, BET_KIND_WEIGHTS, PAYOUT_MULTIPLIER};
use tracing::{debug, info};

use super::{logging, roulette, Casino, EventKind, SpinResult, StepOutcome};
use crate::CasinoError;

impl Casino {
    /// A random player without a bet puts a random stake on a random colour.
    ///
    /// Draws: player, colour, then amount (skipped when the player has less than 1).
    /// The stake leaves the balance immediately.
    pub fn make_random_bet(&mut self) -> Result<StepOutcome, CasinoError> {
        let eligible: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| !self.bets.contains(&player.name))
            .map(|(index, _)| index)
            .collect();
        let choice = self
            .rng
            .pick(eligible.len())
            .ok_or(CasinoError::EmptyPopulation {
                event: EventKind::Bet,
            })?;
        let index = eligible[choice];
        let kind = BetKind::ALL[self.rng.weighted(&BET_KIND_WEIGHTS)?];

        let balance = self.players[index].balance;
        let amount = if balance < 1 {
            balance.max(0)
        } else {
            self.rng.range_inclusive(balance / 4 + 1, balance)
        };

        let Some(player) = self.players.get_mut(index) else {
            return Err(CasinoError::EmptyPopulation {
                event: EventKind::Bet,
            });
        };
        if self.bets.place_bet(&player.name, kind, amount) {
            player.update_balance(-amount);
        }

        info!(
            target: logging::BET,
            "🎰 Player {} bet {} on {}. Balance after bet: {}",
            player.name,
            amount,
            kind,
            player.balance
        );
        debug!(chips = %self.chips.describe_stack(amount), player = %player.name, "Stake");

        Ok(StepOutcome::Bet {
            player: player.name.clone(),
            kind,
            amount,
            balance: player.balance,
        })
    }

    /// Spin once and settle every open bet.
    pub fn spin_wheel(&mut self) -> StepOutcome {
        info!(target: logging::WHEEL, "🎡 The wheel is spinning...");
        let number = self.rng.spin_roulette();
        self.settle_spin(number)
    }

    /// Settle every open bet against a ball that landed on `number`.
    ///
    /// Winners get twice their stake back; losers already paid at placement. Every bettor's
    /// psycho hook sees the result, and the ledger is emptied whatever happens.
    pub fn settle_spin(&mut self, number: u8) -> StepOutcome {
        let color = roulette::color_of(number);
        info!(target: logging::WHEEL, "🎲 Ball landed on {} ({})", number, color);

        let mut results = Vec::with_capacity(self.bets.len());
        for (name, bet) in self.bets.drain() {
            let Some(player) = self.players.by_name_mut(&name) else {
                continue;
            };
            let won = bet.kind == color;
            if won {
                let payout = bet.amount * PAYOUT_MULTIPLIER;
                player.update_balance(payout);
                player.on_balance_change(payout);
                info!(
                    target: logging::WIN,
                    "💰 Player {} bet {} on {} and WON. New balance: {}",
                    player.name,
                    bet.amount,
                    bet.kind,
                    player.balance
                );
            } else {
                player.on_balance_change(-bet.amount);
                info!(
                    target: logging::LOSS,
                    "💸 Player {} bet {} on {} and LOST. New balance: {}",
                    player.name,
                    bet.amount,
                    bet.kind,
                    player.balance
                );
            }
            results.push(SpinResult {
                player: name,
                kind: bet.kind,
                amount: bet.amount,
                won,
                balance: player.balance,
            });
        }
        debug!("All bets have been cleared.");

        StepOutcome::Spin {
            number,
            color,
            results,
        }
    }
}
