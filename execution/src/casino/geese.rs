use goosino_types::casino::GooseAction;
use tracing::info;

use super::{logging, Casino, EventKind, StepOutcome};
use crate::CasinoError;

impl Casino {
    /// A random goose pinches from a random player who still has money.
    ///
    /// Draws: goose, victim, then amount in `[1, balance / 2]` (no draw when that half is
    /// at most 1, the goose takes exactly 1).
    pub fn goose_steal(&mut self) -> Result<StepOutcome, CasinoError> {
        let empty = CasinoError::EmptyPopulation {
            event: EventKind::Steal,
        };
        let eligible: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.balance > 0)
            .map(|(index, _)| index)
            .collect();
        if self.geese.is_empty() || eligible.is_empty() {
            return Err(empty);
        }

        let goose = self.rng.pick(self.geese.len()).ok_or(empty.clone())?;
        let goose = self.geese[goose].name.clone();
        let victim = self.rng.pick(eligible.len()).ok_or(empty.clone())?;
        let Some(player) = self.players.get_mut(eligible[victim]) else {
            return Err(empty);
        };

        let half = player.balance / 2;
        let amount = if half <= 1 {
            1
        } else {
            self.rng.range_inclusive(1, half)
        };
        player.update_balance(-amount);
        player.on_balance_change(-amount);

        info!(
            target: logging::GOOSE,
            "🦢 Goose {} stole {} dirty bills from {}! New balance: {}",
            goose,
            amount,
            player.name,
            player.balance
        );

        Ok(StepOutcome::Steal {
            goose,
            player: player.name.clone(),
            amount,
            balance: player.balance,
        })
    }

    /// A random goose does its thing.
    ///
    /// A honk goose charges `2 * honk_volume` to every player holding more than that. A rich
    /// goose draws one gift and hands it to every player.
    pub fn goose_action(&mut self) -> Result<StepOutcome, CasinoError> {
        let index = self
            .rng
            .pick(self.geese.len())
            .ok_or(CasinoError::EmptyPopulation {
                event: EventKind::GooseAction,
            })?;
        let goose = self.geese[index].clone();
        let action = goose.act(&mut self.rng);

        let mut affected = Vec::new();
        match &action {
            GooseAction::Fright { toll, honk } => {
                info!(target: logging::GOOSE, "🦢 Goose {} honks furiously!", goose.name);
                info!(target: logging::GOOSE, "{}", honk);
                for player in self.players.iter_mut() {
                    if player.balance > *toll {
                        player.update_balance(-toll);
                        player.on_balance_change(-toll);
                        affected.push(player.name.clone());
                    }
                }
                info!(
                    target: logging::GOOSE,
                    "🦢 {} frightened player(s) dropped {} each",
                    affected.len(),
                    toll
                );
            }
            GooseAction::Gift { amount } => {
                for player in self.players.iter_mut() {
                    player.update_balance(*amount);
                    player.on_balance_change(*amount);
                    affected.push(player.name.clone());
                }
                info!(
                    target: logging::GOOSE,
                    "🦢 Goose {} hands out money! Every player gets {}",
                    goose.name,
                    amount
                );
            }
        }

        Ok(StepOutcome::GooseAction {
            goose: goose.name,
            action,
            affected,
        })
    }
}
