use goosino_types::casino::{
    Goose, GooseKind, Player, MAX_HONK_VOLUME, MIN_HONK_VOLUME, PSYCHO_PROBABILITY,
    SELF_DESTRUCT_PROBABILITY, STARTING_BALANCES,
};
use tracing::info;

use super::{logging, Casino, KillOutcome, StepOutcome};
use crate::CasinoError;

impl Casino {
    /// Let a new player or goose in.
    ///
    /// A player arrives when one uniform draw falls under `(geese + 1) / (players + geese + 2)`
    /// and players hold fewer than half the seats, or whenever geese already hold half of
    /// them. Otherwise a goose arrives.
    pub fn add_random_entity(&mut self) -> Result<StepOutcome, CasinoError> {
        let players = self.players.len();
        let geese = self.geese.len();
        let half = self.config.max_entities / 2;

        let player_chance = (geese + 1) as f64 / (players + geese + 2) as f64;
        let draw = self.rng.unit();
        if (draw < player_chance && players < half) || geese >= half {
            self.add_random_player()
        } else {
            self.add_random_goose()
        }
    }

    /// Draws: starting balance, name, then whether the newcomer is psycho-capable.
    fn add_random_player(&mut self) -> Result<StepOutcome, CasinoError> {
        if self.player_pool.is_empty() {
            return Err(CasinoError::NamePoolExhausted { kind: "player" });
        }
        let weights: Vec<f64> = STARTING_BALANCES.iter().map(|(_, weight)| *weight).collect();
        let balance = STARTING_BALANCES[self.rng.weighted(&weights)?].0;
        let index = self
            .rng
            .pick(self.player_pool.len())
            .ok_or(CasinoError::NamePoolExhausted { kind: "player" })?;
        let name = self.player_pool.remove(index);
        let psycho = self.rng.chance(PSYCHO_PROBABILITY);

        let player = if psycho {
            Player::psycho(name.clone(), balance)
        } else {
            Player::new(name.clone(), balance)
        };
        self.players.push(player)?;
        info!(
            target: logging::ENTITY,
            "➕ A new player walked in: {} with {} in cash{}",
            name,
            balance,
            if psycho { " (and a wild look)" } else { "" }
        );

        Ok(StepOutcome::NewPlayer {
            name,
            balance,
            psycho,
        })
    }

    /// Draws: kind (favouring whichever kind is rarer), name, then honk volume.
    fn add_random_goose(&mut self) -> Result<StepOutcome, CasinoError> {
        if self.goose_pool.is_empty() {
            return Err(CasinoError::NamePoolExhausted { kind: "goose" });
        }
        let weights: Vec<f64> = GooseKind::ALL
            .iter()
            .map(|kind| 1.0 / (self.geese.count_kind(*kind) + 1) as f64)
            .collect();
        let kind = GooseKind::ALL[self.rng.weighted(&weights)?];
        let index = self
            .rng
            .pick(self.goose_pool.len())
            .ok_or(CasinoError::NamePoolExhausted { kind: "goose" })?;
        let name = self.goose_pool.remove(index);
        let honk_volume = self
            .rng
            .range_inclusive(i64::from(MIN_HONK_VOLUME), i64::from(MAX_HONK_VOLUME))
            as u8;

        self.geese.push(Goose::new(name.clone(), kind, honk_volume))?;
        info!(
            target: logging::ENTITY,
            "➕ A new {} goose flew in: {}",
            kind.label(),
            name
        );

        Ok(StepOutcome::NewGoose {
            name,
            kind,
            honk_volume,
        })
    }

    /// Resolve a psycho outburst by `killer`.
    ///
    /// A lone killer always removes themselves; otherwise they do so with probability 0.4.
    /// Failing that, a uniformly chosen other player loses everything to the killer and
    /// leaves. Either way exactly one player (and their bet) is gone.
    pub fn kill_player(&mut self, killer: &str) -> Result<KillOutcome, CasinoError> {
        if !self.players.contains(killer) {
            return Err(CasinoError::PlayerNotFound(killer.to_string()));
        }

        if self.players.len() == 1 || self.rng.chance(SELF_DESTRUCT_PROBABILITY) {
            self.players.remove(killer);
            self.bets.remove(killer);
            info!(
                target: logging::KILL,
                "🔪 Player {} snapped and destroyed themselves",
                killer
            );
            return Ok(KillOutcome::SelfDestruct {
                killer: killer.to_string(),
            });
        }

        let others: Vec<String> = self
            .players
            .names()
            .filter(|name| *name != killer)
            .map(str::to_string)
            .collect();
        let index = self
            .rng
            .pick(others.len())
            .ok_or_else(|| CasinoError::PlayerNotFound(killer.to_string()))?;
        let victim = self
            .players
            .remove(&others[index])
            .ok_or_else(|| CasinoError::PlayerNotFound(others[index].clone()))?;
        self.bets.remove(&victim.name);

        let loot = victim.balance;
        let Some(murderer) = self.players.by_name_mut(killer) else {
            return Err(CasinoError::PlayerNotFound(killer.to_string()));
        };
        murderer.update_balance(loot);
        murderer.on_balance_change(loot);
        info!(
            target: logging::KILL,
            "🔪 Player {} killed {} and took {}! New balance: {}",
            killer,
            victim.name,
            loot,
            murderer.balance
        );

        Ok(KillOutcome::Murder {
            killer: killer.to_string(),
            victim: victim.name,
            loot,
        })
    }
}
