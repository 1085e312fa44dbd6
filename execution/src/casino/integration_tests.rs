//! Integration tests for the casino loop.
//!
//! These drive [`Casino::perform_step`] end to end and check the properties that must hold
//! across many ticks, plus the fixed scenarios the handlers are pinned to.

#[cfg(test)]
mod tests {
    use crate::casino::{EventKind, KillOutcome, StepOutcome};
    use crate::mocks::{create_casino, create_empty_casino};
    use crate::{Casino, CasinoConfig, CasinoError};
    use goosino_types::casino::{BetKind, Goose, GooseAction, Player};
    use std::collections::HashSet;

    fn run(casino: &mut Casino, steps: usize) -> Vec<StepOutcome> {
        (0..steps)
            .map(|_| casino.perform_step().expect("step should succeed"))
            .collect()
    }

    #[test]
    fn test_seeded_scenario_is_reproducible() {
        let mut first = create_casino(42);
        let mut second = create_casino(42);
        let a = run(&mut first, 60);
        let b = run(&mut second, 60);
        assert_eq!(a, b);
        assert_eq!(first.players, second.players);
        assert_eq!(first.geese, second.geese);
        assert_eq!(first.weights(), second.weights());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = run(&mut create_casino(1), 40);
        let b = run(&mut create_casino(2), 40);
        assert_ne!(a, b);
    }

    #[test]
    fn test_long_runs_keep_invariants() {
        for seed in 0..16 {
            let mut casino = Casino::new(CasinoConfig::default(), Some(seed));
            let mut names = HashSet::new();
            for _ in 0..400 {
                let outcome = casino.perform_step().expect("weights stay positive");
                match &outcome {
                    StepOutcome::NewPlayer { name, .. } | StepOutcome::NewGoose { name, .. } => {
                        assert!(names.insert(name.clone()), "name {name} reused");
                    }
                    StepOutcome::Spin { .. } => assert!(casino.bets.is_empty()),
                    _ => {}
                }

                assert!(casino.weights().as_slice().iter().all(|w| *w >= 0.0));
                assert!(casino.bets.len() <= casino.players.len());
                for player in casino.players.iter() {
                    if let Some(level) = player.psycho_level() {
                        assert!((0.0..=1.0).contains(&level));
                    }
                    assert!(player.balance >= 0, "{} went negative", player.name);
                }
                for (name, _) in casino.bets.iter() {
                    assert!(casino.players.contains(name));
                }
            }
        }
    }

    #[test]
    fn test_first_step_in_empty_casino_is_arrival() {
        let mut casino = Casino::new(CasinoConfig::default(), Some(7));
        let outcome = casino.perform_step().unwrap();
        assert_eq!(outcome.event(), Some(EventKind::NewEntity));
        assert_eq!(casino.players.len() + casino.geese.len(), 1);
    }

    #[test]
    fn test_zero_pocket_pays_zero_bet() {
        let mut casino = create_casino(42);
        casino.bets.place_bet("TestPlayer", BetKind::Zero, 10);
        casino.players.by_name_mut("TestPlayer").unwrap().update_balance(-10);

        let StepOutcome::Spin {
            number,
            color,
            results,
        } = casino.settle_spin(0)
        else {
            panic!("expected a spin");
        };
        assert_eq!(number, 0);
        assert_eq!(color, BetKind::Zero);
        assert!(results[0].won);
        assert_eq!(casino.players[0].balance, 110);
        assert!(casino.bets.is_empty());
    }

    #[test]
    fn test_zero_pocket_sinks_colour_bets() {
        let mut casino = create_casino(42);
        casino.add_player(Player::new("Black", 50)).unwrap();
        casino.bets.place_bet("TestPlayer", BetKind::Red, 10);
        casino.bets.place_bet("Black", BetKind::Black, 10);
        let StepOutcome::Spin { results, .. } = casino.settle_spin(0) else {
            panic!("expected a spin");
        };
        assert!(results.iter().all(|result| !result.won));
        assert_eq!(casino.players[0].balance, 100);
        assert_eq!(casino.players[1].balance, 50);
    }

    #[test]
    fn test_all_zero_weights_fail_loudly() {
        // Population sits at the ceiling with nobody to bet: nothing can happen.
        let mut casino = create_empty_casino(3, 1);
        casino.add_goose(Goose::honk("Lonely", 1)).unwrap();
        assert_eq!(casino.perform_step().unwrap_err(), CasinoError::AllWeightsZero);
    }

    #[test]
    fn test_weights_carry_over_between_steps() {
        let mut casino = create_casino(42);
        casino.perform_step().unwrap();
        let steal = casino.weights().get(EventKind::Steal);
        let action = casino.weights().get(EventKind::GooseAction);
        assert!(steal > 0.0);

        casino.geese = Default::default();
        casino.perform_step().unwrap();
        assert_eq!(casino.weights().get(EventKind::Steal), steal);
        assert_eq!(casino.weights().get(EventKind::GooseAction), action);
    }

    #[test]
    fn test_seeded_weight_survives_without_geese() {
        let mut casino = create_empty_casino(42, 6);
        assert_eq!(casino.config().max_entities, 6);
        casino.add_player(Player::new("Solo", 100)).unwrap();
        casino.weights_mut().set(EventKind::Steal, 0.75);
        casino.weights_mut().set(EventKind::GooseAction, 0.25);

        for _ in 0..10 {
            casino.perform_step().unwrap();
            assert_eq!(casino.weights().get(EventKind::Steal), 0.75);
            assert_eq!(casino.weights().get(EventKind::GooseAction), 0.25);
            if !casino.geese.is_empty() {
                break;
            }
        }
    }

    #[test]
    fn test_goose_events_without_geese_are_recoverable() {
        let mut casino = create_casino(42);
        casino.geese = Default::default();
        for event in [EventKind::Steal, EventKind::GooseAction] {
            let err = casino.dispatch(event).unwrap_err();
            assert_eq!(err, CasinoError::EmptyPopulation { event });
            assert!(err.is_recoverable());
        }
        assert_eq!(casino.players[0].balance, 100);
    }

    #[test]
    fn test_exhausted_name_pool_skips_tick() {
        let config = CasinoConfig {
            max_entities: 2,
            player_names: Vec::new(),
            goose_names: Vec::new(),
        };
        let mut casino = Casino::new(config, Some(5));
        casino.add_goose(Goose::rich("Only", 2)).unwrap();

        let outcome = casino.perform_step().unwrap();
        let StepOutcome::Skipped { event, reason } = outcome else {
            panic!("expected a skipped tick, got {outcome:?}");
        };
        assert_eq!(event, EventKind::NewEntity);
        assert!(reason.contains("name pool exhausted"));
    }

    #[test]
    fn test_certain_psycho_triggers_kill_instead_of_event() {
        let mut casino = create_casino(42);
        casino
            .add_player(Player::psycho("Maniac", 10).with_psycho_level(1.0))
            .unwrap();
        let StepOutcome::Kill(kill) = casino.perform_step().unwrap() else {
            panic!("expected a kill");
        };
        match kill {
            KillOutcome::SelfDestruct { killer } => {
                assert_eq!(killer, "Maniac");
                assert_eq!(casino.players.len(), 1);
            }
            KillOutcome::Murder { killer, victim, loot } => {
                assert_eq!(killer, "Maniac");
                assert_eq!(victim, "TestPlayer");
                assert_eq!(loot, 100);
                assert_eq!(casino.players.len(), 1);
                assert_eq!(casino.players[0].balance, 110);
            }
        }
    }

    #[test]
    fn test_calm_psycho_never_kills() {
        let mut casino = create_casino(42);
        casino.add_player(Player::psycho("Zen", 100)).unwrap();
        // A level of exactly 0 never exceeds a draw in [0, 1).
        for _ in 0..100 {
            assert_eq!(casino.find_killer(), None);
        }
    }

    #[test]
    fn test_rich_goose_action_through_dispatch() {
        let mut casino = create_empty_casino(8, 20);
        casino.add_goose(Goose::rich("Goose-Tycoon", 3)).unwrap();
        casino.add_player(Player::new("A", 10)).unwrap();
        casino.add_player(Player::new("B", 500)).unwrap();

        let StepOutcome::GooseAction { action, affected, .. } =
            casino.dispatch(EventKind::GooseAction).unwrap()
        else {
            panic!("expected a goose action");
        };
        let GooseAction::Gift { amount } = action else {
            panic!("expected a gift");
        };
        assert_eq!(affected.len(), 2);
        assert_eq!(casino.players[0].balance - 10, amount);
        assert_eq!(casino.players[1].balance - 500, amount);
    }
}
