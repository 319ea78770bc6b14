#![cfg(test)]
use std::collections::HashSet;

use loto_common::{GameCategory, GameConfiguration, LotoError, registry};
use loto_core::{DrawEngine, DrawResult, NumberPool};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Five Loto 6 tickets: six distinct numbers from 1-43 each, no ticket twice.
#[test]
fn loto6_five_tickets() {
    let mut engine = DrawEngine::for_game("loto6").expect("loto6 is registered");
    let results = engine.try_draw_many(5).unwrap();

    assert_eq!(results.len(), 5);
    for result in &results {
        assert_eq!(result.len(), 6);
        assert!(result.iter().all(|n| (1..=43).contains(n)));
        assert!(result.windows(2).all(|w| w[0] < w[1]));
    }
    let distinct: HashSet<&DrawResult> = results.iter().collect();
    assert_eq!(distinct.len(), 5);
}

/// Three Numbers 3 tickets: three digits each, no ticket twice.
#[test]
fn numbers3_three_tickets() {
    let mut engine = DrawEngine::for_game("numbers3").expect("numbers3 is registered");
    let results = engine.try_draw_many(3).unwrap();

    assert_eq!(results.len(), 3);
    for result in &results {
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|d| (0..=9).contains(d)));
    }
    let distinct: HashSet<&DrawResult> = results.iter().collect();
    assert_eq!(distinct.len(), 3);
}

#[test]
fn every_registered_game_builds_an_engine() {
    for id in registry::identifiers() {
        let engine = DrawEngine::for_game(id).unwrap_or_else(|| panic!("no engine for {id}"));
        let config = registry::validate(id).unwrap();
        assert_eq!(engine.config(), config);
        assert_eq!(engine.pool(), &NumberPool::new(config.min, config.max).unwrap());
    }
}

#[test]
fn unknown_game_has_no_engine() {
    assert!(DrawEngine::for_game("bogus").is_none());
    assert!(matches!(
        registry::validate("bogus"),
        Err(LotoError::InvalidGameType { .. })
    ));
    assert_eq!(registry::category_of("bogus"), None);
}

/// Ordered tickets with repeats: every one of the 3^2 tickets shows up.
#[test]
fn exhausting_a_small_numbers_game() {
    let config = GameConfiguration::new(GameCategory::Numbers, 2, 1, 3, true);
    let mut engine = DrawEngine::with_rng(config, StdRng::seed_from_u64(77)).unwrap();

    let results = engine.try_draw_many(9).unwrap();
    let mut values: Vec<Vec<i32>> = results.into_iter().map(DrawResult::into_inner).collect();
    values.sort();

    let expected: Vec<Vec<i32>> = (1..=3)
        .flat_map(|a| (1..=3).map(move |b| vec![a, b]))
        .collect();
    assert_eq!(values, expected);

    assert!(matches!(
        engine.try_draw_many(10),
        Err(LotoError::ExhaustedCombinationSpace { requested: 10, available: 9 })
    ));
}

#[test]
fn seeded_draws_are_reproducible() {
    let config = *registry::validate("loto7").unwrap();
    let first = DrawEngine::with_rng(config, StdRng::seed_from_u64(1))
        .unwrap()
        .draw_many(10);
    let second = DrawEngine::with_rng(config, StdRng::seed_from_u64(1))
        .unwrap()
        .draw_many(10);
    assert_eq!(first, second);
}
