#![cfg(test)]
use std::collections::HashSet;

use loto_common::registry;
use loto_core::{DrawEngine, DrawPolicy, DrawResult};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn game_ids() -> impl Strategy<Value = &'static str> {
    prop::sample::select(registry::identifiers())
}

fn engine(id: &str, seed: u64) -> DrawEngine<StdRng> {
    let config = *registry::validate(id).unwrap();
    DrawEngine::with_rng(config, StdRng::seed_from_u64(seed)).unwrap()
}

proptest! {
    #[test]
    fn single_draw_respects_game_rules(id in game_ids(), seed in any::<u64>()) {
        let mut engine = engine(id, seed);
        let config = *engine.config();
        let result = engine.draw_once();

        prop_assert_eq!(result.len(), config.count);
        prop_assert!(result.iter().all(|n| (config.min..=config.max).contains(n)));

        if config.policy() == DrawPolicy::Unique {
            prop_assert!(result.windows(2).all(|w| w[0] < w[1]), "not strictly ascending: {}", result);
        }
    }

    #[test]
    fn many_draws_are_pairwise_distinct(id in game_ids(), seed in any::<u64>(), n in 1i64..60) {
        let mut engine = engine(id, seed);
        let results = engine.draw_many(n);

        prop_assert_eq!(results.len() as i64, n);
        let distinct: HashSet<&DrawResult> = results.iter().collect();
        prop_assert_eq!(distinct.len(), results.len());
    }

    #[test]
    fn non_positive_counts_draw_nothing(id in game_ids(), n in i64::MIN..=0) {
        let mut engine = engine(id, 0);
        prop_assert!(engine.draw_many(n).is_empty());
        prop_assert!(engine.try_draw_many(n).unwrap().is_empty());
    }
}
