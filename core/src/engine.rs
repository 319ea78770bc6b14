//! # Draw Engine
//!
//! Produces tickets for one game. Several tickets requested together are
//! guaranteed to be pairwise distinct.

use std::collections::HashSet;

use loto_common::game::{DrawPolicy, GameConfiguration};
use loto_common::{LotoError, Registry};
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, trace};

use crate::draw::DrawResult;
use crate::pool::NumberPool;

/// Larger requests grow their buffers while drawing.
const MAX_PREALLOCATED_DRAWS: usize = 4096;

pub struct DrawEngine<R: Rng = ThreadRng> {
    config: GameConfiguration,
    pool: NumberPool,
    rng: R,
}

impl DrawEngine<ThreadRng> {
    /// Builds an engine for a registered game, seeded from OS entropy.
    ///
    /// Returns `None` when `id` is not a registered game.
    pub fn for_game(id: &str) -> Option<Self> {
        let config = Registry::global().get(id)?;
        Self::with_rng(*config, rand::rng()).ok()
    }
}

impl<R: Rng> DrawEngine<R> {
    pub fn with_rng(config: GameConfiguration, rng: R) -> Result<Self, LotoError> {
        config.check()?;
        let pool = NumberPool::new(config.min, config.max)?;
        Ok(Self { config, pool, rng })
    }

    pub fn config(&self) -> &GameConfiguration {
        &self.config
    }

    pub fn pool(&self) -> &NumberPool {
        &self.pool
    }

    /// Draws a single ticket.
    pub fn draw_once(&mut self) -> DrawResult {
        let count = self.config.count;
        let values = match self.config.policy() {
            DrawPolicy::WithReplacement => self.pool.sample_with_replacement(&mut self.rng, count),
            DrawPolicy::Unique => {
                let mut values = self.pool.sample_unique(&mut self.rng, count);
                values.sort_unstable();
                values
            }
        };
        DrawResult::new(values)
    }

    /// Draws `count` pairwise distinct tickets, in the order they were accepted.
    ///
    /// Colliding tickets are redrawn until enough distinct ones exist, so a
    /// `count` larger than the game's combination space never returns. Use
    /// [`DrawEngine::try_draw_many`] to guard against that.
    pub fn draw_many(&mut self, count: i64) -> Vec<DrawResult> {
        let Ok(count) = usize::try_from(count) else {
            return Vec::new();
        };

        let capacity = self.initial_capacity(count);
        let mut results: Vec<DrawResult> = Vec::with_capacity(capacity);
        let mut seen: HashSet<DrawResult> = HashSet::with_capacity(capacity);
        let mut collisions: u64 = 0;

        while results.len() < count {
            let drawn = self.draw_once();
            if seen.contains(&drawn) {
                collisions += 1;
                trace!(%drawn, "discarding repeated draw");
                continue;
            }
            seen.insert(drawn.clone());
            results.push(drawn);
        }

        debug!(count, collisions, "draws complete");
        results
    }

    /// Up-front allocation for `count` draws, bounded by what the game can
    /// produce and by [`MAX_PREALLOCATED_DRAWS`].
    fn initial_capacity(&self, count: usize) -> usize {
        let space = self
            .config
            .combination_space()
            .map_or(usize::MAX, |space| usize::try_from(space).unwrap_or(usize::MAX));
        count.min(space).min(MAX_PREALLOCATED_DRAWS)
    }

    /// Like [`DrawEngine::draw_many`], but fails up front when `count` exceeds
    /// the number of distinct tickets the game can produce.
    pub fn try_draw_many(&mut self, count: i64) -> Result<Vec<DrawResult>, LotoError> {
        if count > 0 {
            if let Some(available) = self.config.combination_space() {
                let requested = count as u128;
                if requested > available {
                    return Err(LotoError::ExhaustedCombinationSpace {
                        requested,
                        available,
                    });
                }
            }
        }
        Ok(self.draw_many(count))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use loto_common::GameCategory;
    use loto_common::registry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(id: &str, seed: u64) -> DrawEngine<StdRng> {
        let config = *registry::validate(id).unwrap();
        DrawEngine::with_rng(config, StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn test_for_game() {
        assert!(DrawEngine::for_game("loto6").is_some());
        assert!(DrawEngine::for_game("numbers3").is_some());
        assert!(DrawEngine::for_game("invalid").is_none());
        assert!(DrawEngine::for_game("").is_none());
    }

    #[test]
    fn test_engine_pool_matches_config() {
        let engine = seeded("loto7", 1);
        assert_eq!(engine.pool().len(), 37);
        assert_eq!(engine.config().count, 7);
    }

    #[test]
    fn test_with_rng_rejects_broken_config() {
        let config = GameConfiguration::new(GameCategory::Loto, 12, 0, 9, false);
        let engine = DrawEngine::with_rng(config, StdRng::seed_from_u64(0));
        assert!(matches!(engine, Err(LotoError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_draw_once_unique_sorted() {
        for (id, count, min, max) in [("loto6", 6, 1, 43), ("loto7", 7, 1, 37), ("miniloto", 5, 1, 31)] {
            let mut engine = seeded(id, 42);
            for _ in 0..100 {
                let result = engine.draw_once();
                assert_eq!(result.len(), count, "{id}");
                assert!(result.iter().all(|n| (min..=max).contains(n)), "{id}: {result}");
                assert!(result.windows(2).all(|w| w[0] < w[1]), "{id} not ascending: {result}");
            }
        }
    }

    #[test]
    fn test_draw_once_with_replacement_keeps_order() {
        let mut engine = seeded("numbers4", 7);
        let mut saw_unsorted = false;
        for _ in 0..200 {
            let result = engine.draw_once();
            assert_eq!(result.len(), 4);
            assert!(result.iter().all(|d| (0..=9).contains(d)));
            if result.windows(2).any(|w| w[0] > w[1]) {
                saw_unsorted = true;
            }
        }
        assert!(saw_unsorted, "numbers draws should not be sorted");
    }

    #[test]
    fn test_draw_once_does_not_touch_pool() {
        let mut engine = seeded("miniloto", 3);
        let before = engine.pool().clone();
        engine.draw_many(20);
        assert_eq!(engine.pool(), &before);
    }

    #[test]
    fn test_draw_many_distinct() {
        let mut engine = seeded("numbers3", 11);
        let results = engine.draw_many(500);
        assert_eq!(results.len(), 500);
        let distinct: HashSet<&DrawResult> = results.iter().collect();
        assert_eq!(distinct.len(), 500);
    }

    #[test]
    fn test_draw_many_fills_whole_space() {
        let config = GameConfiguration::new(GameCategory::Numbers, 2, 0, 2, true);
        let mut engine = DrawEngine::with_rng(config, StdRng::seed_from_u64(5)).unwrap();
        let results = engine.draw_many(9);
        let distinct: HashSet<&DrawResult> = results.iter().collect();
        assert_eq!(distinct.len(), 9);
    }

    #[test]
    fn test_draw_many_non_positive() {
        let mut engine = seeded("loto6", 0);
        assert!(engine.draw_many(0).is_empty());
        assert!(engine.draw_many(-5).is_empty());
        assert!(engine.try_draw_many(-5).unwrap().is_empty());
    }

    #[test]
    fn test_try_draw_many_guards_space() {
        let config = GameConfiguration::new(GameCategory::Loto, 2, 1, 3, false);
        let mut engine = DrawEngine::with_rng(config, StdRng::seed_from_u64(9)).unwrap();

        assert_eq!(engine.try_draw_many(3).unwrap().len(), 3);
        assert!(matches!(
            engine.try_draw_many(4),
            Err(LotoError::ExhaustedCombinationSpace {
                requested: 4,
                available: 3
            })
        ));
    }

    #[test]
    fn test_initial_capacity_is_bounded() {
        let numbers3 = seeded("numbers3", 0);
        assert_eq!(numbers3.initial_capacity(5), 5);
        assert_eq!(numbers3.initial_capacity(usize::MAX), 1_000);

        let loto6 = seeded("loto6", 0);
        assert_eq!(loto6.initial_capacity(usize::MAX), MAX_PREALLOCATED_DRAWS);
        assert_eq!(loto6.initial_capacity(0), 0);
    }

    #[test]
    fn test_huge_request_is_refused_not_allocated() {
        let mut engine = seeded("loto6", 0);
        assert!(matches!(
            engine.try_draw_many(i64::MAX),
            Err(LotoError::ExhaustedCombinationSpace { .. })
        ));
    }

    #[test]
    fn test_seeded_engines_repeat() {
        let first = seeded("loto6", 2024).draw_many(5);
        let second = seeded("loto6", 2024).draw_many(5);
        assert_eq!(first, second);
    }
}
