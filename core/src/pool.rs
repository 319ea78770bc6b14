//! # Number Pool
//!
//! The values a ticket is drawn from. Sampling never removes values, so one
//! pool serves any number of draws.

use loto_common::LotoError;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberPool {
    items: Vec<i32>,
}

impl NumberPool {
    /// Creates a pool holding every value in `min..=max`, ascending.
    pub fn new(min: i32, max: i32) -> Result<Self, LotoError> {
        if max < min {
            return Err(LotoError::InvalidRange { min, max });
        }
        Ok(Self {
            items: (min..=max).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.items
    }

    pub fn append<I: IntoIterator<Item = i32>>(&mut self, values: I) {
        self.items.extend(values);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, value: i32) -> bool {
        self.items.contains(&value)
    }

    pub fn sort(&mut self) {
        self.items.sort_unstable();
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
    }

    /// Picks `n` distinct entries in random order.
    ///
    /// Asking for more entries than the pool holds returns the whole pool.
    pub fn sample_unique<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<i32> {
        self.items.choose_multiple(rng, n).copied().collect()
    }

    /// Picks `n` entries independently; the same value may come up more than once.
    pub fn sample_with_replacement<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<i32> {
        (0..n)
            .map_while(|_| self.items.choose(&mut *rng).copied())
            .collect()
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
