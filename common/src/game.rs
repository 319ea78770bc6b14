//! # Game Model
//!
//! A game is described by a [`GameConfiguration`]: how many values make up one
//! ticket, the inclusive range they come from and whether a value may repeat.

use std::fmt;

use crate::error::LotoError;

/// Family a game belongs to. Drives how results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameCategory {
    Loto,
    Numbers,
}

impl GameCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCategory::Loto => "loto",
            GameCategory::Numbers => "numbers",
        }
    }
}

impl fmt::Display for GameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single ticket is sampled from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPolicy {
    /// Distinct values, reported in ascending order.
    Unique,
    /// Independent picks, reported in the order they were drawn.
    WithReplacement,
}

/// Draw rules for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfiguration {
    pub category: GameCategory,
    /// Values per ticket.
    pub count: usize,
    pub min: i32,
    pub max: i32,
    pub allow_duplicates: bool,
}

impl GameConfiguration {
    pub const fn new(
        category: GameCategory,
        count: usize,
        min: i32,
        max: i32,
        allow_duplicates: bool,
    ) -> Self {
        Self {
            category,
            count,
            min,
            max,
            allow_duplicates,
        }
    }

    /// Number of values in `min..=max`, or 0 when the bounds are inverted.
    pub fn range_len(&self) -> usize {
        if self.max < self.min {
            return 0;
        }
        (i64::from(self.max) - i64::from(self.min) + 1) as usize
    }

    pub fn policy(&self) -> DrawPolicy {
        if self.allow_duplicates {
            DrawPolicy::WithReplacement
        } else {
            DrawPolicy::Unique
        }
    }

    /// Verifies that a ticket can actually be drawn with these rules.
    pub fn check(&self) -> Result<(), LotoError> {
        if self.count == 0 {
            return Err(LotoError::InvalidConfiguration(
                "count must be at least 1".into(),
            ));
        }
        if self.max <= self.min {
            return Err(LotoError::InvalidConfiguration(format!(
                "max ({}) must be greater than min ({})",
                self.max, self.min
            )));
        }
        if !self.allow_duplicates && self.count > self.range_len() {
            return Err(LotoError::InvalidConfiguration(format!(
                "cannot draw {} unique values from a range of {}",
                self.count,
                self.range_len()
            )));
        }
        Ok(())
    }

    /// Number of distinct tickets these rules can produce.
    ///
    /// `C(range, count)` for unique draws, `range^count` when values may repeat
    /// (order matters there). Returns `None` if the value does not fit in a `u128`.
    pub fn combination_space(&self) -> Option<u128> {
        let range = self.range_len() as u128;
        match self.policy() {
            DrawPolicy::WithReplacement => {
                let exp = u32::try_from(self.count).ok()?;
                range.checked_pow(exp)
            }
            DrawPolicy::Unique => binomial(range, self.count as u128),
        }
    }
}

fn binomial(n: u128, k: u128) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is always divisible by (i + 1) here
        acc = acc.checked_mul(n - i)? / (i + 1);
    }
    Some(acc)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
