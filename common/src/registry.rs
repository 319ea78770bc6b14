//! # Game Registry
//!
//! Every supported game, keyed by the identifier typed on the command line.
//!
//! Draw rules follow the public Takarakuji rules:
//! * Loto 6: 6 of 1-43
//! * Loto 7: 7 of 1-37
//! * Mini Loto: 5 of 1-31
//! * Numbers 3 / 4: 3 or 4 digits, each 0-9, repeats allowed

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::LotoError;
use crate::game::{GameCategory, GameConfiguration};

pub const LOTO_6: &str = "loto6";
pub const LOTO_7: &str = "loto7";
pub const MINI_LOTO: &str = "miniloto";
pub const NUMBERS_3: &str = "numbers3";
pub const NUMBERS_4: &str = "numbers4";

const GAMES: [(&str, GameConfiguration); 5] = [
    (LOTO_6, GameConfiguration::new(GameCategory::Loto, 6, 1, 43, false)),
    (LOTO_7, GameConfiguration::new(GameCategory::Loto, 7, 1, 37, false)),
    (MINI_LOTO, GameConfiguration::new(GameCategory::Loto, 5, 1, 31, false)),
    (NUMBERS_3, GameConfiguration::new(GameCategory::Numbers, 3, 0, 9, true)),
    (NUMBERS_4, GameConfiguration::new(GameCategory::Numbers, 4, 0, 9, true)),
];

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Read-only lookup from game identifier to its rules.
///
/// Iteration order is alphabetical by identifier.
#[derive(Debug, Clone)]
pub struct Registry {
    games: BTreeMap<&'static str, GameConfiguration>,
}

impl Registry {
    /// The process-wide registry, built on first access.
    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(|| Registry::from_entries(GAMES))
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, GameConfiguration)>,
    {
        Self {
            games: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&GameConfiguration> {
        self.games.get(id)
    }

    /// Resolves `id`, failing with the full list of valid identifiers.
    pub fn validate(&self, id: &str) -> Result<&GameConfiguration, LotoError> {
        self.games.get(id).ok_or_else(|| LotoError::InvalidGameType {
            given: id.to_string(),
            valid: self.identifiers().into_iter().map(String::from).collect(),
        })
    }

    pub fn category_of(&self, id: &str) -> Option<GameCategory> {
        self.games.get(id).map(|config| config.category)
    }

    pub fn identifiers(&self) -> Vec<&'static str> {
        self.games.keys().copied().collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &GameConfiguration)> {
        self.games.iter().map(|(id, config)| (*id, config))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

pub fn validate(id: &str) -> Result<&'static GameConfiguration, LotoError> {
    Registry::global().validate(id)
}

pub fn category_of(id: &str) -> Option<GameCategory> {
    Registry::global().category_of(id)
}

pub fn identifiers() -> Vec<&'static str> {
    Registry::global().identifiers()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
