use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LotoError {
    #[error("invalid lottery type: {given}. It must be one of {}", valid.join(", "))]
    InvalidGameType { given: String, valid: Vec<String> },

    #[error("the number of draws must be greater than zero")]
    NonPositiveDrawCount,

    #[error("failed to create lottery for type: {0}")]
    EngineConstruction(String),

    #[error("cannot produce {requested} distinct draws, only {available} combinations exist")]
    ExhaustedCombinationSpace { requested: u128, available: u128 },

    #[error("invalid number range: {min}..={max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("invalid game configuration: {0}")]
    InvalidConfiguration(String),

    #[error("selection aborted: {0}")]
    Prompt(String),

    #[error("failed to render output: {0}")]
    Rendering(#[from] io::Error),
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
