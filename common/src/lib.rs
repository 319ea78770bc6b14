//! # Loto Common
//!
//! Shared vocabulary for the `loto` workspace.
//!
//! * **[`game`]**: game categories and per-game draw rules.
//! * **[`registry`]**: the static table of supported games.
//! * **[`error`]**: the error type shared by every crate.
//! * **[`config`]**: runtime options collected from the command line.

pub mod config;
pub mod error;
pub mod game;
pub mod macros;
pub mod registry;

pub use error::LotoError;
pub use game::{GameCategory, GameConfiguration};
pub use registry::Registry;
