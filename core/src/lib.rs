//! # Loto Core
//!
//! The draw engine. A [`DrawEngine`] is bound to one game, owns a
//! [`NumberPool`] covering that game's range and hands out tickets.

pub mod draw;
pub mod engine;
pub mod pool;

pub use draw::DrawResult;
pub use engine::DrawEngine;
pub use loto_common::game::DrawPolicy;
pub use pool::NumberPool;
