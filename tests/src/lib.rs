//! Cross-crate tests: the registry and the draw engine exercised together.

mod draw;
