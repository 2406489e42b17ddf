//! Fruitfall (workspace facade crate).
//!
//! This package keeps a single `fruitfall::{atlas,painter,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use fruitfall_atlas as atlas;
pub use fruitfall_painter as painter;
pub use fruitfall_types as types;
