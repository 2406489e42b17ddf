//! Board painting layer for the fruit falling-block game.
//!
//! Turns a character-grid board into colored cell borders, grid lines, and
//! rotated fruit sprites on an abstract 2D canvas. The host supplies the
//! canvas backend, a ready texture handle, and a pre-parsed sprite atlas
//! index; the simulation supplies the board and falling-piece state
//! through read-only traits.
//!
//! Goals:
//! - Keep classification and layout pure and unit-testable
//! - Make batch misuse (nested or interleaved draw modes) unrepresentable
//! - Degrade gracefully on unexpected grid content

pub mod canvas;
pub mod classify;
pub mod layout;
pub mod painter;
pub mod recording;
pub mod snapshot;

pub use canvas::{Canvas, OutlineScope, SpriteParams, SpriteScope};
pub use classify::{classify, color_for, CellVisual};
pub use layout::{BoardLayout, CellSize};
pub use painter::BoardPainter;
pub use recording::{DrawCall, RecordingCanvas};
pub use snapshot::{ActivePiece, BoardSnapshot, BoardView};
