//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the board renderer.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (rendering, tests, host integration).
//!
//! # Cell codes
//!
//! The board is a grid of `char` cell codes:
//!
//! - `' '` (`EMPTY_CELL`) marks an empty cell
//! - an uppercase letter marks a settled block of some fruit kind
//! - the matching lowercase letter marks the same fruit while it belongs to
//!   the currently falling piece
//! - `'F'` is the floor code
//!
//! # Rendering constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SETTLED_SPIN_STEP_DEG` | 0.25 | Per-frame rotation step for settled sprites |
//! | `BORDER_THICKNESS` | 4.0 | Cell border outline thickness |
//! | `GRID_LINE_THICKNESS` | 1.0 | Grid line thickness |

/// Empty-cell marker in the board grid.
pub const EMPTY_CELL: char = ' ';

/// Floor cell code.
pub const FLOOR_CELL: char = 'F';

/// Degrees added to the shared settled-sprite angle once per frame.
pub const SETTLED_SPIN_STEP_DEG: f32 = 0.25;

/// Outline thickness for cell borders, in canvas units.
pub const BORDER_THICKNESS: f32 = 4.0;

/// Thickness of board grid lines, in canvas units.
pub const GRID_LINE_THICKNESS: f32 = 1.0;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Fruit kinds drawable from the sprite atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FruitKind {
    Apple,
    Milk,
    Orange,
    Bread,
    Coconut,
    Star,
    Lettuce,
}

impl FruitKind {
    /// Resolve a fruit kind from a cell code (case-insensitive).
    ///
    /// This is a total function: the floor code and any unrecognized code
    /// fall back to [`FruitKind::Star`].
    pub fn from_code(code: char) -> Self {
        match code.to_ascii_lowercase() {
            'a' => FruitKind::Apple,
            'b' => FruitKind::Milk,
            'c' => FruitKind::Orange,
            'd' => FruitKind::Bread,
            'e' => FruitKind::Coconut,
            'f' => FruitKind::Star,
            'g' => FruitKind::Lettuce,
            _ => FruitKind::Star,
        }
    }

    /// Atlas key for this fruit's sprite.
    pub fn sprite_name(&self) -> &'static str {
        match self {
            FruitKind::Apple => "apple",
            FruitKind::Milk => "milk",
            FruitKind::Orange => "orange",
            FruitKind::Bread => "bread",
            FruitKind::Coconut => "coconut",
            FruitKind::Star => "star",
            FruitKind::Lettuce => "lettuce",
        }
    }
}

/// Whether a cell belongs to the falling piece or the settled board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Part of the currently controlled piece (lowercase code). Rotates
    /// with the live piece angle, sign-flipped.
    Active,
    /// Locked into the board (uppercase code, floor included). Rotates
    /// with the shared settled-sprite angle.
    Settled,
}

impl Placement {
    pub fn from_code(code: char) -> Self {
        if code.is_ascii_lowercase() {
            Placement::Active
        } else {
            Placement::Settled
        }
    }
}
