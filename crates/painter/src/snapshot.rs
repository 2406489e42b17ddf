//! Board and active-piece collaborators.
//!
//! The simulation owns the grid and the falling piece; the painter reads
//! them through these traits once per frame and never mutates them.
//! [`BoardSnapshot`] is an owned implementation for hosts that hand the
//! painter a plain character grid (and for tests).

use anyhow::{ensure, Result};

/// Read-only view of the board grid.
pub trait BoardView {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    /// Cell code at (row, col). Callers stay within the grid extents.
    fn cell_code(&self, row: usize, col: usize) -> char;
}

/// Read-only view of the currently falling piece.
pub trait ActivePiece {
    /// Accumulated rotation angle in degrees, no fixed bound.
    fn rotation_degrees(&self) -> f32;
}

/// Owned character-grid snapshot with the falling piece's angle.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    grid: Vec<Vec<char>>,
    cols: usize,
    piece_angle: f32,
}

impl BoardSnapshot {
    /// Build a snapshot from row strings, top row first.
    ///
    /// Rejects empty grids and ragged rows: every row must have the same
    /// number of cells.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        ensure!(!rows.is_empty(), "board must have at least one row");
        let grid: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        let cols = grid[0].len();
        ensure!(cols > 0, "board rows must not be empty");
        for (i, row) in grid.iter().enumerate() {
            ensure!(
                row.len() == cols,
                "row {i} has {} cells, expected {cols}",
                row.len()
            );
        }
        Ok(Self {
            grid,
            cols,
            piece_angle: 0.0,
        })
    }

    pub fn set_piece_angle(&mut self, degrees: f32) {
        self.piece_angle = degrees;
    }

    pub fn set_cell(&mut self, row: usize, col: usize, code: char) {
        self.grid[row][col] = code;
    }
}

impl BoardView for BoardSnapshot {
    fn rows(&self) -> usize {
        self.grid.len()
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn cell_code(&self, row: usize, col: usize) -> char {
        self.grid[row][col]
    }
}

impl ActivePiece for BoardSnapshot {
    fn rotation_degrees(&self) -> f32 {
        self.piece_angle
    }
}
