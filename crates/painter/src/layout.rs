//! Board layout: maps (row, col) cells to canvas pixel rectangles.

use anyhow::{ensure, Result};

/// Uniform cell size in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub w: f32,
    pub h: f32,
}

/// Computes per-cell pixel positions from canvas and grid dimensions.
///
/// The cell size is recomputed only when the canvas or grid dimensions
/// change; per frame it is immutable. The offset is a global translation
/// applied to every drawn element (camera shake, HUD layout) and takes
/// effect on the next frame. No bounds checking is performed on cell
/// coordinates - callers stay within the grid extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    canvas_w: f32,
    canvas_h: f32,
    rows: usize,
    cols: usize,
    cell: CellSize,
    offset_x: f32,
    offset_y: f32,
}

impl BoardLayout {
    pub fn new(canvas_w: f32, canvas_h: f32, rows: usize, cols: usize) -> Result<Self> {
        let cell = compute_cell_size(canvas_w, canvas_h, rows, cols)?;
        Ok(Self {
            canvas_w,
            canvas_h,
            rows,
            cols,
            cell,
            offset_x: 0.0,
            offset_y: 0.0,
        })
    }

    /// Recompute the cell size for new canvas dimensions.
    ///
    /// Must be called before the next frame after a canvas resize; a stale
    /// cell size is a correctness bug.
    pub fn resize(&mut self, canvas_w: f32, canvas_h: f32) -> Result<()> {
        self.cell = compute_cell_size(canvas_w, canvas_h, self.rows, self.cols)?;
        self.canvas_w = canvas_w;
        self.canvas_h = canvas_h;
        Ok(())
    }

    /// Recompute the cell size for new grid dimensions.
    pub fn set_grid(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.cell = compute_cell_size(self.canvas_w, self.canvas_h, rows, cols)?;
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    pub fn set_offset(&mut self, dx: f32, dy: f32) {
        self.offset_x = dx;
        self.offset_y = dy;
    }

    /// Top-left canvas position of the cell at (row, col).
    #[inline]
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.offset_x + col as f32 * self.cell.w,
            self.offset_y + row as f32 * self.cell.h,
        )
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell
    }

    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    pub fn canvas_width(&self) -> f32 {
        self.canvas_w
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas_h
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

fn compute_cell_size(canvas_w: f32, canvas_h: f32, rows: usize, cols: usize) -> Result<CellSize> {
    ensure!(
        canvas_w > 0.0 && canvas_h > 0.0,
        "canvas dimensions must be positive (got {canvas_w}x{canvas_h})"
    );
    ensure!(
        rows > 0 && cols > 0,
        "grid dimensions must be non-zero (got {rows} rows x {cols} cols)"
    );
    Ok(CellSize {
        w: canvas_w / cols as f32,
        h: canvas_h / rows as f32,
    })
}
