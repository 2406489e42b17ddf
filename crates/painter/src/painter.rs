//! BoardPainter: orchestrates one full frame of board rendering.
//!
//! A frame is three ordered passes over the grid, each inside its own
//! exclusive batch scope:
//!
//! 1. borders - gray outline around every occupied cell
//! 2. sprites - one rotated fruit sprite per occupied cell
//! 3. grid lines - white lines at cell boundaries
//!
//! Every frame redraws the full board; the grid is small enough that
//! dirty-rect tracking would not pay for itself. The only state carried
//! across frames is the settled-sprite angle, which advances by a fixed
//! step once per frame so all settled fruit spin in unison.

use anyhow::Result;
use log::debug;

use fruitfall_atlas::SpriteAtlasIndex;
use fruitfall_types::{
    Placement, Rgba, BORDER_THICKNESS, EMPTY_CELL, GRID_LINE_THICKNESS, SETTLED_SPIN_STEP_DEG,
};

use crate::canvas::{Canvas, OutlineScope, SpriteParams, SpriteScope};
use crate::classify::classify;
use crate::layout::{BoardLayout, CellSize};
use crate::snapshot::{ActivePiece, BoardView};

const BORDER_COLOR: Rgba = Rgba::rgb(0x7f, 0x7f, 0x7f);
const GRID_LINE_COLOR: Rgba = Rgba::rgb(0xff, 0xff, 0xff);

/// Renders the board state onto a [`Canvas`] using a sprite atlas.
pub struct BoardPainter<C: Canvas> {
    layout: BoardLayout,
    texture: C::Texture,
    atlas: SpriteAtlasIndex,
    settled_angle: f32,
}

impl<C: Canvas> BoardPainter<C> {
    /// Build a painter for a canvas of `canvas_w` x `canvas_h` units and a
    /// board of `rows` x `cols` cells.
    ///
    /// Fails fast on non-positive canvas dimensions or a zero-sized grid
    /// rather than producing degenerate cell sizes.
    pub fn new(
        canvas_w: f32,
        canvas_h: f32,
        rows: usize,
        cols: usize,
        texture: C::Texture,
        atlas: SpriteAtlasIndex,
    ) -> Result<Self> {
        let layout = BoardLayout::new(canvas_w, canvas_h, rows, cols)?;
        debug!("board painter: {canvas_w}x{canvas_h} canvas, {rows}x{cols} grid");
        Ok(Self {
            layout,
            texture,
            atlas,
            settled_angle: 0.0,
        })
    }

    /// Render one frame: borders, sprites, then grid lines.
    ///
    /// Reads the board and the falling piece fresh; the settled-sprite
    /// angle advances exactly once per call. Errors only if a sprite name
    /// is missing from the atlas, which the classifier's star fallback
    /// makes unreachable for well-formed atlases.
    pub fn render_frame(
        &mut self,
        canvas: &mut C,
        board: &impl BoardView,
        piece: &impl ActivePiece,
    ) -> Result<()> {
        self.draw_borders(canvas, board);
        self.draw_sprites(canvas, board, piece)?;
        self.draw_grid_lines(canvas);
        Ok(())
    }

    fn draw_borders(&self, canvas: &mut C, board: &impl BoardView) {
        let cell = self.layout.cell_size();
        let mut scope = OutlineScope::begin(canvas);
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                if board.cell_code(row, col) == EMPTY_CELL {
                    continue;
                }
                let (x, y) = self.layout.cell_origin(row, col);
                scope.stroke_rect(x, y, cell.w, cell.h, BORDER_COLOR, BORDER_THICKNESS);
            }
        }
    }

    fn draw_sprites(
        &mut self,
        canvas: &mut C,
        board: &impl BoardView,
        piece: &impl ActivePiece,
    ) -> Result<()> {
        // Once per frame, not per cell.
        self.settled_angle += SETTLED_SPIN_STEP_DEG;

        let cell = self.layout.cell_size();
        let mut scope = SpriteScope::begin(canvas);
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let code = board.cell_code(row, col);
                if code == EMPTY_CELL {
                    continue;
                }
                let visual = classify(code);
                let src = self.atlas.frame_rect(visual.fruit.sprite_name())?;
                let (x, y) = self.layout.cell_origin(row, col);
                // Active sprites counter-rotate so the visual spin matches
                // the piece's actual direction.
                let rotation_deg = match visual.placement {
                    Placement::Active => -piece.rotation_degrees(),
                    Placement::Settled => self.settled_angle,
                };
                scope.draw(
                    &self.texture,
                    &SpriteParams {
                        dest_x: x,
                        dest_y: y,
                        origin_x: cell.w / 2.0,
                        origin_y: cell.h / 2.0,
                        dest_w: cell.w,
                        dest_h: cell.h,
                        scale_x: 1.0,
                        scale_y: 1.0,
                        rotation_deg,
                        src,
                        flip_h: false,
                        flip_v: false,
                    },
                );
            }
        }
        Ok(())
    }

    /// Draw grid lines at cell boundaries across the whole canvas.
    ///
    /// Runs as the last pass of [`render_frame`](Self::render_frame) and is
    /// also usable on its own.
    pub fn draw_grid_lines(&self, canvas: &mut C) {
        let cell = self.layout.cell_size();
        let (ox, oy) = self.layout.offset();
        let w = self.layout.canvas_width();
        let h = self.layout.canvas_height();

        let mut scope = OutlineScope::begin(canvas);
        for row in 0..self.layout.rows() {
            let y = oy + row as f32 * cell.h;
            scope.line(ox, y, ox + w, y, GRID_LINE_COLOR, GRID_LINE_THICKNESS);
        }
        for col in 0..self.layout.cols() {
            let x = ox + col as f32 * cell.w;
            scope.line(x, oy, x, oy + h, GRID_LINE_COLOR, GRID_LINE_THICKNESS);
        }
    }

    /// Set the global pixel offset applied to every drawn element.
    ///
    /// Takes effect on the next frame; offset changes are not interpolated.
    pub fn set_offset(&mut self, dx: f32, dy: f32) {
        self.layout.set_offset(dx, dy);
    }

    /// Recompute the cell size after a canvas resize.
    pub fn resize(&mut self, canvas_w: f32, canvas_h: f32) -> Result<()> {
        self.layout.resize(canvas_w, canvas_h)?;
        debug!("board painter resized to {canvas_w}x{canvas_h}");
        Ok(())
    }

    /// Recompute the cell size after a board-dimension change.
    pub fn set_grid(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.layout.set_grid(rows, cols)?;
        debug!("board painter grid set to {rows}x{cols}");
        Ok(())
    }

    /// Current shared rotation angle of settled sprites, in degrees.
    pub fn settled_angle(&self) -> f32 {
        self.settled_angle
    }

    pub fn offset(&self) -> (f32, f32) {
        self.layout.offset()
    }

    pub fn cell_size(&self) -> CellSize {
        self.layout.cell_size()
    }
}
