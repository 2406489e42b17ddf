//! Canvas abstraction: the drawing surface the painter renders onto.
//!
//! The host application owns the real graphics backend (window, GPU
//! context, texture upload). The painter only needs three primitives -
//! rectangle outlines, line segments, and rotated sprites - issued inside
//! exclusive drawing-mode batches. Only one batch may be open at a time,
//! and every batch must be closed before the next opens. The scope guards
//! below encode both rules in the type system: a guard mutably borrows the
//! canvas for its lifetime, and its `Drop` closes the batch even if a pass
//! fails partway.

use fruitfall_atlas::FrameRect;
use fruitfall_types::Rgba;

/// Parameters of one rotated-sprite draw.
///
/// Destination values are in canvas units; `src` is in source-image pixel
/// space. `rotation_deg` rotates around `(origin_x, origin_y)` relative to
/// the destination position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteParams {
    pub dest_x: f32,
    pub dest_y: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub dest_w: f32,
    pub dest_h: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotation_deg: f32,
    pub src: FrameRect,
    pub flip_h: bool,
    pub flip_v: bool,
}

/// A 2D drawing surface with batched draw modes.
pub trait Canvas {
    /// Opaque handle to an uploaded texture.
    type Texture;

    fn begin_outline_batch(&mut self);
    fn end_outline_batch(&mut self);

    fn begin_sprite_batch(&mut self);
    fn end_sprite_batch(&mut self);

    /// Unfilled rectangle outline. Valid only inside an outline batch.
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba, thickness: f32);

    /// Line segment. Valid only inside an outline batch.
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba, thickness: f32);

    /// Rotated sprite draw. Valid only inside a sprite batch.
    fn draw_sprite(&mut self, texture: &Self::Texture, params: &SpriteParams);
}

/// Scoped outline batch: open on construction, closed on drop.
pub struct OutlineScope<'a, C: Canvas> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas> OutlineScope<'a, C> {
    pub fn begin(canvas: &'a mut C) -> Self {
        canvas.begin_outline_batch();
        Self { canvas }
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba, thickness: f32) {
        self.canvas.stroke_rect(x, y, w, h, color, thickness);
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba, thickness: f32) {
        self.canvas.line(x1, y1, x2, y2, color, thickness);
    }
}

impl<C: Canvas> Drop for OutlineScope<'_, C> {
    fn drop(&mut self) {
        self.canvas.end_outline_batch();
    }
}

/// Scoped sprite batch: open on construction, closed on drop.
pub struct SpriteScope<'a, C: Canvas> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas> SpriteScope<'a, C> {
    pub fn begin(canvas: &'a mut C) -> Self {
        canvas.begin_sprite_batch();
        Self { canvas }
    }

    pub fn draw(&mut self, texture: &C::Texture, params: &SpriteParams) {
        self.canvas.draw_sprite(texture, params);
    }
}

impl<C: Canvas> Drop for SpriteScope<'_, C> {
    fn drop(&mut self) {
        self.canvas.end_sprite_batch();
    }
}
