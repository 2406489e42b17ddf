//! Recording canvas: a test double that logs every draw call.
//!
//! Backend-free stand-in for a real canvas, in the spirit of a mock
//! platform driver. Tests render against it and assert on the recorded
//! call sequence; benchmarks can use it as a near-no-op sink.

use fruitfall_types::Rgba;

use crate::canvas::{Canvas, SpriteParams};

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    BeginOutline,
    EndOutline,
    BeginSprite,
    EndSprite,
    StrokeRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgba,
        thickness: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgba,
        thickness: f32,
    },
    Sprite(SpriteParams),
}

/// Canvas implementation that records calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// All recorded sprite draws, in order.
    pub fn sprite_draws(&self) -> Vec<SpriteParams> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Sprite(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// All recorded rectangle outlines as (x, y, w, h, color, thickness).
    pub fn stroke_rects(&self) -> Vec<(f32, f32, f32, f32, Rgba, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::StrokeRect {
                    x,
                    y,
                    w,
                    h,
                    color,
                    thickness,
                } => Some((*x, *y, *w, *h, *color, *thickness)),
                _ => None,
            })
            .collect()
    }

    /// All recorded line segments as (x1, y1, x2, y2, color, thickness).
    pub fn lines(&self) -> Vec<(f32, f32, f32, f32, Rgba, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                    thickness,
                } => Some((*x1, *y1, *x2, *y2, *color, *thickness)),
                _ => None,
            })
            .collect()
    }

    /// Batch markers only, for asserting scope ordering and balance.
    pub fn batch_markers(&self) -> Vec<DrawCall> {
        self.calls
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCall::BeginOutline
                        | DrawCall::EndOutline
                        | DrawCall::BeginSprite
                        | DrawCall::EndSprite
                )
            })
            .cloned()
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    /// No real texture is needed to record calls.
    type Texture = ();

    fn begin_outline_batch(&mut self) {
        self.calls.push(DrawCall::BeginOutline);
    }

    fn end_outline_batch(&mut self) {
        self.calls.push(DrawCall::EndOutline);
    }

    fn begin_sprite_batch(&mut self) {
        self.calls.push(DrawCall::BeginSprite);
    }

    fn end_sprite_batch(&mut self) {
        self.calls.push(DrawCall::EndSprite);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba, thickness: f32) {
        self.calls.push(DrawCall::StrokeRect {
            x,
            y,
            w,
            h,
            color,
            thickness,
        });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba, thickness: f32) {
        self.calls.push(DrawCall::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            thickness,
        });
    }

    fn draw_sprite(&mut self, _texture: &Self::Texture, params: &SpriteParams) {
        self.calls.push(DrawCall::Sprite(*params));
    }
}
