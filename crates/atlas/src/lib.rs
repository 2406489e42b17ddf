//! Sprite atlas index - name to source-rectangle lookup
//!
//! A sprite atlas is one shared image plus an index describing named
//! sub-regions usable as individual icons. The index is parsed once from
//! the TexturePacker-style JSON that ships next to the spritesheet:
//!
//! ```json
//! {
//!   "frames": {
//!     "apple": { "frame": { "x": 0, "y": 0, "w": 64, "h": 64 } },
//!     "milk":  { "frame": { "x": 64, "y": 0, "w": 64, "h": 64 } }
//!   }
//! }
//! ```
//!
//! Lookups after that are map hits; a missing sprite name is a hard error
//! carrying the name, never a silent no-draw.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Source rectangle of one sprite within the shared atlas image, in
/// source-image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FrameRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl FrameRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Debug, Deserialize)]
struct FrameEntry {
    frame: FrameRect,
}

#[derive(Debug, Deserialize)]
struct AtlasFile {
    frames: HashMap<String, FrameEntry>,
}

/// Read-only lookup from sprite name to its source rectangle.
#[derive(Debug, Clone, Default)]
pub struct SpriteAtlasIndex {
    frames: HashMap<String, FrameRect>,
}

impl SpriteAtlasIndex {
    /// Empty index; frames can be added with [`SpriteAtlasIndex::insert`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TexturePacker-style JSON document into an index.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: AtlasFile =
            serde_json::from_str(json).context("failed to parse sprite atlas JSON")?;
        let frames = file
            .frames
            .into_iter()
            .map(|(name, entry)| (name, entry.frame))
            .collect();
        Ok(Self { frames })
    }

    /// Register a frame, replacing any previous one under the same name.
    pub fn insert(&mut self, name: impl Into<String>, rect: FrameRect) {
        self.frames.insert(name.into(), rect);
    }

    /// Source rectangle for a sprite name.
    ///
    /// Errors if the name is absent from the index.
    pub fn frame_rect(&self, name: &str) -> Result<FrameRect> {
        self.frames
            .get(name)
            .copied()
            .with_context(|| format!("sprite '{name}' not found in atlas index"))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.frames.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
