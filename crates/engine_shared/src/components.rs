// crates/engine_shared/src/components.rs
use serde::{Deserialize, Serialize};

/// Sub-region of a texture, in texels.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ClipRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Caller-supplied shape of a sprite sheet: how many cells and the gap
/// between them. Cell dimensions are derived from the texture size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SheetGrid {
    pub rows: u32,
    pub columns: u32,
    #[serde(default)]
    pub padding: f32,
}

impl SheetGrid {
    pub const fn new(rows: u32, columns: u32, padding: f32) -> Self {
        Self { rows, columns, padding }
    }
}

impl Default for SheetGrid {
    fn default() -> Self {
        Self { rows: 1, columns: 1, padding: 0.0 }
    }
}
