// crates/engine_core/src/renderer/mod.rs
//! The seam between the scene and whatever actually puts pixels on screen.
//!
//! The engine never creates or destroys a surface. It receives one per frame
//! and only asks it to convert images, draw textures and present.

mod headless;

pub use headless::{DrawCall, HeadlessSurface};

use engine_shared::{ClipRect, Size, Vector2};

use crate::assets::DecodedImage;
use crate::error::EngineResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// A renderable texture owned by exactly one visual component.
///
/// Not `Clone`: handing a texture on means moving it.
#[derive(Debug, PartialEq, Eq)]
pub struct Texture {
    id: TextureId,
    width: u32,
    height: u32,
}

impl Texture {
    /// Backends mint textures; the engine only carries them around.
    pub fn new(id: TextureId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    pub fn id(&self) -> TextureId {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Where and how to draw one texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawParams {
    /// Sub-rectangle of the texture; `None` draws the whole thing.
    pub source: Option<ClipRect>,
    /// Top-left corner in screen space.
    pub dest: Vector2,
    pub dest_size: Size,
    /// Degrees, clockwise.
    pub rotation: f32,
}

pub trait RenderSurface {
    /// Current render target size in pixels.
    fn size(&self) -> Size;

    fn create_texture(&mut self, image: &DecodedImage) -> EngineResult<Texture>;

    fn release_texture(&mut self, texture: Texture);

    fn draw(&mut self, texture: &Texture, params: DrawParams);

    /// End the frame.
    fn present(&mut self);
}
