// crates/engine_core/src/renderer/headless.rs
use std::collections::HashSet;

use engine_shared::Size;
use tracing::{debug, trace};

use super::{DrawParams, RenderSurface, Texture, TextureId};
use crate::assets::DecodedImage;
use crate::error::{EngineError, EngineResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub texture: TextureId,
    pub params: DrawParams,
}

/// A surface with no window behind it. Records every draw so frames can be
/// inspected after the fact.
pub struct HeadlessSurface {
    size: Size,
    next_texture: u64,
    live_textures: HashSet<TextureId>,
    current_frame: Vec<DrawCall>,
    last_frame: Vec<DrawCall>,
    frames_presented: u64,
    /// Largest texture edge accepted, like a GPU's max texture dimension.
    max_texture_dim: u32,
}

impl HeadlessSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            next_texture: 1,
            live_textures: HashSet::new(),
            current_frame: Vec::new(),
            last_frame: Vec::new(),
            frames_presented: 0,
            max_texture_dim: 8192,
        }
    }

    pub fn with_max_texture_dim(mut self, max: u32) -> Self {
        self.max_texture_dim = max;
        self
    }

    /// Draws issued since the last `present`.
    pub fn pending_draws(&self) -> &[DrawCall] {
        &self.current_frame
    }

    /// Draws of the most recently presented frame.
    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn live_texture_count(&self) -> usize {
        self.live_textures.len()
    }

    pub fn is_live(&self, id: TextureId) -> bool {
        self.live_textures.contains(&id)
    }
}

impl RenderSurface for HeadlessSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn create_texture(&mut self, image: &DecodedImage) -> EngineResult<Texture> {
        if image.width == 0 || image.height == 0 {
            return Err(EngineError::TextureConversion("empty image".to_string()));
        }
        if image.width > self.max_texture_dim || image.height > self.max_texture_dim {
            return Err(EngineError::TextureConversion(format!(
                "{}x{} exceeds max texture dimension {}",
                image.width, image.height, self.max_texture_dim
            )));
        }

        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        self.live_textures.insert(id);
        debug!(texture = id.0, width = image.width, height = image.height, "texture created");
        Ok(Texture::new(id, image.width, image.height))
    }

    fn release_texture(&mut self, texture: Texture) {
        if self.live_textures.remove(&texture.id()) {
            debug!(texture = texture.id().0, "texture released");
        }
    }

    fn draw(&mut self, texture: &Texture, params: DrawParams) {
        trace!(texture = texture.id().0, ?params, "draw");
        self.current_frame.push(DrawCall { texture: texture.id(), params });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.current_frame);
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_shared::Vector2;

    #[test]
    fn present_rotates_frame_buffers() {
        let mut surface = HeadlessSurface::new(Size::new(64.0, 64.0));
        let texture = surface
            .create_texture(&DecodedImage::solid(2, 2, [0, 0, 0, 255]))
            .unwrap();

        let params = DrawParams {
            source: None,
            dest: Vector2::new(1.0, 2.0),
            dest_size: Size::new(2.0, 2.0),
            rotation: 0.0,
        };
        surface.draw(&texture, params);
        assert_eq!(surface.pending_draws().len(), 1);

        surface.present();
        assert!(surface.pending_draws().is_empty());
        assert_eq!(surface.last_frame(), &[DrawCall { texture: texture.id(), params }]);
        assert_eq!(surface.frames_presented(), 1);
    }

    #[test]
    fn oversized_and_empty_images_fail_conversion() {
        let mut surface = HeadlessSurface::new(Size::new(64.0, 64.0)).with_max_texture_dim(4);
        assert!(surface.create_texture(&DecodedImage::solid(8, 1, [0; 4])).is_err());
        assert!(surface.create_texture(&DecodedImage::solid(0, 1, [0; 4])).is_err());
        assert_eq!(surface.live_texture_count(), 0);
    }

    #[test]
    fn release_forgets_texture() {
        let mut surface = HeadlessSurface::new(Size::new(64.0, 64.0));
        let texture = surface.create_texture(&DecodedImage::solid(1, 1, [0; 4])).unwrap();
        let id = texture.id();
        assert!(surface.is_live(id));
        surface.release_texture(texture);
        assert!(!surface.is_live(id));
    }
}
