// crates/engine_core/src/components/sprite.rs
use std::path::Path;

use engine_shared::{Size, Vector2};
use tracing::{debug, warn};

use crate::assets::{DecodedImage, ImageLoader};
use crate::error::EngineResult;
use crate::renderer::{DrawParams, RenderSurface, Texture};

/// Either the decoded image or the texture made from it. Converting consumes
/// the image, so the two never coexist.
#[derive(Debug)]
enum SpriteSource {
    Image(DecodedImage),
    Texture(Texture),
}

/// A single-image visual.
#[derive(Debug)]
pub struct Sprite {
    source: SpriteSource,
}

impl Sprite {
    pub fn from_image(image: DecodedImage) -> Self {
        Self { source: SpriteSource::Image(image) }
    }

    /// Load and convert in one go. Nothing is kept on failure.
    pub fn load(
        path: &Path,
        loader: &dyn ImageLoader,
        surface: &mut dyn RenderSurface,
    ) -> EngineResult<Self> {
        let mut sprite = Self::from_image(loader.load(path)?);
        sprite.convert(surface)?;
        debug!(path = %path.display(), "sprite loaded");
        Ok(sprite)
    }

    /// Turn the held image into a texture and drop the image. No-op if
    /// already converted; on failure the image is kept for a retry.
    pub fn convert(&mut self, surface: &mut dyn RenderSurface) -> EngineResult<()> {
        if let SpriteSource::Image(image) = &self.source {
            let texture = surface.create_texture(image)?;
            self.source = SpriteSource::Texture(texture);
        }
        Ok(())
    }

    pub fn is_converted(&self) -> bool {
        matches!(self.source, SpriteSource::Texture(_))
    }

    pub fn texture(&self) -> Option<&Texture> {
        match &self.source {
            SpriteSource::Texture(texture) => Some(texture),
            SpriteSource::Image(_) => None,
        }
    }

    /// Pixel size of the underlying image or texture.
    pub fn natural_size(&self) -> Size {
        match &self.source {
            SpriteSource::Image(image) => Size::new(image.width as f32, image.height as f32),
            SpriteSource::Texture(texture) => texture.size(),
        }
    }

    /// Returns false if there is nothing drawable yet.
    pub fn draw(
        &self,
        surface: &mut dyn RenderSurface,
        dest: Vector2,
        dest_size: Size,
        rotation: f32,
    ) -> bool {
        let Some(texture) = self.texture() else {
            warn!("sprite drawn before conversion, skipping");
            return false;
        };
        surface.draw(texture, DrawParams { source: None, dest, dest_size, rotation });
        true
    }

    pub fn release(self, surface: &mut dyn RenderSurface) {
        if let SpriteSource::Texture(texture) = self.source {
            surface.release_texture(texture);
        }
    }
}
