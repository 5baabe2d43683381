// crates/engine_core/src/components/visual.rs
use engine_shared::{Size, Vector2};

use super::{Sprite, SpriteSheet};
use crate::renderer::RenderSurface;

/// The one visual an actor may have. Being an enum, "sprite and sheet at the
/// same time" cannot be represented.
#[derive(Debug, Default)]
pub enum Visual {
    #[default]
    None,
    Sprite(Sprite),
    Sheet(SpriteSheet),
}

impl Visual {
    pub fn kind(&self) -> &'static str {
        match self {
            Visual::None => "none",
            Visual::Sprite(_) => "sprite",
            Visual::Sheet(_) => "sheet",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Visual::None)
    }

    pub fn as_sheet(&self) -> Option<&SpriteSheet> {
        match self {
            Visual::Sheet(sheet) => Some(sheet),
            _ => None,
        }
    }

    pub fn as_sheet_mut(&mut self) -> Option<&mut SpriteSheet> {
        match self {
            Visual::Sheet(sheet) => Some(sheet),
            _ => None,
        }
    }

    /// Returns true if anything was submitted to the surface.
    pub fn draw(&self, surface: &mut dyn RenderSurface, dest: Vector2, dest_size: Size, rotation: f32) -> bool {
        match self {
            Visual::None => false,
            Visual::Sprite(sprite) => sprite.draw(surface, dest, dest_size, rotation),
            Visual::Sheet(sheet) => {
                sheet.draw(surface, dest, dest_size, rotation);
                true
            }
        }
    }

    /// Hand any texture back to the surface that made it.
    pub fn release(self, surface: &mut dyn RenderSurface) {
        match self {
            Visual::None => {}
            Visual::Sprite(sprite) => sprite.release(surface),
            Visual::Sheet(sheet) => sheet.release(surface),
        }
    }
}
