// crates/engine_core/src/entities/actor.rs
use std::path::Path;

use engine_shared::{SheetGrid, Size, Vector2};
use tracing::{debug, warn};

use super::GameObject;
use crate::assets::ImageLoader;
use crate::capabilities::{Describe, Movable, Rotatable, Sizable};
use crate::components::{Sprite, SpriteSheet, Visual};
use crate::error::EngineResult;
use crate::renderer::RenderSurface;

/// Time-driven frame selection settings for a sprite sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animation {
    pub fps: u32,
    pub frame_count: u32,
    pub row: u32,
}

/// A game object that can be seen.
#[derive(Debug, Default)]
pub struct Actor {
    object: GameObject,
    visual: Visual,
    animation: Option<Animation>,
}

impl Actor {
    pub fn new(object: GameObject) -> Self {
        Self { object, visual: Visual::None, animation: None }
    }

    pub fn with_visual(object: GameObject, visual: Visual) -> Self {
        Self { object, visual, animation: None }
    }

    pub fn object(&self) -> &GameObject {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut GameObject {
        &mut self.object
    }

    pub fn visual(&self) -> &Visual {
        &self.visual
    }

    pub fn animation(&self) -> Option<Animation> {
        self.animation
    }

    /// Swap in a new visual and give the old one's texture back.
    pub fn set_visual(&mut self, visual: Visual, surface: &mut dyn RenderSurface) {
        let old = std::mem::replace(&mut self.visual, visual);
        self.animation = None;
        old.release(surface);
    }

    /// Replace the visual with a single-image sprite. On failure the current
    /// visual is kept and the error is logged and returned.
    pub fn change_sprite(
        &mut self,
        path: &Path,
        loader: &dyn ImageLoader,
        surface: &mut dyn RenderSurface,
    ) -> EngineResult<()> {
        let sprite = Sprite::load(path, loader, surface).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "change_sprite failed, keeping current visual");
        })?;
        self.set_visual(Visual::Sprite(sprite), surface);
        Ok(())
    }

    /// Replace the visual with a sprite sheet. Same failure policy as
    /// `change_sprite`.
    pub fn change_animation(
        &mut self,
        path: &Path,
        grid: SheetGrid,
        loader: &dyn ImageLoader,
        surface: &mut dyn RenderSurface,
    ) -> EngineResult<()> {
        let sheet = SpriteSheet::load(path, grid, loader, surface).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "change_animation failed, keeping current visual");
        })?;
        self.set_visual(Visual::Sheet(sheet), surface);
        Ok(())
    }

    /// Show a specific sheet cell. Stops any running animation. Returns false
    /// if the visual is not a sheet.
    pub fn set_animation_frame(&mut self, column: u32, row: u32) -> bool {
        let Some(sheet) = self.visual.as_sheet_mut() else {
            warn!(visual = self.visual.kind(), "set_animation_frame needs a sprite sheet");
            return false;
        };
        sheet.select_sprite(column, row);
        self.animation = None;
        true
    }

    /// Start cycling frames by time. Rejected without a sheet or with a zero
    /// rate/count.
    pub fn play_animation(&mut self, fps: u32, frame_count: u32, row: u32) -> bool {
        if self.visual.as_sheet().is_none() {
            warn!(visual = self.visual.kind(), "play_animation needs a sprite sheet");
            return false;
        }
        if fps == 0 || frame_count == 0 {
            warn!(fps, frame_count, "play_animation needs positive fps and frame count");
            return false;
        }
        self.animation = Some(Animation { fps, frame_count, row });
        debug!(fps, frame_count, row, "animation started");
        true
    }

    pub fn stop_animation(&mut self) {
        self.animation = None;
    }

    /// Advance a running animation to the frame for `now_ms`.
    pub fn animate(&mut self, now_ms: u64) {
        if let (Some(anim), Some(sheet)) = (self.animation, self.visual.as_sheet_mut()) {
            sheet.select_sprite_by_time(anim.fps, anim.frame_count, anim.row, now_ms);
        }
    }

    /// Draw at `screen`, sized by the object's size.
    pub fn render(&self, surface: &mut dyn RenderSurface, screen: Vector2) -> bool {
        self.visual.draw(surface, screen, self.object.size(), self.object.rotation())
    }

    pub fn release(self, surface: &mut dyn RenderSurface) {
        self.visual.release(surface);
    }
}

impl Movable for Actor {
    fn move_by(&mut self, offset: Vector2) {
        self.object.move_by(offset);
    }

    fn set_position(&mut self, position: Vector2) {
        self.object.set_position(position);
    }

    fn current_position(&self) -> Vector2 {
        self.object.current_position()
    }
}

impl Rotatable for Actor {
    fn set_rotation(&mut self, degrees: f32) {
        self.object.set_rotation(degrees);
    }

    fn rotate(&mut self, delta: f32) {
        self.object.rotate(delta);
    }

    fn rotation(&self) -> f32 {
        self.object.rotation()
    }
}

impl Sizable for Actor {
    fn scale(&mut self, factor: f32) {
        self.object.scale(factor);
    }

    fn size(&self) -> Size {
        self.object.size()
    }
}

impl Describe for Actor {
    fn describe(&self) -> String {
        let mut text = format!("Actor[{}] {}", self.visual.kind(), self.object.describe());
        if let Some(anim) = self.animation {
            text.push_str(&format!(" animating row {} @ {}fps", anim.row, anim.fps));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{DecodedImage, MemoryImageLoader};
    use crate::error::EngineError;
    use crate::renderer::HeadlessSurface;
    use engine_shared::ClipRect;

    fn fixtures() -> (MemoryImageLoader, HeadlessSurface) {
        let mut loader = MemoryImageLoader::new();
        loader.insert("idle.png", DecodedImage::solid(16, 16, [255; 4]));
        loader.insert("walk.png", DecodedImage::solid(64, 32, [128; 4]));
        (loader, HeadlessSurface::new(Size::new(800.0, 600.0)))
    }

    fn actor() -> Actor {
        Actor::new(GameObject::new(Vector2::new(5.0, 5.0), Size::new(16.0, 16.0)))
    }

    #[test]
    fn change_sprite_then_render_draws_whole_texture() {
        let (loader, mut surface) = fixtures();
        let mut actor = actor();
        assert!(!actor.render(&mut surface, Vector2::ZERO));

        actor.change_sprite(Path::new("idle.png"), &loader, &mut surface).unwrap();
        assert_eq!(actor.visual().kind(), "sprite");
        assert!(actor.render(&mut surface, Vector2::new(1.0, 2.0)));

        let call = surface.pending_draws()[0];
        assert_eq!(call.params.source, None);
        assert_eq!(call.params.dest, Vector2::new(1.0, 2.0));
        assert_eq!(call.params.dest_size, Size::new(16.0, 16.0));
    }

    #[test]
    fn failed_change_keeps_previous_visual() {
        let (loader, mut surface) = fixtures();
        let mut actor = actor();
        actor
            .change_animation(Path::new("walk.png"), SheetGrid::new(2, 4, 0.0), &loader, &mut surface)
            .unwrap();
        actor.set_animation_frame(1, 1);

        let err = actor.change_sprite(Path::new("missing.png"), &loader, &mut surface);
        assert!(matches!(err, Err(EngineError::ImageLoad { .. })));
        let bad_grid =
            actor.change_animation(Path::new("walk.png"), SheetGrid::new(0, 4, 0.0), &loader, &mut surface);
        assert!(matches!(bad_grid, Err(EngineError::InvalidLayout(_))));

        let sheet = actor.visual().as_sheet().expect("sheet kept");
        assert_eq!(sheet.clip(), ClipRect::new(16.0, 16.0, 16.0, 16.0));
        assert_eq!(surface.live_texture_count(), 1);
    }

    #[test]
    fn replacing_visual_releases_old_texture() {
        let (loader, mut surface) = fixtures();
        let mut actor = actor();
        actor.change_sprite(Path::new("idle.png"), &loader, &mut surface).unwrap();
        actor
            .change_animation(Path::new("walk.png"), SheetGrid::new(2, 4, 0.0), &loader, &mut surface)
            .unwrap();
        assert_eq!(surface.live_texture_count(), 1);
    }

    #[test]
    fn animation_requires_sheet_and_follows_clock() {
        let (loader, mut surface) = fixtures();
        let mut actor = actor();
        assert!(!actor.play_animation(4, 4, 0));
        assert!(!actor.set_animation_frame(0, 0));

        actor
            .change_animation(Path::new("walk.png"), SheetGrid::new(2, 4, 0.0), &loader, &mut surface)
            .unwrap();
        assert!(!actor.play_animation(0, 4, 0));
        assert!(actor.play_animation(4, 4, 1));

        actor.animate(750); // frame 3
        let clip = actor.visual().as_sheet().unwrap().clip();
        assert_eq!(clip, ClipRect::new(48.0, 16.0, 16.0, 16.0));

        // An explicit pick stops the clock from overriding it.
        actor.set_animation_frame(0, 0);
        actor.animate(250);
        assert_eq!(actor.visual().as_sheet().unwrap().clip().x, 0.0);
        assert_eq!(actor.animation(), None);
    }
}
