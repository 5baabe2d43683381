// crates/engine_core/src/entities/game_object.rs
use engine_shared::{Size, Vector2};

use crate::capabilities::{Describe, Movable, Rotatable, Sizable};
use crate::components::{Position, Rotation};
use crate::renderer::RenderSurface;

/// Anything placed in the world: where it is, how it is turned, how big it is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GameObject {
    position: Position,
    rotation: Rotation,
    size: Size,
}

impl GameObject {
    pub fn new(position: Vector2, size: Size) -> Self {
        Self {
            position: position.into(),
            rotation: Rotation::default(),
            size,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// A bare object has nothing to draw.
    pub fn render(&self, _surface: &mut dyn RenderSurface, _screen: Vector2) -> bool {
        false
    }
}

impl Movable for GameObject {
    fn move_by(&mut self, offset: Vector2) {
        self.position.move_by(offset);
    }

    fn set_position(&mut self, position: Vector2) {
        self.position.set_position(position);
    }

    fn current_position(&self) -> Vector2 {
        self.position.current_position()
    }
}

impl Rotatable for GameObject {
    fn set_rotation(&mut self, degrees: f32) {
        self.rotation.set_rotation(degrees);
    }

    fn rotate(&mut self, delta: f32) {
        self.rotation.rotate(delta);
    }

    fn rotation(&self) -> f32 {
        self.rotation.rotation()
    }
}

impl Sizable for GameObject {
    fn scale(&mut self, factor: f32) {
        self.size.scale(factor);
    }

    fn size(&self) -> Size {
        self.size
    }
}

impl Describe for GameObject {
    fn describe(&self) -> String {
        format!(
            "GameObject at {} size {} rotation {}",
            self.position.as_vec2().describe(),
            self.size,
            self.rotation.degrees()
        )
    }
}
