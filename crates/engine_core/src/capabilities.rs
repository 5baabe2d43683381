// crates/engine_core/src/capabilities.rs
//! Narrow behavioral contracts. A type implements whichever subset applies;
//! none of them carries state, so combining several never creates a diamond.

use engine_ecs::Entity;
use engine_shared::{Size, Vector2};

use crate::components::Position;

pub trait Movable {
    /// Relative move.
    fn move_by(&mut self, offset: Vector2);
    fn set_position(&mut self, position: Vector2);
    fn current_position(&self) -> Vector2;
}

pub trait Rotatable {
    /// Absolute angle in degrees.
    fn set_rotation(&mut self, degrees: f32);
    /// Relative turn in degrees.
    fn rotate(&mut self, delta: f32);
    fn rotation(&self) -> f32;
}

pub trait Sizable {
    fn scale(&mut self, factor: f32);
    fn size(&self) -> Size;
}

/// What a collidable learns about the thing it touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub other: Entity,
    pub other_hitbox: Vector2,
}

/// Collision *notification*. Deciding that two things intersect is somebody
/// else's job; this only delivers the result.
pub trait Collidable {
    fn collide_with(&mut self, contact: &Contact);
    fn hitbox_position(&self) -> &Position;
}

pub trait Healthable {
    fn heal(&mut self, amount: u32);
    fn take_damage(&mut self, amount: u32);
    fn is_alive(&self) -> bool;
    fn health(&self) -> u32;
    fn max_health(&self) -> u32;
}

/// Diagnostic text for logs and inspectors.
pub trait Describe {
    fn describe(&self) -> String;
}

impl Describe for Vector2 {
    fn describe(&self) -> String {
        format!("({}, {})", self.x, self.y)
    }
}

impl Describe for Size {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Describe for engine_shared::ColorRgba {
    fn describe(&self) -> String {
        self.to_string()
    }
}
