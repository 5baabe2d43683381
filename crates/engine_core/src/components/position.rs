// crates/engine_core/src/components/position.rs
use engine_shared::Vector2;

use crate::capabilities::{Describe, Movable};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    coords: Vector2,
}

impl Position {
    pub const ORIGIN: Self = Self { coords: Vector2::ZERO };

    pub fn new(x: f32, y: f32) -> Self {
        Self { coords: Vector2::new(x, y) }
    }

    pub fn x(&self) -> f32 {
        self.coords.x
    }

    pub fn y(&self) -> f32 {
        self.coords.y
    }

    pub fn as_vec2(&self) -> Vector2 {
        self.coords
    }
}

impl From<Vector2> for Position {
    fn from(coords: Vector2) -> Self {
        Self { coords }
    }
}

impl Movable for Position {
    fn move_by(&mut self, offset: Vector2) {
        self.coords += offset;
    }

    fn set_position(&mut self, position: Vector2) {
        self.coords = position;
    }

    fn current_position(&self) -> Vector2 {
        self.coords
    }
}

impl Describe for Position {
    fn describe(&self) -> String {
        format!("Position{}", self.coords.describe())
    }
}
