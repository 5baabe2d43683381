// crates/engine_core/src/components/mod.rs
//! Components owned by entities: transforms and visuals.

mod position;
mod rotation;
mod sprite;
mod sprite_sheet;
mod visual;

pub use position::Position;
pub use rotation::Rotation;
pub use sprite::Sprite;
pub use sprite_sheet::{SheetLayout, SpriteSheet};
pub use visual::Visual;
