// crates/engine_ecs/src/lib.rs
//! Generational entity handles and the table that owns entity values.

mod entity;
mod storage;
mod world;

pub use entity::Entity;
pub use storage::SparseSet;
pub use world::EntityTable;
