// crates/engine_shared/src/lib.rs
//! Value types shared by every engine crate: math primitives, sprite-sheet
//! grid types and input intents.

pub mod components;
pub mod input_types;
pub mod math;

pub use components::{ClipRect, SheetGrid};
pub use input_types::{Intent, IntentQueue};
pub use math::{ColorRgba, Size, Vector2};
