// crates/engine_core/src/lib.rs

// Leaf modules
pub mod assets;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod logging;
pub mod time;

// Scene model
pub mod camera;
pub mod components;
pub mod entities;
pub mod scene;

// Drawing + frame pacing
pub mod engine_loop;
pub mod renderer;

pub use camera::{Camera, CameraTarget};
pub use config::EngineConfig;
pub use engine_loop::{EngineLoop, FrameOutcome};
pub use error::{EngineError, EngineResult};
pub use scene::Scene;
