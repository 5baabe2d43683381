// crates/engine_core/src/error.rs
use std::path::PathBuf;

use engine_ecs::Entity;
use thiserror::Error;

/// Every recoverable failure the engine reports. None of these abort a frame;
/// the operation that produced one leaves prior state untouched.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to load image {path:?}: {reason}")]
    ImageLoad { path: PathBuf, reason: String },

    #[error("texture conversion failed: {0}")]
    TextureConversion(String),

    #[error("invalid sprite sheet layout: {0}")]
    InvalidLayout(String),

    #[error("camera has no target")]
    MissingTarget,

    #[error("camera target {0} no longer exists")]
    StaleTarget(Entity),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
