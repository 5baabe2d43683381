// crates/engine_core/src/assets.rs
//! Decoded-image handoff. Parsing image bytes is the loader's business; the
//! engine only ever sees the RGBA result or an error.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

/// Tightly packed RGBA8 pixels, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Fails if `pixels` does not hold exactly `width * height` RGBA texels.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> EngineResult<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(EngineError::TextureConversion(format!(
                "{}x{} image needs {} bytes, got {}",
                width,
                height,
                expected,
                pixels.len()
            )));
        }
        Ok(Self { width, height, pixels })
    }

    /// Single-color image, mostly for tests and placeholders.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self { width, height, pixels }
    }
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pixel dumps are useless in logs.
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

pub trait ImageLoader {
    fn load(&self, path: &Path) -> EngineResult<DecodedImage>;
}

/// Loader backed by a map of pre-decoded images.
#[derive(Debug, Default)]
pub struct MemoryImageLoader {
    images: HashMap<PathBuf, DecodedImage>,
}

impl MemoryImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, image: DecodedImage) {
        self.images.insert(path.into(), image);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.images.contains_key(path)
    }
}

impl ImageLoader for MemoryImageLoader {
    fn load(&self, path: &Path) -> EngineResult<DecodedImage> {
        self.images.get(path).cloned().ok_or_else(|| EngineError::ImageLoad {
            path: path.to_path_buf(),
            reason: "not registered".to_string(),
        })
    }
}
