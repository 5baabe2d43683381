// crates/sandbox/src/loader.rs
use std::path::{Path, PathBuf};

use engine_core::assets::{DecodedImage, ImageLoader, MemoryImageLoader};
use engine_core::{EngineError, EngineResult};
use image::ImageReader;
use tracing::{debug, warn};

/// Decodes images from disk, relative to `root`.
pub struct FileImageLoader {
    root: PathBuf,
}

impl FileImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> EngineResult<DecodedImage> {
        let resolved = self.resolve(path);
        let fail = |reason: String| EngineError::ImageLoad { path: resolved.clone(), reason };

        let reader = ImageReader::open(&resolved).map_err(|e| fail(format!("open failed: {e}")))?;
        let decoded = reader.decode().map_err(|e| fail(format!("decode failed: {e}")))?;
        let rgba = decoded.to_rgba8();
        debug!(path = %resolved.display(), width = rgba.width(), height = rgba.height(), "image decoded");

        DecodedImage::new(rgba.width(), rgba.height(), rgba.into_raw())
    }
}

/// Disk first, then built-in placeholders. Lets the sandbox run without an
/// asset directory.
pub struct FallbackLoader {
    files: FileImageLoader,
    placeholders: MemoryImageLoader,
}

impl FallbackLoader {
    pub fn new(files: FileImageLoader, placeholders: MemoryImageLoader) -> Self {
        Self { files, placeholders }
    }
}

impl ImageLoader for FallbackLoader {
    fn load(&self, path: &Path) -> EngineResult<DecodedImage> {
        match self.files.load(path) {
            Ok(image) => Ok(image),
            Err(err) if self.placeholders.contains(path) => {
                warn!(path = %path.display(), error = %err, "using placeholder image");
                self.placeholders.load(path)
            }
            Err(err) => Err(err),
        }
    }
}

/// Placeholder sheet: `columns` x `rows` cells of `cell` px, each column a
/// different shade so frame changes are visible in a dump.
pub fn striped_sheet(columns: u32, rows: u32, cell: u32) -> DecodedImage {
    let (width, height) = (columns * cell, rows * cell);
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let shade = ((x / cell) * 255 / columns.max(1)) as u8;
            let row_tint = ((y / cell) * 80) as u8;
            pixels.extend_from_slice(&[shade, row_tint, 255 - shade, 255]);
        }
    }
    DecodedImage { width, height, pixels }
}
