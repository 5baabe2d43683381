// crates/engine_core/src/components/sprite_sheet.rs
use std::path::Path;

use engine_shared::{ClipRect, SheetGrid, Size, Vector2};
use tracing::{debug, warn};

use crate::assets::ImageLoader;
use crate::error::{EngineError, EngineResult};
use crate::renderer::{DrawParams, RenderSurface, Texture};

/// Cell geometry of a sheet, derived once from the sheet size and its grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetLayout {
    pub sprite_width: f32,
    pub sprite_height: f32,
    pub padding: f32,
    pub rows: u32,
    pub columns: u32,
}

impl SheetLayout {
    /// `sprite_width = (sheet_width - (columns - 1) * padding) / columns`,
    /// and the same for height over rows.
    pub fn compute(sheet: Size, grid: SheetGrid) -> EngineResult<Self> {
        if grid.rows == 0 || grid.columns == 0 {
            return Err(EngineError::InvalidLayout(format!(
                "grid must have at least one row and column, got {}x{}",
                grid.columns, grid.rows
            )));
        }
        if !(grid.padding >= 0.0) {
            return Err(EngineError::InvalidLayout(format!(
                "padding must be non-negative, got {}",
                grid.padding
            )));
        }

        let columns = grid.columns as f32;
        let rows = grid.rows as f32;
        let sprite_width = (sheet.width - (columns - 1.0) * grid.padding) / columns;
        let sprite_height = (sheet.height - (rows - 1.0) * grid.padding) / rows;

        if sprite_width <= 0.0 || sprite_height <= 0.0 {
            return Err(EngineError::InvalidLayout(format!(
                "{} sheet leaves no room for {}x{} cells with padding {}",
                sheet, grid.columns, grid.rows, grid.padding
            )));
        }

        Ok(Self {
            sprite_width,
            sprite_height,
            padding: grid.padding,
            rows: grid.rows,
            columns: grid.columns,
        })
    }

    pub fn cell_size(&self) -> Size {
        Size::new(self.sprite_width, self.sprite_height)
    }
}

/// A texture cut into a fixed grid, with one cell selected for drawing.
#[derive(Debug)]
pub struct SpriteSheet {
    texture: Texture,
    layout: SheetLayout,
    clip: ClipRect,
}

impl SpriteSheet {
    pub fn new(texture: Texture, grid: SheetGrid) -> EngineResult<Self> {
        let layout = SheetLayout::compute(texture.size(), grid)?;
        let mut sheet = Self { texture, layout, clip: ClipRect::default() };
        sheet.select_sprite(0, 0);
        Ok(sheet)
    }

    /// Load, validate the grid against the image, then convert. The layout is
    /// checked before any texture exists, so a bad grid never leaks one.
    pub fn load(
        path: &Path,
        grid: SheetGrid,
        loader: &dyn ImageLoader,
        surface: &mut dyn RenderSurface,
    ) -> EngineResult<Self> {
        let image = loader.load(path)?;
        let layout = SheetLayout::compute(Size::new(image.width as f32, image.height as f32), grid)?;
        let texture = surface.create_texture(&image)?;

        let mut sheet = Self { texture, layout, clip: ClipRect::default() };
        sheet.select_sprite(0, 0);
        debug!(path = %path.display(), columns = layout.columns, rows = layout.rows, "sprite sheet loaded");
        Ok(sheet)
    }

    /// Re-cut the sheet. On error the old layout stays.
    pub fn set_layout(&mut self, grid: SheetGrid) -> EngineResult<()> {
        self.layout = SheetLayout::compute(self.texture.size(), grid)?;
        self.select_sprite(0, 0);
        Ok(())
    }

    /// Point the clip at cell (`column`, `row`). Indices are not range-checked;
    /// a cell outside the grid clips outside the texture.
    pub fn select_sprite(&mut self, column: u32, row: u32) {
        let l = &self.layout;
        let cell = l.cell_size();
        self.clip = ClipRect::new(
            column as f32 * (cell.width + l.padding),
            row as f32 * (cell.height + l.padding),
            cell.width,
            cell.height,
        );
    }

    /// Pick the column from the clock: frame `floor(now / (1000 / fps)) mod
    /// frame_count`, wrapped onto the grid's columns. Same `now_ms`, same
    /// cell. Returns false (clip unchanged) if `fps` or `frame_count` is zero.
    pub fn select_sprite_by_time(&mut self, fps: u32, frame_count: u32, row: u32, now_ms: u64) -> bool {
        if fps == 0 || frame_count == 0 {
            warn!(fps, frame_count, "time-driven frame selection needs positive fps and frame count");
            return false;
        }

        // now / (1000 / fps) == now * fps / 1000, kept in integers so frame
        // boundaries land exactly.
        let elapsed_frames = (now_ms as u128 * fps as u128 / 1000) as u64;
        let index = elapsed_frames % frame_count as u64;
        let column = (index % self.layout.columns as u64) as u32;
        self.select_sprite(column, row);
        true
    }

    pub fn clip(&self) -> ClipRect {
        self.clip
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn draw(&self, surface: &mut dyn RenderSurface, dest: Vector2, dest_size: Size, rotation: f32) {
        surface.draw(
            &self.texture,
            DrawParams { source: Some(self.clip), dest, dest_size, rotation },
        );
    }

    pub fn release(self, surface: &mut dyn RenderSurface) {
        surface.release_texture(self.texture);
    }
}
