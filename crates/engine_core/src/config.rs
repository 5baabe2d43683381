// crates/engine_core/src/config.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use engine_shared::Size;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::EngineResult;

/// Centralized engine settings, read from a TOML file.
/// Any field missing from the file falls back to `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Size of the render target; the screen center is half of this.
    pub render_target: Size,
    /// Frame pacing target. Zero disables pacing.
    pub target_fps: u32,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Directory image paths are resolved against.
    pub asset_root: PathBuf,
    /// How many frames the sandbox runs before exiting on its own.
    pub frames: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            render_target: Size::new(800.0, 600.0),
            target_fps: 60,
            log_filter: "info".to_string(),
            asset_root: PathBuf::from("assets"),
            frames: 600,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> EngineResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Wall-clock budget for one frame.
    pub fn frame_budget(&self) -> Duration {
        if self.target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(1_000_000_000 / self.target_fps as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_take_defaults() {
        let config = EngineConfig::from_toml_str("target_fps = 30").unwrap();
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.render_target, Size::new(800.0, 600.0));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn nested_render_target_parses() {
        let text = r#"
            log_filter = "engine_core=debug"
            [render_target]
            width = 1280.0
            height = 720.0
        "#;
        let config = EngineConfig::from_toml_str(text).unwrap();
        assert_eq!(config.render_target, Size::new(1280.0, 720.0));
        assert_eq!(config.log_filter, "engine_core=debug");
    }

    #[test]
    fn load_reads_file_and_reports_bad_toml() {
        let mut good = tempfile::NamedTempFile::new().unwrap();
        writeln!(good, "frames = 3").unwrap();
        assert_eq!(EngineConfig::load(good.path()).unwrap().frames, 3);

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        writeln!(bad, "frames = \"many\"").unwrap();
        assert!(matches!(
            EngineConfig::load(bad.path()),
            Err(crate::EngineError::Config(_))
        ));
    }

    #[test]
    fn frame_budget_follows_fps() {
        let config = EngineConfig { target_fps: 50, ..Default::default() };
        assert_eq!(config.frame_budget(), Duration::from_millis(20));
        let unpaced = EngineConfig { target_fps: 0, ..Default::default() };
        assert_eq!(unpaced.frame_budget(), Duration::ZERO);
    }
}
