use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::ColorShiftConfig;
use crate::consts::DEFAULT_FILE_PREFIX;
use crate::error::{ColorShiftError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Source still image, shifted once per output frame.
    pub input: PathBuf,
    /// Directory receiving `<file_prefix><frame:05>.png` files.
    pub output_dir: PathBuf,
    #[serde(default)]
    pub frames: FrameRangeConfig,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    #[serde(default)]
    pub effect: ColorShiftConfig,
}

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.png"),
            output_dir: PathBuf::from("frames"),
            frames: FrameRangeConfig::default(),
            file_prefix: default_file_prefix(),
            effect: ColorShiftConfig::default(),
        }
    }
}

impl RenderConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&text).map_err(|e| ColorShiftError::InvalidConfig(e.to_string()))?;
        config.frames.validate()?;
        config.effect.validate()?;
        Ok(config)
    }

    pub fn output_path(&self, frame: u64) -> PathBuf {
        self.output_dir
            .join(format!("{}{:05}.png", self.file_prefix, frame))
    }
}

/// Inclusive range of frame indices to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRangeConfig {
    pub start: u64,
    pub end: u64,
}

impl Default for FrameRangeConfig {
    fn default() -> Self {
        Self { start: 1, end: 30 }
    }
}

impl FrameRangeConfig {
    /// Reject backwards ranges and ranges too long to count in a `usize`.
    pub fn validate(&self) -> Result<()> {
        if self.end < self.start {
            return Err(ColorShiftError::InvalidConfig(format!(
                "frame range end {} is before start {}",
                self.end, self.start
            )));
        }
        if self.count().is_none() {
            return Err(ColorShiftError::InvalidConfig(format!(
                "frame range {}..={} is too long",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Frame indices in order, produced lazily.
    pub fn indices(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }

    /// Number of frames in the range. Backwards ranges are empty and
    /// uncountable ones saturate at `usize::MAX`.
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            self.count().unwrap_or(usize::MAX)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn count(&self) -> Option<usize> {
        let span = self.end.checked_sub(self.start)?.checked_add(1)?;
        usize::try_from(span).ok()
    }
}
