pub mod apply;
pub mod config;
pub mod info;
pub mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colorshift_core::config::{ColorShiftConfig, CurveSpec};
use colorshift_core::effect::{ColorShift, ShiftParameter};
use tracing::debug;

/// Shift parameters shared by every command that builds an effect.
#[derive(Args, Clone, Debug, Default)]
pub struct ShiftArgs {
    /// Effect config file (TOML, or JSON with a .json extension)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Red horizontal shift, fraction of width (-1.0 to 1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub red_x: Option<f64>,

    /// Red vertical shift, fraction of height (-1.0 to 1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub red_y: Option<f64>,

    /// Green horizontal shift, fraction of width (-1.0 to 1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub green_x: Option<f64>,

    /// Green vertical shift, fraction of height (-1.0 to 1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub green_y: Option<f64>,

    /// Blue horizontal shift, fraction of width (-1.0 to 1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub blue_x: Option<f64>,

    /// Blue vertical shift, fraction of height (-1.0 to 1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub blue_y: Option<f64>,

    /// Alpha horizontal shift, fraction of width (-1.0 to 1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub alpha_x: Option<f64>,

    /// Alpha vertical shift, fraction of height (-1.0 to 1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub alpha_y: Option<f64>,
}

impl ShiftArgs {
    fn override_for(&self, param: ShiftParameter) -> Option<f64> {
        match param {
            ShiftParameter::RedX => self.red_x,
            ShiftParameter::RedY => self.red_y,
            ShiftParameter::GreenX => self.green_x,
            ShiftParameter::GreenY => self.green_y,
            ShiftParameter::BlueX => self.blue_x,
            ShiftParameter::BlueY => self.blue_y,
            ShiftParameter::AlphaX => self.alpha_x,
            ShiftParameter::AlphaY => self.alpha_y,
        }
    }

    /// Start from `base`, merge the config file, then the command-line values.
    pub fn merge_into(&self, base: &ColorShiftConfig) -> Result<ColorShiftConfig> {
        let mut config = base.clone();
        if let Some(ref path) = self.config {
            let file = ColorShiftConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            config.merge(&file);
            debug!(path = %path.display(), "Merged shift config file");
        }
        for param in ShiftParameter::ALL {
            if let Some(value) = self.override_for(param) {
                debug!(parameter = param.key(), value, "Command-line shift override");
                config.set(param, CurveSpec::Constant(value));
            }
        }
        Ok(config)
    }

    pub fn build_effect(&self) -> Result<ColorShift> {
        let config = self.merge_into(&ColorShiftConfig::default())?;
        ColorShift::from_config(&config).context("Invalid shift parameters")
    }
}
