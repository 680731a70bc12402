//! Structured-text persistence for shift parameters.
//!
//! The effect core never parses text. This module translates between the
//! persisted form (TOML, or JSON for hosts that store effects that way) and
//! a [`ShiftParams`] store of [`Keyframe`] curves.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::Keyframe;
use crate::effect::{ColorShift, ShiftParameter, ShiftParams};
use crate::error::{ColorShiftError, Result};

/// A persisted curve: either a bare number or a full keyframe table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurveSpec {
    Constant(f64),
    Keyframe(Keyframe),
}

impl CurveSpec {
    /// Collapse single-point tables to a bare number.
    pub fn from_keyframe(keyframe: &Keyframe) -> Self {
        match keyframe.as_constant() {
            Some(value) => Self::Constant(value),
            None => Self::Keyframe(keyframe.clone()),
        }
    }

    pub fn to_keyframe(&self) -> Keyframe {
        match self {
            Self::Constant(value) => Keyframe::constant(*value),
            Self::Keyframe(keyframe) => keyframe.clone(),
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Self::Constant(value) => value.is_finite(),
            Self::Keyframe(keyframe) => keyframe.is_finite(),
        }
    }
}

/// Persisted shift parameters. Absent keys leave the current curve untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorShiftConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red_x: Option<CurveSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red_y: Option<CurveSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green_x: Option<CurveSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green_y: Option<CurveSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue_x: Option<CurveSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue_y: Option<CurveSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_x: Option<CurveSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_y: Option<CurveSpec>,
}

/// Text format of a persisted config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.json` files are JSON, everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toml => write!(f, "TOML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

impl ColorShiftConfig {
    /// Full snapshot of a parameter store.
    pub fn from_params(params: &ShiftParams<Keyframe>) -> Self {
        let mut config = Self::default();
        for (param, keyframe) in params.iter() {
            *config.slot_mut(param) = Some(CurveSpec::from_keyframe(keyframe));
        }
        config
    }

    pub fn get(&self, param: ShiftParameter) -> Option<&CurveSpec> {
        match param {
            ShiftParameter::RedX => self.red_x.as_ref(),
            ShiftParameter::RedY => self.red_y.as_ref(),
            ShiftParameter::GreenX => self.green_x.as_ref(),
            ShiftParameter::GreenY => self.green_y.as_ref(),
            ShiftParameter::BlueX => self.blue_x.as_ref(),
            ShiftParameter::BlueY => self.blue_y.as_ref(),
            ShiftParameter::AlphaX => self.alpha_x.as_ref(),
            ShiftParameter::AlphaY => self.alpha_y.as_ref(),
        }
    }

    pub fn set(&mut self, param: ShiftParameter, spec: CurveSpec) {
        *self.slot_mut(param) = Some(spec);
    }

    /// Take every curve present in `other`, keeping ours where it is silent.
    pub fn merge(&mut self, other: &ColorShiftConfig) {
        for param in ShiftParameter::ALL {
            if let Some(spec) = other.get(param) {
                self.set(param, spec.clone());
            }
        }
    }

    fn slot_mut(&mut self, param: ShiftParameter) -> &mut Option<CurveSpec> {
        match param {
            ShiftParameter::RedX => &mut self.red_x,
            ShiftParameter::RedY => &mut self.red_y,
            ShiftParameter::GreenX => &mut self.green_x,
            ShiftParameter::GreenY => &mut self.green_y,
            ShiftParameter::BlueX => &mut self.blue_x,
            ShiftParameter::BlueY => &mut self.blue_y,
            ShiftParameter::AlphaX => &mut self.alpha_x,
            ShiftParameter::AlphaY => &mut self.alpha_y,
        }
    }

    /// Reject non-finite values and handles.
    pub fn validate(&self) -> Result<()> {
        for param in ShiftParameter::ALL {
            if let Some(spec) = self.get(param) {
                if !spec.is_finite() {
                    return Err(ColorShiftError::InvalidConfig(format!(
                        "{} contains a non-finite value",
                        param.key()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Overwrite the curves named in this config. Nothing is changed if
    /// validation fails.
    pub fn apply_to(&self, params: &mut ShiftParams<Keyframe>) -> Result<()> {
        self.validate()?;
        for param in ShiftParameter::ALL {
            if let Some(spec) = self.get(param) {
                params.set(param, spec.to_keyframe());
            }
        }
        Ok(())
    }

    /// Defaults overlaid with the curves named in this config.
    pub fn to_params(&self) -> Result<ShiftParams<Keyframe>> {
        let mut params = ShiftParams::default();
        self.apply_to(&mut params)?;
        Ok(params)
    }

    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self> {
        let config: Self = match format {
            ConfigFormat::Toml => {
                toml::from_str(text).map_err(|e| ColorShiftError::InvalidConfig(e.to_string()))?
            }
            ConfigFormat::Json => serde_json::from_str(text)
                .map_err(|e| ColorShiftError::InvalidConfig(e.to_string()))?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_text(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ColorShiftError::Serialize(e.to_string()))
            }
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ColorShiftError::Serialize(e.to_string())),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path);
        debug!(path = %path.display(), %format, "Loading shift config");
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text, format)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_text(ConfigFormat::from_path(path))?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

impl ColorShift<Keyframe> {
    pub fn from_config(config: &ColorShiftConfig) -> Result<Self> {
        Ok(Self::new(config.to_params()?))
    }

    /// Current parameters in persisted form.
    pub fn config(&self) -> ColorShiftConfig {
        ColorShiftConfig::from_params(self.params())
    }

    /// Merge persisted parameters into this effect.
    pub fn set_config_str(&mut self, text: &str, format: ConfigFormat) -> Result<()> {
        let config = ColorShiftConfig::parse(text, format)?;
        config.apply_to(self.params_mut())
    }
}
