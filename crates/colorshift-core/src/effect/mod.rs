pub mod info;
pub mod offsets;
pub mod params;
pub mod remap;

use tracing::debug;

use crate::consts::{SHIFT_MAX, SHIFT_MIN};
use crate::curve::{AnimationCurve, Keyframe};
use crate::error::Result;
use crate::frame::{Axis, RgbaFrame};

pub use info::{EffectInfo, Property, COLOR_SHIFT_INFO};
pub use offsets::{compute_offsets, fractional_offset, ChannelOffsets, PixelOffset};
pub use params::{ShiftParameter, ShiftParams};
pub use remap::{remap_channels, wrap};

/// Per-frame color channel displacement with wrap-around at the edges.
///
/// Holds no per-frame state, so one instance can serve many threads rendering
/// different frames at once.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorShift<C = Keyframe> {
    params: ShiftParams<C>,
}

impl<C: From<f64>> Default for ColorShift<C> {
    fn default() -> Self {
        Self::new(ShiftParams::default())
    }
}

impl<C> ColorShift<C> {
    pub fn new(params: ShiftParams<C>) -> Self {
        Self { params }
    }

    pub fn info(&self) -> EffectInfo {
        COLOR_SHIFT_INFO
    }

    pub fn params(&self) -> &ShiftParams<C> {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ShiftParams<C> {
        &mut self.params
    }

    pub fn into_params(self) -> ShiftParams<C> {
        self.params
    }
}

impl<C: AnimationCurve> ColorShift<C> {
    /// Pixel offsets this effect uses at `frame` for a `width` x `height` image.
    pub fn offsets_at(&self, frame: u64, width: usize, height: usize) -> Result<ChannelOffsets> {
        compute_offsets(&self.params, frame, width, height)
    }

    /// Produce the shifted image for `frame`. The source is left untouched.
    pub fn apply(&self, frame: u64, source: &RgbaFrame) -> Result<RgbaFrame> {
        source.validate()?;
        let offsets = self.offsets_at(frame, source.width(), source.height())?;
        if offsets.is_zero() {
            debug!(frame, "All offsets are zero, copying source");
            return Ok(source.clone());
        }
        remap_channels(source, &offsets)
    }

    /// Shift `image` for `frame`, replacing its pixels once the full pass is done.
    pub fn apply_in_place(&self, frame: u64, image: &mut RgbaFrame) -> Result<()> {
        let shifted = self.apply(frame, image)?;
        *image = shifted;
        Ok(())
    }

    /// Snapshot of every parameter at `frame`. When `dimensions` is given as
    /// `(width, height)`, each property also carries its resolved pixel offset.
    pub fn properties_at(&self, frame: u64, dimensions: Option<(usize, usize)>) -> Vec<Property> {
        self.params
            .iter()
            .map(|(param, curve)| {
                let value = curve.evaluate(frame);
                let pixels = dimensions
                    .filter(|_| value.is_finite())
                    .map(|(width, height)| match param.axis() {
                        Axis::X => fractional_offset(value, width),
                        Axis::Y => fractional_offset(value, height),
                    });
                Property {
                    key: param.key(),
                    label: param.label(),
                    value,
                    pixels,
                    min: SHIFT_MIN,
                    max: SHIFT_MAX,
                }
            })
            .collect()
    }
}
