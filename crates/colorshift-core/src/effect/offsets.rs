use tracing::debug;

use crate::curve::AnimationCurve;
use crate::error::{ColorShiftError, Result};
use crate::frame::{Axis, Channel};

use super::params::ShiftParams;

/// Integer displacement of one channel, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelOffset {
    pub dx: i64,
    pub dy: i64,
}

impl PixelOffset {
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }
}

/// Per-channel pixel offsets for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelOffsets {
    pub red: PixelOffset,
    pub green: PixelOffset,
    pub blue: PixelOffset,
    pub alpha: PixelOffset,
}

impl ChannelOffsets {
    /// Build from `[Rx, Ry, Gx, Gy, Bx, By, Ax, Ay]`.
    pub fn from_array(values: [i64; 8]) -> Self {
        Self {
            red: PixelOffset::new(values[0], values[1]),
            green: PixelOffset::new(values[2], values[3]),
            blue: PixelOffset::new(values[4], values[5]),
            alpha: PixelOffset::new(values[6], values[7]),
        }
    }

    /// Offsets in `[Rx, Ry, Gx, Gy, Bx, By, Ax, Ay]` order.
    pub fn to_array(&self) -> [i64; 8] {
        [
            self.red.dx,
            self.red.dy,
            self.green.dx,
            self.green.dy,
            self.blue.dx,
            self.blue.dy,
            self.alpha.dx,
            self.alpha.dy,
        ]
    }

    pub fn get(&self, channel: Channel) -> PixelOffset {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Alpha => self.alpha,
        }
    }

    pub fn get_mut(&mut self, channel: Channel) -> &mut PixelOffset {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
            Channel::Alpha => &mut self.alpha,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.to_array().iter().all(|&v| v == 0)
    }
}

/// Convert a fractional shift into whole pixels along an axis of `extent` pixels.
///
/// The value is first reduced with the sign-preserving floating remainder
/// (`value % 1.0`), so 1.0 and -1.0 mean "no shift" and -0.25 stays -0.25.
/// The product with `extent` is rounded half away from zero (`f64::round`,
/// the same rule as C `lround`). A product that rounds to a full `extent`
/// is folded back to 0, which keeps the result in `(-extent, extent)`.
pub fn fractional_offset(value: f64, extent: usize) -> i64 {
    let extent = extent as i64;
    let fraction = value % 1.0;
    let pixels = (fraction * extent as f64).round() as i64;
    pixels % extent.max(1)
}

/// Evaluate all eight curves at `frame` and convert them to pixel offsets
/// for a `width` x `height` image.
pub fn compute_offsets<C: AnimationCurve>(
    params: &ShiftParams<C>,
    frame: u64,
    width: usize,
    height: usize,
) -> Result<ChannelOffsets> {
    if width == 0 || height == 0 {
        return Err(ColorShiftError::InvalidDimensions { width, height });
    }

    let mut offsets = ChannelOffsets::default();
    for (param, curve) in params.iter() {
        let value = curve.evaluate(frame);
        if !value.is_finite() {
            return Err(ColorShiftError::NonFiniteParameter {
                parameter: param.key(),
                frame,
                value,
            });
        }
        let target = offsets.get_mut(param.channel());
        match param.axis() {
            Axis::X => target.dx = fractional_offset(value, width),
            Axis::Y => target.dy = fractional_offset(value, height),
        }
    }

    debug!(frame, offsets = ?offsets.to_array(), "Computed channel offsets");
    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_offset_rounds_half_away_from_zero() {
        // 0.125 * 4 = 0.5 -> 1, -0.125 * 4 = -0.5 -> -1
        assert_eq!(fractional_offset(0.125, 4), 1);
        assert_eq!(fractional_offset(-0.125, 4), -1);
    }

    #[test]
    fn test_fractional_offset_folds_full_extent() {
        // 0.99 * 4 = 3.96 rounds to 4, a full wrap
        assert_eq!(fractional_offset(0.99, 4), 0);
        assert_eq!(fractional_offset(-0.99, 4), 0);
    }

    #[test]
    fn test_fractional_offset_keeps_sign() {
        assert_eq!(fractional_offset(-1.25, 8), -2);
        assert_eq!(fractional_offset(2.25, 8), 2);
    }
}
