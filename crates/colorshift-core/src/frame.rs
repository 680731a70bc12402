use ndarray::Array3;

use crate::consts::RGBA_CHANNEL_COUNT;
use crate::error::{ColorShiftError, Result};

/// A single interleaved RGBA8 image frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaFrame {
    /// Pixel data, row-major, shape = (height, width, 4)
    pub data: Array3<u8>,
}

impl RgbaFrame {
    pub fn new(data: Array3<u8>) -> Self {
        Self { data }
    }

    /// Wrap a raw row-major RGBA8 buffer (stride = width * 4).
    pub fn from_raw(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ColorShiftError::InvalidDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(RGBA_CHANNEL_COUNT))
            .ok_or(ColorShiftError::InvalidDimensions { width, height })?;
        if pixels.len() != expected {
            return Err(ColorShiftError::BufferLengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        let data = Array3::from_shape_vec((height, width, RGBA_CHANNEL_COUNT), pixels).map_err(
            |_| ColorShiftError::BufferLengthMismatch {
                expected,
                actual: expected,
            },
        )?;
        Ok(Self { data })
    }

    /// Build a frame by calling `f(row, col)` for every pixel.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> [u8; 4]) -> Self {
        let data = Array3::from_shape_fn((height, width, RGBA_CHANNEL_COUNT), |(row, col, c)| {
            f(row, col)[c]
        });
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn pixel(&self, row: usize, col: usize) -> [u8; 4] {
        [
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
            self.data[[row, col, 3]],
        ]
    }

    /// Check the frame is a non-empty RGBA8 grid.
    pub fn validate(&self) -> Result<()> {
        let (h, w, c) = self.data.dim();
        if w == 0 || h == 0 {
            return Err(ColorShiftError::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        if c != RGBA_CHANNEL_COUNT {
            return Err(ColorShiftError::UnsupportedChannelCount(c));
        }
        Ok(())
    }

    /// Consume the frame and return its row-major RGBA8 bytes.
    pub fn into_raw(self) -> Vec<u8> {
        match self.data.as_slice() {
            Some(slice) => slice.to_vec(),
            None => self.data.iter().copied().collect(),
        }
    }
}

/// One of the four interleaved channels of an RGBA8 pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// Channels in interleaved byte order.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Byte index of this channel within a pixel.
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Alpha => 3,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Green => write!(f, "Green"),
            Self::Blue => write!(f, "Blue"),
            Self::Alpha => write!(f, "Alpha"),
        }
    }
}

/// Displacement axis of a shift parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal, scaled by image width.
    X,
    /// Vertical, scaled by image height.
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
        }
    }
}
