use crate::consts::{DEFAULT_GREEN_X, DEFAULT_RED_X};
use crate::curve::{AnimationCurve, Keyframe};
use crate::frame::{Axis, Channel};

/// One of the eight per-channel, per-axis shift parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftParameter {
    RedX,
    RedY,
    GreenX,
    GreenY,
    BlueX,
    BlueY,
    AlphaX,
    AlphaY,
}

impl ShiftParameter {
    /// All parameters in `[Rx, Ry, Gx, Gy, Bx, By, Ax, Ay]` order.
    pub const ALL: [ShiftParameter; 8] = [
        Self::RedX,
        Self::RedY,
        Self::GreenX,
        Self::GreenY,
        Self::BlueX,
        Self::BlueY,
        Self::AlphaX,
        Self::AlphaY,
    ];

    pub fn new(channel: Channel, axis: Axis) -> Self {
        match (channel, axis) {
            (Channel::Red, Axis::X) => Self::RedX,
            (Channel::Red, Axis::Y) => Self::RedY,
            (Channel::Green, Axis::X) => Self::GreenX,
            (Channel::Green, Axis::Y) => Self::GreenY,
            (Channel::Blue, Axis::X) => Self::BlueX,
            (Channel::Blue, Axis::Y) => Self::BlueY,
            (Channel::Alpha, Axis::X) => Self::AlphaX,
            (Channel::Alpha, Axis::Y) => Self::AlphaY,
        }
    }

    /// Persisted key name.
    pub fn key(self) -> &'static str {
        match self {
            Self::RedX => "red_x",
            Self::RedY => "red_y",
            Self::GreenX => "green_x",
            Self::GreenY => "green_y",
            Self::BlueX => "blue_x",
            Self::BlueY => "blue_y",
            Self::AlphaX => "alpha_x",
            Self::AlphaY => "alpha_y",
        }
    }

    /// Human-readable label for property listings.
    pub fn label(self) -> String {
        format!("{} {} Shift", self.channel(), self.axis())
    }

    pub fn channel(self) -> Channel {
        match self {
            Self::RedX | Self::RedY => Channel::Red,
            Self::GreenX | Self::GreenY => Channel::Green,
            Self::BlueX | Self::BlueY => Channel::Blue,
            Self::AlphaX | Self::AlphaY => Channel::Alpha,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Self::RedX | Self::GreenX | Self::BlueX | Self::AlphaX => Axis::X,
            Self::RedY | Self::GreenY | Self::BlueY | Self::AlphaY => Axis::Y,
        }
    }

    /// Value used when the effect is created without explicit curves:
    /// a mild red/green horizontal split.
    pub fn default_value(self) -> f64 {
        match self {
            Self::RedX => DEFAULT_RED_X,
            Self::GreenX => DEFAULT_GREEN_X,
            _ => 0.0,
        }
    }
}

impl std::fmt::Display for ShiftParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The eight shift curves of a color shift effect.
///
/// Values are fractions of image width (X) or height (Y); the nominal
/// editing range is [-1, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftParams<C = Keyframe> {
    curves: [C; 8],
}

impl<C> ShiftParams<C> {
    /// Build from curves in `[Rx, Ry, Gx, Gy, Bx, By, Ax, Ay]` order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        red_x: C,
        red_y: C,
        green_x: C,
        green_y: C,
        blue_x: C,
        blue_y: C,
        alpha_x: C,
        alpha_y: C,
    ) -> Self {
        Self {
            curves: [
                red_x, red_y, green_x, green_y, blue_x, blue_y, alpha_x, alpha_y,
            ],
        }
    }

    /// Build by calling `f` once per parameter.
    pub fn from_fn(f: impl FnMut(ShiftParameter) -> C) -> Self {
        Self {
            curves: ShiftParameter::ALL.map(f),
        }
    }

    pub fn get(&self, param: ShiftParameter) -> &C {
        &self.curves[slot(param)]
    }

    pub fn get_mut(&mut self, param: ShiftParameter) -> &mut C {
        &mut self.curves[slot(param)]
    }

    /// Replace a curve, returning the previous one.
    pub fn set(&mut self, param: ShiftParameter, curve: C) -> C {
        std::mem::replace(&mut self.curves[slot(param)], curve)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShiftParameter, &C)> {
        ShiftParameter::ALL.into_iter().zip(self.curves.iter())
    }
}

impl<C: AnimationCurve> ShiftParams<C> {
    /// Evaluate every curve at `frame`, in `[Rx, Ry, Gx, Gy, Bx, By, Ax, Ay]` order.
    pub fn values_at(&self, frame: u64) -> [f64; 8] {
        let mut values = [0.0; 8];
        for (value, curve) in values.iter_mut().zip(self.curves.iter()) {
            *value = curve.evaluate(frame);
        }
        values
    }
}

impl<C: From<f64>> Default for ShiftParams<C> {
    fn default() -> Self {
        Self::from_fn(|param| C::from(param.default_value()))
    }
}

fn slot(param: ShiftParameter) -> usize {
    match param {
        ShiftParameter::RedX => 0,
        ShiftParameter::RedY => 1,
        ShiftParameter::GreenX => 2,
        ShiftParameter::GreenY => 3,
        ShiftParameter::BlueX => 4,
        ShiftParameter::BlueY => 5,
        ShiftParameter::AlphaX => 6,
        ShiftParameter::AlphaY => 7,
    }
}
