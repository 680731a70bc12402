use serde::Serialize;

/// Static identity of the effect, as shown by host applications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EffectInfo {
    pub class_name: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub has_audio: bool,
    pub has_video: bool,
}

pub const COLOR_SHIFT_INFO: EffectInfo = EffectInfo {
    class_name: "ColorShift",
    name: "Color Shift",
    description: "Shift the colors of an image up, down, left, and right (with infinite wrapping).",
    has_audio: false,
    has_video: true,
};

/// Value of one shift parameter at a given frame, with its editing range.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Property {
    pub key: &'static str,
    pub label: String,
    pub value: f64,
    /// Pixel offset the value resolves to, when image dimensions are known.
    pub pixels: Option<i64>,
    pub min: f64,
    pub max: f64,
}
