use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorShiftError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("RGBA buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    #[error("Unsupported channel count: {0} (expected 4)")]
    UnsupportedChannelCount(usize),

    #[error("Parameter {parameter} evaluated to non-finite value {value} at frame {frame}")]
    NonFiniteParameter {
        parameter: &'static str,
        frame: u64,
        value: f64,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Could not serialize config: {0}")]
    Serialize(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Empty frame range")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, ColorShiftError>;
