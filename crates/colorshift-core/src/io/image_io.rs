use std::path::Path;

use image::RgbaImage;

use crate::error::{ColorShiftError, Result};
use crate::frame::RgbaFrame;

impl RgbaFrame {
    /// Copy an `image` crate RGBA8 buffer into a frame.
    pub fn from_rgba_image(img: &RgbaImage) -> Result<Self> {
        let (w, h) = img.dimensions();
        RgbaFrame::from_raw(w as usize, h as usize, img.as_raw().clone())
    }

    /// Copy the frame into an `image` crate RGBA8 buffer.
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        let (w, h) = (self.width(), self.height());
        let expected = w * h * 4;
        RgbaImage::from_raw(w as u32, h as u32, self.clone().into_raw()).ok_or(
            ColorShiftError::BufferLengthMismatch {
                expected,
                actual: self.data.len(),
            },
        )
    }
}

/// Load any image file `image` can decode, converted to RGBA8.
pub fn load_rgba(path: &Path) -> Result<RgbaFrame> {
    let img = image::open(path)?.to_rgba8();
    RgbaFrame::from_rgba_image(&img)
}

/// Save a frame; the format follows the file extension.
///
/// Use PNG (or another alpha-capable format) to keep the shifted alpha channel.
pub fn save_rgba(frame: &RgbaFrame, path: &Path) -> Result<()> {
    let img = frame.to_rgba_image()?;
    img.save(path)?;
    Ok(())
}
