#![allow(dead_code)]

use colorshift_core::frame::RgbaFrame;

/// Frame where every byte encodes its own position and channel, so any
/// misplaced copy shows up as a wrong value.
pub fn make_ramp_frame(width: usize, height: usize) -> RgbaFrame {
    RgbaFrame::from_fn(width, height, |row, col| {
        let base = ((row * width + col) % 64) as u8;
        [base, base + 64, base + 128, base + 192]
    })
}

/// Frame filled with a single pixel value.
pub fn make_solid_frame(width: usize, height: usize, pixel: [u8; 4]) -> RgbaFrame {
    RgbaFrame::from_fn(width, height, |_, _| pixel)
}

/// Frame with independent pseudo-random bytes per channel.
pub fn make_noise_frame(width: usize, height: usize, seed: u32) -> RgbaFrame {
    RgbaFrame::from_fn(width, height, |row, col| {
        let mut x = seed
            .wrapping_add((row as u32).wrapping_mul(73_856_093))
            .wrapping_add((col as u32).wrapping_mul(19_349_663));
        let mut px = [0u8; 4];
        for byte in &mut px {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            *byte = (x & 0xff) as u8;
        }
        px
    })
}
