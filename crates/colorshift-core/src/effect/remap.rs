use ndarray::Array3;
use rayon::prelude::*;

use crate::consts::{PARALLEL_PIXEL_THRESHOLD, RGBA_CHANNEL_COUNT};
use crate::error::{ColorShiftError, Result};
use crate::frame::{Channel, RgbaFrame};

use super::offsets::ChannelOffsets;

/// Map any integer into `[0, n)` with periodic repetition.
///
/// Unlike `%`, the result is never negative: `wrap(-1, 4) == 3`.
/// `n` must be at least 1.
pub fn wrap(v: i64, n: usize) -> usize {
    v.rem_euclid(n as i64) as usize
}

/// Resample `source` so that every output byte of channel `c` at `(row, col)`
/// is copied from `(wrap(row + dy), wrap(col + dx))` of the same channel.
/// Offsets are reduced modulo the image size before use, so any `i64` is valid.
///
/// The result is written into a freshly allocated buffer; `source` is only read.
pub fn remap_channels(source: &RgbaFrame, offsets: &ChannelOffsets) -> Result<RgbaFrame> {
    source.validate()?;
    let (h, w, _) = source.data.dim();

    let contiguous = source.data.as_standard_layout();
    let src = contiguous
        .as_slice()
        .ok_or(ColorShiftError::InvalidDimensions {
            width: w,
            height: h,
        })?;

    // Source column per destination column, one table per channel.
    let columns: [Vec<usize>; 4] = Channel::ALL.map(|channel| {
        let shift = wrap(offsets.get(channel).dx, w);
        (0..w).map(|col| (col + shift) % w).collect()
    });

    let stride = w * RGBA_CHANNEL_COUNT;
    let mut output = vec![0u8; stride * h];

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        output
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(row, out_row)| {
                remap_row(src, stride, h, row, &columns, offsets, out_row);
            });
    } else {
        for (row, out_row) in output.chunks_mut(stride).enumerate() {
            remap_row(src, stride, h, row, &columns, offsets, out_row);
        }
    }

    let data = Array3::from_shape_vec((h, w, RGBA_CHANNEL_COUNT), output).map_err(|_| {
        ColorShiftError::BufferLengthMismatch {
            expected: stride * h,
            actual: stride * h,
        }
    })?;
    Ok(RgbaFrame::new(data))
}

fn remap_row(
    src: &[u8],
    stride: usize,
    h: usize,
    row: usize,
    columns: &[Vec<usize>; 4],
    offsets: &ChannelOffsets,
    out_row: &mut [u8],
) {
    for channel in Channel::ALL {
        let c = channel.index();
        let sy = (row + wrap(offsets.get(channel).dy, h)) % h;
        let src_row = &src[sy * stride..(sy + 1) * stride];
        for (pixel, &sx) in out_row
            .chunks_exact_mut(RGBA_CHANNEL_COUNT)
            .zip(columns[c].iter())
        {
            pixel[c] = src_row[sx * RGBA_CHANNEL_COUNT + c];
        }
    }
}
