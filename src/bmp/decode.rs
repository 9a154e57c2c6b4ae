//! Pixel array decoder: packed/padded on-disk rows to a flat `u32` buffer.

use alloc::vec::Vec;

use log::debug;

use super::cursor::{Cursor, row_padding};
use crate::error::BitmapError;
use crate::pixel::PixelLayout;

/// Decode exactly `width * height` pixels starting at the cursor.
///
/// Rows keep the container's native scan order.
pub(crate) fn decode_pixels(
    cursor: &mut Cursor<'_>,
    layout: &PixelLayout,
    width: usize,
    height: usize,
) -> Result<Vec<u32>, BitmapError> {
    let too_large = BitmapError::DimensionsTooLarge {
        width: width as u64,
        height: height as u64,
    };
    let count = width
        .checked_mul(height)
        .filter(|count| count.checked_mul(4).is_some())
        .ok_or(too_large)?;
    // A zero-sized image has no rows worth walking, however tall it claims to be.
    if count == 0 {
        return Ok(Vec::new());
    }

    match layout {
        PixelLayout::Bitfields(_) => decode_32bit(cursor, count),
        PixelLayout::Rgb24 => decode_24bit(cursor, width, height, count),
    }
}

fn decode_32bit(cursor: &mut Cursor<'_>, count: usize) -> Result<Vec<u32>, BitmapError> {
    let bytes = cursor.take(count * 4)?;
    debug!("decoding {count} 32-bit pixels");
    Ok(bytes
        .chunks_exact(4)
        .map(|word| u32::from_le_bytes([word[0], word[1], word[2], word[3]]))
        .collect())
}

fn decode_24bit(
    cursor: &mut Cursor<'_>,
    width: usize,
    height: usize,
    count: usize,
) -> Result<Vec<u32>, BitmapError> {
    let padding = row_padding(width);
    let row_bytes = width.saturating_mul(3);
    // Reject truncated input before allocating.
    let stride = row_bytes.saturating_add(padding);
    if stride
        .checked_mul(height)
        .is_none_or(|total| total > cursor.remaining())
    {
        return Err(BitmapError::UnexpectedEof);
    }
    debug!("decoding {width}x{height} 24-bit pixels, {padding} padding bytes per row");

    let mut pixels = Vec::with_capacity(count);
    for _ in 0..height {
        let row = cursor.take(row_bytes)?;
        pixels.extend(
            row.chunks_exact(3)
                .map(|px| u32::from(px[0]) | (u32::from(px[1]) << 8) | (u32::from(px[2]) << 16)),
        );
        cursor.skip(padding)?;
    }
    Ok(pixels)
}
