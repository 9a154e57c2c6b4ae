//! Pixel array encoder: flat `u32` buffer back to packed/padded rows.

use alloc::vec::Vec;

use log::debug;

use super::cursor::row_padding;
use crate::error::BitmapError;
use crate::pixel::PixelLayout;

/// Append the on-disk pixel array for `pixels` to `out`.
///
/// `pixels` must hold exactly `width * height` values.
pub(crate) fn encode_pixels(
    out: &mut Vec<u8>,
    pixels: &[u32],
    layout: &PixelLayout,
    width: usize,
    height: usize,
) -> Result<(), BitmapError> {
    let expected = width
        .checked_mul(height)
        .ok_or(BitmapError::DimensionsTooLarge {
            width: width as u64,
            height: height as u64,
        })?;
    if pixels.len() != expected {
        return Err(BitmapError::PixelCountMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    match layout {
        PixelLayout::Bitfields(_) => {
            out.reserve(expected * 4);
            for &px in pixels {
                out.extend_from_slice(&px.to_le_bytes());
            }
        }
        PixelLayout::Rgb24 => encode_24bit(out, pixels, width),
    }
    Ok(())
}

/// Pixel array size in bytes for the given geometry.
pub(crate) fn encoded_pixels_len(layout: &PixelLayout, width: usize, height: usize) -> usize {
    let padding = match layout {
        PixelLayout::Bitfields(_) => 0,
        PixelLayout::Rgb24 => row_padding(width),
    };
    (width * layout.bytes_per_pixel() + padding) * height
}

fn encode_24bit(out: &mut Vec<u8>, pixels: &[u32], width: usize) {
    if width == 0 {
        return;
    }
    let pad_bytes = row_padding(width);
    debug!("encoding {} 24-bit rows, {pad_bytes} padding bytes per row", pixels.len() / width);
    for row in pixels.chunks_exact(width) {
        for &px in row {
            let [b0, b1, b2, _] = px.to_le_bytes();
            out.extend_from_slice(&[b0, b1, b2]);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn pads_every_24bit_row() {
        let pixels = [0x030201, 0x060504, 0x090807, 0x0c0b0a, 0x0f0e0d, 0x121110];
        let mut out = Vec::new();
        encode_pixels(&mut out, &pixels, &PixelLayout::Rgb24, 3, 2).unwrap();
        #[rustfmt::skip]
        let expected = vec![
            1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 0, 0,
            10, 11, 12, 13, 14, 15, 16, 17, 18, 0, 0, 0,
        ];
        assert_eq!(out, expected);
        assert_eq!(out.len(), encoded_pixels_len(&PixelLayout::Rgb24, 3, 2));
    }

    #[test]
    fn encoded_len_per_layout() {
        let layout = PixelLayout::Bitfields(
            crate::pixel::BitfieldLayout::new(&crate::bmp::ColorMasks {
                red: 0xff_0000,
                green: 0xff00,
                blue: 0xff,
                alpha: 0,
                order: 0,
            })
            .unwrap(),
        );
        assert_eq!(encoded_pixels_len(&layout, 3, 2), 24);
        assert_eq!(encoded_pixels_len(&PixelLayout::Rgb24, 3, 2), 24);
        assert_eq!(encoded_pixels_len(&PixelLayout::Rgb24, 4, 2), 24);
        assert_eq!(encoded_pixels_len(&PixelLayout::Rgb24, 1, 3), 12);

        let mut out = Vec::new();
        encode_pixels(&mut out, &[0; 6], &layout, 3, 2).unwrap();
        assert_eq!(out.len(), encoded_pixels_len(&layout, 3, 2));
    }

    #[test]
    fn upper_byte_of_24bit_pixel_is_dropped() {
        let mut out = Vec::new();
        encode_pixels(&mut out, &[0xff_33_22_11], &PixelLayout::Rgb24, 1, 1).unwrap();
        assert_eq!(out, vec![0x11, 0x22, 0x33, 0]);
    }

    #[test]
    fn rejects_wrong_pixel_count() {
        let mut out = Vec::new();
        let err = encode_pixels(&mut out, &[0; 5], &PixelLayout::Rgb24, 3, 2).unwrap_err();
        assert!(matches!(
            err,
            BitmapError::PixelCountMismatch {
                expected: 6,
                actual: 5
            }
        ));
        assert!(out.is_empty());
    }
}
