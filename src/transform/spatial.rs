//! Neighborhood transforms: block pixelation and 5x5 Gaussian blur.

use alloc::vec::Vec;

use crate::bitmap::Bitmap;
use crate::error::BitmapError;
use crate::pixel::{Channel, Rgb};

/// Edge length of a pixelation block.
pub const BLOCK_SIZE: usize = 16;

/// 5x5 binomial kernel, row-major. Weights sum to 256.
#[rustfmt::skip]
pub const GAUSSIAN_KERNEL: [u32; 25] = [
    1,  4,  6,  4, 1,
    4, 16, 24, 16, 4,
    6, 24, 36, 24, 6,
    4, 16, 24, 16, 4,
    1,  4,  6,  4, 1,
];

/// Replace each 16x16 block (clipped at the right and bottom edges) with its
/// mean color. Every pixel keeps its own alpha.
pub fn pixelate(image: &Bitmap) -> Result<Vec<u32>, BitmapError> {
    let view = image.view();
    let layout = view.layout();
    let (width, height) = (view.width(), view.height());
    let mut out = image.pixels().to_vec();
    if out.is_empty() {
        return Ok(out);
    }

    for block_y in (0..height).step_by(BLOCK_SIZE) {
        let rows = block_y..(block_y + BLOCK_SIZE).min(height);
        for block_x in (0..width).step_by(BLOCK_SIZE) {
            let cols = block_x..(block_x + BLOCK_SIZE).min(width);

            let mut total = Rgb::default();
            for y in rows.clone() {
                for x in cols.clone() {
                    let color = view.rgb(x, y)?;
                    total.red += color.red;
                    total.green += color.green;
                    total.blue += color.blue;
                }
            }
            let cells = (rows.len() * cols.len()) as u32;
            let mean = total.map(|sum| sum / cells);

            for y in rows.clone() {
                for x in cols.clone() {
                    let alpha = view.channel(x, y, Channel::Alpha)?;
                    out[y * width + x] = layout.pack(mean, alpha);
                }
            }
        }
    }
    Ok(out)
}

/// 5x5 Gaussian blur with integer weights.
///
/// Each weighted sample is divided by 256 before it is accumulated. The
/// kernel index only advances for in-bounds neighbors, so near the right and
/// bottom edges the remaining weights shift onto the samples that exist
/// instead of being zero-filled. The result for the window centered on
/// `(x, y)` lands on `(x - 2, y - 2)`; the last two rows and columns keep
/// their original values. Alpha is kept from the written pixel.
pub fn blur(image: &Bitmap) -> Result<Vec<u32>, BitmapError> {
    let view = image.view();
    let layout = view.layout();
    let (width, height) = (view.width(), view.height());
    let mut out = image.pixels().to_vec();
    if out.is_empty() {
        return Ok(out);
    }

    for center_y in 2..height {
        for center_x in 2..width {
            let mut sum = Rgb::default();
            let mut weights = GAUSSIAN_KERNEL.iter();
            for y in center_y - 2..=center_y + 2 {
                for x in center_x - 2..=center_x + 2 {
                    if x >= width || y >= height {
                        continue;
                    }
                    let Some(&weight) = weights.next() else {
                        break;
                    };
                    let color = view.rgb(x, y)?;
                    sum.red += weight * color.red / 256;
                    sum.green += weight * color.green / 256;
                    sum.blue += weight * color.blue / 256;
                }
            }

            let (target_x, target_y) = (center_x - 2, center_y - 2);
            let alpha = view.channel(target_x, target_y, Channel::Alpha)?;
            out[target_y * width + target_x] = layout.pack(sum, alpha);
        }
    }
    Ok(out)
}
