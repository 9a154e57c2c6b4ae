//! Flips, quarter-turn rotations and 2x nearest-neighbor scaling.
//!
//! Functions that change the buffer's shape take the [`InfoHeader`] mutably
//! and update width, height (keeping its row-order sign) and, for scaling,
//! the raw image size. Header updates happen before any pixel is touched, so
//! an error leaves the image unchanged.

use alloc::vec::Vec;

use crate::bmp::InfoHeader;
use crate::error::BitmapError;

/// Reverse the pixel order of every row.
pub fn flip_horizontal(width: usize, pixels: &mut [u32]) {
    if width == 0 {
        return;
    }
    for row in pixels.chunks_exact_mut(width) {
        row.reverse();
    }
}

/// Reverse the whole buffer, then each row: a true vertical flip.
pub fn flip_vertical(width: usize, pixels: &mut [u32]) {
    pixels.reverse();
    flip_horizontal(width, pixels);
}

/// Column-major copy of a row-major `width x height` buffer.
pub fn transpose(width: usize, height: usize, pixels: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(pixels.len());
    if pixels.is_empty() {
        return out;
    }
    for col in 0..width {
        for row in 0..height {
            out.push(pixels[row * width + col]);
        }
    }
    out
}

fn dimensions(info: &InfoHeader) -> Result<(usize, usize), BitmapError> {
    let (width, height) = info.dimensions()?;
    Ok((width as usize, height as usize))
}

/// Rotate clockwise: horizontal flip, then transpose.
pub fn rotate_90(info: &mut InfoHeader, pixels: &mut Vec<u32>) -> Result<(), BitmapError> {
    let (width, height) = dimensions(info)?;
    info.set_dimensions(height, width)?;
    flip_horizontal(width, pixels);
    *pixels = transpose(width, height, pixels);
    Ok(())
}

pub fn rotate_180(info: &InfoHeader, pixels: &mut [u32]) -> Result<(), BitmapError> {
    let (width, _) = dimensions(info)?;
    flip_vertical(width, pixels);
    flip_horizontal(width, pixels);
    Ok(())
}

/// Rotate counter-clockwise: vertical flip, then transpose.
pub fn rotate_270(info: &mut InfoHeader, pixels: &mut Vec<u32>) -> Result<(), BitmapError> {
    let (width, height) = dimensions(info)?;
    info.set_dimensions(height, width)?;
    flip_vertical(width, pixels);
    *pixels = transpose(width, height, pixels);
    Ok(())
}

/// Mirror across the top-left to bottom-right diagonal.
pub fn flip_diagonal_1(info: &mut InfoHeader, pixels: &mut Vec<u32>) -> Result<(), BitmapError> {
    rotate_90(info, pixels)?;
    let (width, _) = dimensions(info)?;
    flip_vertical(width, pixels);
    Ok(())
}

/// Mirror across the top-right to bottom-left diagonal.
pub fn flip_diagonal_2(info: &mut InfoHeader, pixels: &mut Vec<u32>) -> Result<(), BitmapError> {
    rotate_90(info, pixels)?;
    let (width, _) = dimensions(info)?;
    flip_horizontal(width, pixels);
    Ok(())
}

/// Raw size field after scaling. Always 4 bytes per pixel, even for 24-bit
/// images.
fn scaled_image_size(width: usize, height: usize) -> Result<u32, BitmapError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(BitmapError::DimensionsTooLarge {
            width: width as u64,
            height: height as u64,
        })
}

/// Double both dimensions by replicating every pixel into a 2x2 block.
pub fn scale_up(info: &mut InfoHeader, pixels: &mut Vec<u32>) -> Result<(), BitmapError> {
    let (width, height) = dimensions(info)?;
    let too_large = || BitmapError::DimensionsTooLarge {
        width: width as u64 * 2,
        height: height as u64 * 2,
    };
    let new_width = width.checked_mul(2).ok_or_else(too_large)?;
    let new_height = height.checked_mul(2).ok_or_else(too_large)?;
    let image_size = scaled_image_size(new_width, new_height)?;
    info.set_dimensions(new_width, new_height)?;
    info.image_size = image_size;

    if width == 0 {
        return Ok(());
    }
    let mut out = Vec::with_capacity(new_width * new_height);
    for row in pixels.chunks_exact(width) {
        for _ in 0..2 {
            for &px in row {
                out.extend_from_slice(&[px, px]);
            }
        }
    }
    *pixels = out;
    Ok(())
}

/// Halve both dimensions by keeping pixels at even rows and columns.
///
/// Images with a width or height of 1 are returned unchanged. For odd
/// dimensions the trailing row/column is dropped along with the odd ones.
pub fn scale_down(info: &mut InfoHeader, pixels: &mut Vec<u32>) -> Result<(), BitmapError> {
    let (width, height) = dimensions(info)?;
    if width == 1 || height == 1 {
        return Ok(());
    }
    let (new_width, new_height) = (width / 2, height / 2);
    let image_size = scaled_image_size(new_width, new_height)?;
    info.set_dimensions(new_width, new_height)?;
    info.image_size = image_size;
    if pixels.is_empty() {
        return Ok(());
    }

    let mut out = Vec::with_capacity(new_width * new_height);
    for row in (0..new_height).map(|r| r * 2) {
        for col in (0..new_width).map(|c| c * 2) {
            out.push(pixels[row * width + col]);
        }
    }
    *pixels = out;
    Ok(())
}
