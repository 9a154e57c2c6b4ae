//! Per-pixel tonal transforms. Alpha is carried through untouched.

use alloc::vec::Vec;

use crate::bitmap::Bitmap;
use crate::pixel::{Channel, Rgb};

/// Output levels for cell shading.
pub const SHADE_LEVELS: [u32; 3] = [0, 128, 255];

/// Quantize one channel: `< 64` → 0, `64..192` → 128, `>= 192` → 255.
pub fn shade(value: u32) -> u32 {
    match value {
        0..64 => SHADE_LEVELS[0],
        64..192 => SHADE_LEVELS[1],
        _ => SHADE_LEVELS[2],
    }
}

/// Quantize every color channel to [`SHADE_LEVELS`].
pub fn cell_shade(image: &Bitmap) -> Vec<u32> {
    map_colors(image, |color| color.map(shade))
}

/// Replace every color channel with the truncated mean of red, green and blue.
pub fn grayscale(image: &Bitmap) -> Vec<u32> {
    map_colors(image, |color| {
        Rgb::splat((color.red + color.green + color.blue) / 3)
    })
}

fn map_colors(image: &Bitmap, f: impl Fn(Rgb) -> Rgb) -> Vec<u32> {
    let layout = image.layout();
    image
        .pixels()
        .iter()
        .map(|&px| layout.pack(f(layout.rgb(px)), layout.channel(px, Channel::Alpha)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_buckets() {
        assert_eq!(shade(0), 0);
        assert_eq!(shade(63), 0);
        assert_eq!(shade(64), 128);
        assert_eq!(shade(127), 128);
        assert_eq!(shade(128), 128);
        assert_eq!(shade(191), 128);
        assert_eq!(shade(192), 255);
        assert_eq!(shade(255), 255);
    }

    #[test]
    fn shade_is_idempotent() {
        for v in 0..=255 {
            assert_eq!(shade(shade(v)), shade(v));
        }
    }
}
