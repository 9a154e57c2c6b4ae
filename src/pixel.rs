//! Channel access for packed `u32` pixels.
//!
//! A decoded pixel is a single little-endian word. 32-bit bitfield images
//! locate each channel through its color mask; 24-bit images use fixed byte
//! offsets (red in bits 0–7, green in 8–15, blue in 16–23) and carry no alpha.

use crate::bmp::{ColorMasks, Compression, Headers};
use crate::error::BitmapError;

/// A color channel within a packed pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

/// The three color channels of one pixel, unpacked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Rgb {
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    /// Same value in all three channels.
    pub const fn splat(value: u32) -> Self {
        Self::new(value, value, value)
    }

    pub fn map(self, mut f: impl FnMut(u32) -> u32) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }
}

/// Bit position of a byte-aligned channel mask.
///
/// A zero mask marks an absent channel and maps to shift 0, so extraction
/// yields 0 and insertion contributes no bits.
pub fn mask_shift(mask: u32) -> Result<u32, BitmapError> {
    match mask {
        0 | 0x0000_00ff => Ok(0),
        0x0000_ff00 => Ok(8),
        0x00ff_0000 => Ok(16),
        0xff00_0000 => Ok(24),
        other => Err(BitmapError::UnsupportedMask(other)),
    }
}

/// Mask and shift for each channel of a bitfield pixel, in R, G, B, A order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitfieldLayout {
    masks: [u32; 4],
    shifts: [u32; 4],
}

impl BitfieldLayout {
    pub fn new(masks: &ColorMasks) -> Result<Self, BitmapError> {
        let masks = [masks.red, masks.green, masks.blue, masks.alpha];
        let mut shifts = [0u32; 4];
        for (shift, &mask) in shifts.iter_mut().zip(&masks) {
            *shift = mask_shift(mask)?;
        }
        Ok(Self { masks, shifts })
    }

    pub fn mask(&self, channel: Channel) -> u32 {
        self.masks[channel as usize]
    }

    pub fn shift(&self, channel: Channel) -> u32 {
        self.shifts[channel as usize]
    }

    /// Whether the image declares an alpha mask at all.
    pub fn has_alpha(&self) -> bool {
        self.mask(Channel::Alpha) != 0
    }
}

/// How the channels of an image are packed into its `u32` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Compression 0, 24 bits per pixel, fixed byte offsets, no alpha.
    Rgb24,
    /// Compression 3, 32 bits per pixel, mask-derived shifts.
    Bitfields(BitfieldLayout),
}

impl PixelLayout {
    /// Derive the layout from validated headers.
    pub fn from_headers(headers: &Headers) -> Result<Self, BitmapError> {
        match (headers.info.compression, &headers.masks) {
            (Compression::Bitfields, Some(masks)) => {
                Ok(Self::Bitfields(BitfieldLayout::new(masks)?))
            }
            (Compression::Bitfields, None) => Err(BitmapError::MissingColorMasks),
            (Compression::Rgb, _) => Ok(Self::Rgb24),
        }
    }

    /// Bytes one pixel occupies in the on-disk pixel array.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb24 => 3,
            Self::Bitfields(_) => 4,
        }
    }

    /// Extract one channel from a packed pixel.
    ///
    /// For [`PixelLayout::Rgb24`] there is no alpha channel: asking for
    /// [`Channel::Alpha`] returns the whole packed value unchanged, which
    /// callers must not read as an alpha byte.
    pub fn channel(&self, pixel: u32, channel: Channel) -> u32 {
        match self {
            Self::Bitfields(bits) => (pixel & bits.mask(channel)) >> bits.shift(channel),
            Self::Rgb24 => match channel {
                Channel::Red => pixel & 0xff,
                Channel::Green => (pixel >> 8) & 0xff,
                Channel::Blue => (pixel >> 16) & 0xff,
                Channel::Alpha => pixel,
            },
        }
    }

    pub fn rgb(&self, pixel: u32) -> Rgb {
        Rgb::new(
            self.channel(pixel, Channel::Red),
            self.channel(pixel, Channel::Green),
            self.channel(pixel, Channel::Blue),
        )
    }

    /// Reassemble a pixel from its color channels and alpha.
    ///
    /// `alpha` is ignored for [`PixelLayout::Rgb24`].
    pub fn pack(&self, color: Rgb, alpha: u32) -> u32 {
        match self {
            Self::Bitfields(bits) => {
                let place =
                    |value: u32, channel| (value << bits.shift(channel)) & bits.mask(channel);
                place(color.red, Channel::Red)
                    | place(color.green, Channel::Green)
                    | place(color.blue, Channel::Blue)
                    | place(alpha, Channel::Alpha)
            }
            Self::Rgb24 => color.red | (color.green << 8) | (color.blue << 16),
        }
    }
}

/// Read-only, bounds-checked view over a row-major pixel buffer.
#[derive(Clone, Copy, Debug)]
pub struct PixelView<'a> {
    layout: &'a PixelLayout,
    width: usize,
    height: usize,
    pixels: &'a [u32],
}

impl<'a> PixelView<'a> {
    pub(crate) fn new(
        layout: &'a PixelLayout,
        width: usize,
        height: usize,
        pixels: &'a [u32],
    ) -> Self {
        Self {
            layout,
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layout(&self) -> &'a PixelLayout {
        self.layout
    }

    /// Packed pixel at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> Result<u32, BitmapError> {
        let out_of_bounds = BitmapError::IndexOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        };
        if x >= self.width || y >= self.height {
            return Err(out_of_bounds);
        }
        self.pixels
            .get(y * self.width + x)
            .copied()
            .ok_or(out_of_bounds)
    }

    pub fn channel(&self, x: usize, y: usize, channel: Channel) -> Result<u32, BitmapError> {
        Ok(self.layout.channel(self.pixel(x, y)?, channel))
    }

    pub fn rgb(&self, x: usize, y: usize) -> Result<Rgb, BitmapError> {
        Ok(self.layout.rgb(self.pixel(x, y)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argb() -> PixelLayout {
        PixelLayout::Bitfields(
            BitfieldLayout::new(&ColorMasks {
                red: 0x00ff_0000,
                green: 0x0000_ff00,
                blue: 0x0000_00ff,
                alpha: 0xff00_0000,
                order: 0x7352_4742,
            })
            .unwrap(),
        )
    }

    #[test]
    fn shifts_for_byte_aligned_masks() {
        assert_eq!(mask_shift(0xff).unwrap(), 0);
        assert_eq!(mask_shift(0xff00).unwrap(), 8);
        assert_eq!(mask_shift(0xff_0000).unwrap(), 16);
        assert_eq!(mask_shift(0xff00_0000).unwrap(), 24);
        assert_eq!(mask_shift(0).unwrap(), 0);
        assert!(matches!(
            mask_shift(0x0000_f800),
            Err(BitmapError::UnsupportedMask(0xf800))
        ));
    }

    #[test]
    fn bitfield_channels() {
        let layout = argb();
        let px = 0x80_11_22_33;
        assert_eq!(layout.channel(px, Channel::Red), 0x11);
        assert_eq!(layout.channel(px, Channel::Green), 0x22);
        assert_eq!(layout.channel(px, Channel::Blue), 0x33);
        assert_eq!(layout.channel(px, Channel::Alpha), 0x80);
        assert_eq!(layout.pack(layout.rgb(px), 0x80), px);
    }

    #[test]
    fn legacy_channels_and_alpha_passthrough() {
        let layout = PixelLayout::Rgb24;
        let px = 0x00_33_22_11;
        assert_eq!(layout.rgb(px), Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(layout.channel(px, Channel::Alpha), px);
        assert_eq!(layout.pack(Rgb::new(0x11, 0x22, 0x33), 0xdead), px);
    }

    #[test]
    fn absent_alpha_mask_packs_nothing() {
        let layout = PixelLayout::Bitfields(
            BitfieldLayout::new(&ColorMasks {
                red: 0xff,
                green: 0xff00,
                blue: 0xff_0000,
                alpha: 0,
                order: 0,
            })
            .unwrap(),
        );
        assert_eq!(layout.channel(0xff_ff_ff_ff, Channel::Alpha), 0);
        assert_eq!(layout.pack(Rgb::new(1, 2, 3), 0xff), 0x00_03_02_01);
    }

    #[test]
    fn absent_color_mask_packs_nothing() {
        let layout = PixelLayout::Bitfields(
            BitfieldLayout::new(&ColorMasks {
                red: 0,
                green: 0xff00,
                blue: 0xff,
                alpha: 0xff00_0000,
                order: 0,
            })
            .unwrap(),
        );
        assert_eq!(layout.channel(0x80_ff_34_56, Channel::Red), 0);
        assert_eq!(layout.pack(Rgb::new(0xa1, 0x34, 0x56), 0x78), 0x78_00_34_56);
    }

    #[test]
    fn view_rejects_out_of_bounds() {
        let layout = PixelLayout::Rgb24;
        let pixels = [1, 2, 3, 4, 5, 6];
        let view = PixelView::new(&layout, 3, 2, &pixels);
        assert_eq!(view.pixel(2, 1).unwrap(), 6);
        assert!(matches!(
            view.pixel(3, 0),
            Err(BitmapError::IndexOutOfBounds { x: 3, y: 0, width: 3, height: 2 })
        ));
        assert!(view.channel(0, 2, Channel::Red).is_err());
    }
}
