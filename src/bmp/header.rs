//! The three fixed-size BMP headers and their little-endian codecs.
//!
//! Layout on disk:
//!
//! | Section     | Bytes | Present when      |
//! |-------------|-------|-------------------|
//! | file header | 14    | always            |
//! | info header | 40    | always            |
//! | color masks | 84    | compression == 3  |
//!
//! Fields the codec does not interpret (file size, reserved bytes, pixel
//! offset, resolutions, palette counts, mask order) are carried verbatim so
//! an untouched image re-encodes byte for byte. The 64 bytes of color-space
//! data after the masks are the one exception: they are discarded on decode
//! and written back as zeros.

use alloc::vec::Vec;

use log::{debug, trace};

use super::cursor::Cursor;
use crate::error::BitmapError;

pub const SIGNATURE: [u8; 2] = *b"BM";
pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_SIZE: usize = 40;
/// Four masks, the order field, and the color-space block.
pub const MASK_HEADER_SIZE: usize = 20 + COLOR_SPACE_SIZE;
pub const COLOR_SPACE_SIZE: usize = 64;

/// Compression method codes this codec accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compression {
    /// `BI_RGB`: 24-bit packed, fixed channel offsets.
    Rgb,
    /// `BI_BITFIELDS`: 32-bit packed, channels located by [`ColorMasks`].
    Bitfields,
}

impl Compression {
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Rgb),
            3 => Some(Self::Bitfields),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Self::Rgb => 0,
            Self::Bitfields => 3,
        }
    }

    /// The only color depth each compression method is paired with.
    pub fn bit_count(self) -> u16 {
        match self {
            Self::Rgb => 24,
            Self::Bitfields => 32,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    /// Total file size as declared by the writer; informational only.
    pub file_size: u32,
    pub reserved: [u8; 4],
    pub pixel_offset: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up storage, negative for top-down.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: Compression,
    pub image_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    /// Pixel dimensions as `(width, |height|)`.
    pub fn dimensions(&self) -> Result<(u32, u32), BitmapError> {
        if self.width < 0 {
            return Err(BitmapError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok((self.width.unsigned_abs(), self.height.unsigned_abs()))
    }

    /// Store new pixel dimensions, keeping the row-order sign of the height.
    pub fn set_dimensions(&mut self, width: usize, height: usize) -> Result<(), BitmapError> {
        let too_large = || BitmapError::DimensionsTooLarge {
            width: width as u64,
            height: height as u64,
        };
        let new_width = i32::try_from(width).map_err(|_| too_large())?;
        let new_height = i32::try_from(height).map_err(|_| too_large())?;
        self.width = new_width;
        self.height = if self.height < 0 {
            -new_height
        } else {
            new_height
        };
        Ok(())
    }
}

/// Per-channel bit masks of a bitfield image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorMasks {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub alpha: u32,
    /// Carried verbatim, never interpreted.
    pub order: u32,
}

/// Everything in front of the pixel array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Headers {
    pub file: FileHeader,
    pub info: InfoHeader,
    /// Present exactly when `info.compression` is [`Compression::Bitfields`].
    pub masks: Option<ColorMasks>,
}

impl Headers {
    /// Encoded size of all headers, i.e. where the pixel array starts.
    pub fn encoded_len(&self) -> usize {
        FILE_HEADER_SIZE
            + INFO_HEADER_SIZE
            + if self.masks.is_some() {
                MASK_HEADER_SIZE
            } else {
                0
            }
    }
}

pub(crate) fn decode_file_header(cursor: &mut Cursor<'_>) -> Result<FileHeader, BitmapError> {
    let signature = cursor.read_fixed_bytes::<2>()?;
    if signature != SIGNATURE {
        return Err(BitmapError::InvalidSignature(signature));
    }
    Ok(FileHeader {
        signature,
        file_size: cursor.read_u32_le()?,
        reserved: cursor.read_fixed_bytes()?,
        pixel_offset: cursor.read_u32_le()?,
    })
}

pub(crate) fn decode_info_header(cursor: &mut Cursor<'_>) -> Result<InfoHeader, BitmapError> {
    let header_size = cursor.read_u32_le()?;
    let width = cursor.read_i32_le()?;
    let height = cursor.read_i32_le()?;

    let planes = cursor.read_u16_le()?;
    if planes != 1 {
        return Err(BitmapError::InvalidPlaneCount(planes));
    }
    let bit_count = cursor.read_u16_le()?;
    if bit_count != 24 && bit_count != 32 {
        return Err(BitmapError::UnsupportedColorDepth(bit_count));
    }
    let code = cursor.read_u32_le()?;
    let compression =
        Compression::from_u32(code).ok_or(BitmapError::UnsupportedCompression(code))?;
    if compression.bit_count() != bit_count {
        return Err(BitmapError::DepthCompressionMismatch {
            depth: bit_count,
            compression: code,
            expected: if bit_count == 24 { 0 } else { 3 },
        });
    }

    Ok(InfoHeader {
        header_size,
        width,
        height,
        planes,
        bit_count,
        compression,
        image_size: cursor.read_u32_le()?,
        x_pixels_per_meter: cursor.read_u32_le()?,
        y_pixels_per_meter: cursor.read_u32_le()?,
        colors_used: cursor.read_u32_le()?,
        colors_important: cursor.read_u32_le()?,
    })
}

pub(crate) fn decode_mask_header(cursor: &mut Cursor<'_>) -> Result<ColorMasks, BitmapError> {
    let masks = ColorMasks {
        red: cursor.read_u32_le()?,
        green: cursor.read_u32_le()?,
        blue: cursor.read_u32_le()?,
        alpha: cursor.read_u32_le()?,
        order: cursor.read_u32_le()?,
    };
    cursor.skip(COLOR_SPACE_SIZE)?;
    Ok(masks)
}

/// Decode all headers, leaving the cursor at the first pixel byte.
pub(crate) fn decode_headers(cursor: &mut Cursor<'_>) -> Result<Headers, BitmapError> {
    let file = decode_file_header(cursor)?;
    let info = decode_info_header(cursor)?;
    let masks = match info.compression {
        Compression::Bitfields => Some(decode_mask_header(cursor)?),
        Compression::Rgb => None,
    };
    trace!("pixel array starts at byte {}", cursor.position());
    debug!(
        "BMP {}x{} {}bpp compression={} image_size={} masks={:x?}",
        info.width,
        info.height,
        info.bit_count,
        info.compression.code(),
        info.image_size,
        masks.map(|m| [m.red, m.green, m.blue, m.alpha]),
    );
    Ok(Headers { file, info, masks })
}

pub(crate) fn encode_file_header(out: &mut Vec<u8>, header: &FileHeader) {
    out.extend_from_slice(&header.signature);
    out.extend_from_slice(&header.file_size.to_le_bytes());
    out.extend_from_slice(&header.reserved);
    out.extend_from_slice(&header.pixel_offset.to_le_bytes());
}

pub(crate) fn encode_info_header(out: &mut Vec<u8>, header: &InfoHeader) {
    out.extend_from_slice(&header.header_size.to_le_bytes());
    out.extend_from_slice(&header.width.to_le_bytes());
    out.extend_from_slice(&header.height.to_le_bytes());
    out.extend_from_slice(&header.planes.to_le_bytes());
    out.extend_from_slice(&header.bit_count.to_le_bytes());
    out.extend_from_slice(&header.compression.code().to_le_bytes());
    out.extend_from_slice(&header.image_size.to_le_bytes());
    out.extend_from_slice(&header.x_pixels_per_meter.to_le_bytes());
    out.extend_from_slice(&header.y_pixels_per_meter.to_le_bytes());
    out.extend_from_slice(&header.colors_used.to_le_bytes());
    out.extend_from_slice(&header.colors_important.to_le_bytes());
}

pub(crate) fn encode_mask_header(out: &mut Vec<u8>, masks: &ColorMasks) {
    for field in [masks.red, masks.green, masks.blue, masks.alpha, masks.order] {
        out.extend_from_slice(&field.to_le_bytes());
    }
    // color-space data is not retained
    out.extend(core::iter::repeat_n(0u8, COLOR_SPACE_SIZE));
}

pub(crate) fn encode_headers(out: &mut Vec<u8>, headers: &Headers) {
    encode_file_header(out, &headers.file);
    encode_info_header(out, &headers.info);
    if let Some(masks) = &headers.masks {
        encode_mask_header(out, masks);
    }
}
