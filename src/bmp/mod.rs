//! BMP container codec: header model plus packed/padded pixel array.
//!
//! Only two variants are handled: 24-bit `BI_RGB` and 32-bit `BI_BITFIELDS`
//! with byte-aligned masks. Use [`crate::decode`] and [`crate::Bitmap::encode`]
//! for whole-file work.

mod cursor;
pub(crate) mod decode;
pub(crate) mod encode;
mod header;

pub(crate) use cursor::Cursor;
pub use header::{
    COLOR_SPACE_SIZE, ColorMasks, Compression, FILE_HEADER_SIZE, FileHeader, Headers,
    INFO_HEADER_SIZE, InfoHeader, MASK_HEADER_SIZE, SIGNATURE,
};
pub(crate) use header::{decode_headers, encode_headers};
