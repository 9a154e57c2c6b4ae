//! # bitmapfx
//!
//! Byte-exact BMP decoder/encoder with a small set of image transforms.
//!
//! ## Supported Formats
//!
//! - 24-bit uncompressed (`BI_RGB`) with 4-byte row padding
//! - 32-bit bitfield (`BI_BITFIELDS`) with byte-aligned channel masks
//!
//! Decoding keeps every header field. Encoding an untouched image reproduces
//! the input exactly, except that the 64 bytes of color-space data following
//! the channel masks are written back as zeros.
//!
//! ## Transforms
//!
//! - Tonal: cell shading, grayscale
//! - Spatial: 16x16 pixelation, 5x5 Gaussian blur
//! - Geometric: flips, quarter-turn rotations, diagonal mirrors, 2x scale up/down
//!
//! ## Non-Goals
//!
//! - Palette images and 1/4/8/16-bit depths
//! - RLE compression
//! - Streaming decode: the whole pixel buffer is materialized
//!
//! ## Usage
//!
//! ```no_run
//! use bitmapfx::Transform;
//!
//! let data: &[u8] = &[]; // your BMP bytes
//! let mut image = bitmapfx::decode(data)?;
//! Transform::Grayscale.apply(&mut image)?;
//! let encoded = image.encode()?;
//! # Ok::<(), bitmapfx::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bitmap;
pub mod bmp;
mod decode;
mod error;
mod limits;
pub mod pixel;
pub mod transform;

// Re-exports
pub use bitmap::Bitmap;
pub use decode::{DecodeRequest, decode};
pub use error::BitmapError;
pub use limits::Limits;
pub use pixel::{Channel, PixelLayout, Rgb};
pub use transform::Transform;
