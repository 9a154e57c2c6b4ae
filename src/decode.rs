use log::{debug, warn};

use crate::bitmap::Bitmap;
use crate::bmp::{self, Cursor};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Decode request builder.
///
/// ```no_run
/// use bitmapfx::{DecodeRequest, Limits};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits { max_pixels: Some(64 * 1024 * 1024), ..Default::default() };
/// let image = DecodeRequest::new(data).with_limits(&limits).decode()?;
/// println!("{}x{}", image.width(), image.height());
/// # Ok::<(), bitmapfx::BitmapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode headers and the full pixel array.
    ///
    /// All validation happens before the pixel buffer is allocated.
    pub fn decode(self) -> Result<Bitmap, BitmapError> {
        let mut cursor = Cursor::new(self.data);
        let headers = bmp::decode_headers(&mut cursor)?;
        let (width, height) = headers.info.dimensions()?;
        let layout = PixelLayout::from_headers(&headers)?;

        if let Some(limits) = self.limits {
            limits.check(width, height)?;
            let out_bytes = (width as usize)
                .saturating_mul(height as usize)
                .saturating_mul(core::mem::size_of::<u32>());
            limits.check_memory(out_bytes)?;
        }

        let pixels =
            bmp::decode::decode_pixels(&mut cursor, &layout, width as usize, height as usize)?;
        if cursor.remaining() > 0 {
            warn!(
                "ignoring {} bytes after the pixel array",
                cursor.remaining()
            );
        }
        debug!("decoded {} pixels", pixels.len());
        Ok(Bitmap::from_parts(headers, layout, pixels))
    }
}

/// Decode a BMP byte stream without resource limits.
pub fn decode(data: &[u8]) -> Result<Bitmap, BitmapError> {
    DecodeRequest::new(data).decode()
}
