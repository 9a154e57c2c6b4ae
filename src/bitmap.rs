use alloc::vec::Vec;

use log::debug;

use crate::bmp::{self, Headers, InfoHeader};
use crate::error::BitmapError;
use crate::pixel::{Channel, PixelLayout, PixelView};

/// A decoded image: the headers it was read with plus its pixel buffer.
///
/// The buffer is row-major in the container's native scan order and always
/// holds `width * height` packed pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    headers: Headers,
    layout: PixelLayout,
    pixels: Vec<u32>,
}

impl Bitmap {
    /// Assemble an image from headers and a packed pixel buffer.
    pub fn new(headers: Headers, pixels: Vec<u32>) -> Result<Self, BitmapError> {
        let layout = PixelLayout::from_headers(&headers)?;
        let (width, height) = headers.info.dimensions()?;
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BitmapError::DimensionsTooLarge {
                width: u64::from(width),
                height: u64::from(height),
            })?;
        if pixels.len() != expected {
            return Err(BitmapError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            headers,
            layout,
            pixels,
        })
    }

    pub(crate) fn from_parts(headers: Headers, layout: PixelLayout, pixels: Vec<u32>) -> Self {
        Self {
            headers,
            layout,
            pixels,
        }
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn layout(&self) -> &PixelLayout {
        &self.layout
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    pub fn width(&self) -> usize {
        self.headers.info.width.unsigned_abs() as usize
    }

    pub fn height(&self) -> usize {
        self.headers.info.height.unsigned_abs() as usize
    }

    /// Bounds-checked view for coordinate-based pixel access.
    pub fn view(&self) -> PixelView<'_> {
        PixelView::new(&self.layout, self.width(), self.height(), &self.pixels)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Result<u32, BitmapError> {
        self.view().pixel(x, y)
    }

    pub fn channel(&self, x: usize, y: usize, channel: Channel) -> Result<u32, BitmapError> {
        self.view().channel(x, y, channel)
    }

    pub fn red(&self, x: usize, y: usize) -> Result<u32, BitmapError> {
        self.channel(x, y, Channel::Red)
    }

    pub fn green(&self, x: usize, y: usize) -> Result<u32, BitmapError> {
        self.channel(x, y, Channel::Green)
    }

    pub fn blue(&self, x: usize, y: usize) -> Result<u32, BitmapError> {
        self.channel(x, y, Channel::Blue)
    }

    /// Alpha of a 32-bit pixel. 24-bit images have no alpha channel and
    /// return the whole packed pixel instead.
    pub fn alpha(&self, x: usize, y: usize) -> Result<u32, BitmapError> {
        self.channel(x, y, Channel::Alpha)
    }

    /// Typed RGBA view of one pixel. Images without alpha report 255.
    #[cfg(feature = "rgb")]
    pub fn rgba8(&self, x: usize, y: usize) -> Result<rgb::RGBA8, BitmapError> {
        let px = self.pixel(x, y)?;
        let color = self.layout.rgb(px);
        let alpha = match &self.layout {
            PixelLayout::Bitfields(bits) if bits.has_alpha() => {
                self.layout.channel(px, Channel::Alpha) as u8
            }
            _ => 255,
        };
        Ok(rgb::RGBA8::new(
            color.red as u8,
            color.green as u8,
            color.blue as u8,
            alpha,
        ))
    }

    /// Zero-copy 2D view of the packed pixels. `None` for empty images.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> Option<imgref::ImgRef<'_, u32>> {
        if self.pixels.is_empty() {
            return None;
        }
        Some(imgref::ImgRef::new(
            &self.pixels,
            self.width(),
            self.height(),
        ))
    }

    /// Split borrow for transforms that update dimensions along with pixels.
    pub(crate) fn geometry_mut(&mut self) -> (&mut InfoHeader, &mut Vec<u32>) {
        (&mut self.headers.info, &mut self.pixels)
    }

    /// Swap in a same-sized replacement buffer.
    pub(crate) fn replace_pixels(&mut self, pixels: Vec<u32>) {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        self.pixels = pixels;
    }

    /// Encode back to the container format.
    pub fn encode(&self) -> Result<Vec<u8>, BitmapError> {
        let mut out = Vec::with_capacity(
            self.headers.encoded_len()
                + bmp::encode::encoded_pixels_len(&self.layout, self.width(), self.height()),
        );
        self.encode_into(&mut out)?;
        Ok(out)
    }

    /// Append the encoded image to `out`. Nothing is appended on error.
    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<(), BitmapError> {
        let start = out.len();
        bmp::encode_headers(out, &self.headers);
        if let Err(err) = bmp::encode::encode_pixels(
            out,
            &self.pixels,
            &self.layout,
            self.width(),
            self.height(),
        ) {
            out.truncate(start);
            return Err(err);
        }
        debug!(
            "encoded {}x{} image into {} bytes",
            self.width(),
            self.height(),
            out.len() - start
        );
        Ok(())
    }
}
