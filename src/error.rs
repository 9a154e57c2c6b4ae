use alloc::string::String;

/// Errors from BMP decoding, encoding and pixel access.
///
/// Every variant is fatal for the image it was raised on: nothing is retried
/// and no partially transformed output is produced.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("bitmap tag {0:02x?} isn't BM")]
    InvalidSignature([u8; 2]),

    #[error("number of color planes is {0}, expected 1")]
    InvalidPlaneCount(u16),

    #[error("color depth is {0} bits, expected 24 or 32")]
    UnsupportedColorDepth(u16),

    #[error("compression method is {0}, expected 0 or 3")]
    UnsupportedCompression(u32),

    #[error("{depth}-bit images require compression {expected}, header declares {compression}")]
    DepthCompressionMismatch {
        depth: u16,
        compression: u32,
        expected: u32,
    },

    #[error("bitfield compression without color masks")]
    MissingColorMasks,

    #[error("unsupported channel mask {0:#010x}: only byte-aligned masks are supported")]
    UnsupportedMask(u32),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("pixel buffer holds {actual} pixels, header describes {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    IndexOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
