//! BMP byte-stream builders shared by the integration tests.
#![allow(dead_code)]

/// Standard BGRA masks in R, G, B, A order.
pub const MASKS_ARGB: [u32; 4] = [0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0xff00_0000];
/// Masks with red in the low byte, matching the 24-bit packing.
pub const MASKS_ABGR: [u32; 4] = [0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0xff00_0000];

fn file_header(out: &mut Vec<u8>, file_size: usize, offset: u32) {
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0x12, 0x34, 0x56, 0x78]); // reserved, must survive
    out.extend_from_slice(&offset.to_le_bytes());
}

#[allow(clippy::too_many_arguments)]
fn info_header(
    out: &mut Vec<u8>,
    header_size: u32,
    width: i32,
    height: i32,
    depth: u16,
    compression: u32,
    image_size: usize,
) {
    out.extend_from_slice(&header_size.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&depth.to_le_bytes());
    out.extend_from_slice(&compression.to_le_bytes());
    out.extend_from_slice(&(image_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
}

/// 24-bit image. `pixels` are `[red, green, blue]` in buffer order, written
/// in that byte order with each row padded to 4 bytes.
pub fn bmp24(width: usize, height: i32, pixels: &[[u8; 3]]) -> Vec<u8> {
    let rows = height.unsigned_abs() as usize;
    assert_eq!(pixels.len(), width * rows);
    let padding = (4 - (width * 3) % 4) % 4;
    let image_size = (width * 3 + padding) * rows;

    let mut out = Vec::new();
    file_header(&mut out, 54 + image_size, 54);
    info_header(&mut out, 40, width as i32, height, 24, 0, image_size);
    for row in pixels.chunks(width.max(1)) {
        for px in row {
            out.extend_from_slice(px);
        }
        out.extend(std::iter::repeat_n(0u8, padding));
    }
    out
}

/// Bytes of the 64-byte color-space block written by [`bmp32`].
pub const COLOR_SPACE_FILL: u8 = 0xc5;

/// 32-bit bitfield image with a 124-byte info header. The color-space block
/// is filled with [`COLOR_SPACE_FILL`] so tests can see it being zeroed.
pub fn bmp32(width: usize, height: i32, masks: [u32; 4], pixels: &[u32]) -> Vec<u8> {
    let rows = height.unsigned_abs() as usize;
    assert_eq!(pixels.len(), width * rows);
    let image_size = width * rows * 4;

    let mut out = Vec::new();
    file_header(&mut out, 138 + image_size, 138);
    info_header(&mut out, 124, width as i32, height, 32, 3, image_size);
    for mask in masks {
        out.extend_from_slice(&mask.to_le_bytes());
    }
    out.extend_from_slice(b"BGRs"); // LCS_sRGB
    out.extend(std::iter::repeat_n(COLOR_SPACE_FILL, 64));
    for px in pixels {
        out.extend_from_slice(&px.to_le_bytes());
    }
    out
}

/// What [`bmp32`] output looks like after a decode/encode round trip.
pub fn with_color_space_zeroed(mut bytes: Vec<u8>) -> Vec<u8> {
    bytes[74..138].fill(0);
    bytes
}

pub fn checkerboard_rgb(width: usize, height: usize) -> Vec<[u8; 3]> {
    (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            if (x + y) % 2 == 0 {
                [200, 220, 240]
            } else {
                [10, 40, 70]
            }
        })
        .collect()
}

pub fn noise_rgb(width: usize, height: usize) -> Vec<[u8; 3]> {
    let mut state = Xorshift(0xDEAD_BEEF);
    (0..width * height)
        .map(|_| {
            let v = state.next();
            [v as u8, (v >> 8) as u8, (v >> 16) as u8]
        })
        .collect()
}

pub fn noise_u32(count: usize) -> Vec<u32> {
    let mut state = Xorshift(0x1234_5678);
    (0..count).map(|_| state.next()).collect()
}

struct Xorshift(u32);

impl Xorshift {
    fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }
}
