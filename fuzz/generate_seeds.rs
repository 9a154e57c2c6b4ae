#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn info_header(bmp: &mut [u8], header_size: u32, width: i32, height: i32, bpp: u16, compression: u32) {
    bmp[14..18].copy_from_slice(&header_size.to_le_bytes());
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&bpp.to_le_bytes());
    bmp[30..34].copy_from_slice(&compression.to_le_bytes());
}

fn main() {
    use std::fs;
    for target in ["fuzz_decode", "fuzz_roundtrip"] {
        let dir = format!("fuzz/corpus/{target}");
        fs::create_dir_all(&dir).unwrap();

        // 24-bit 1x1
        let mut bmp = vec![0u8; 58]; // 54 header + 4 pixel (3 + 1 padding)
        bmp[0] = b'B'; bmp[1] = b'M';
        bmp[2..6].copy_from_slice(&58u32.to_le_bytes()); // file size
        bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
        info_header(&mut bmp, 40, 1, 1, 24, 0);
        bmp[54] = 0xff; bmp[55] = 0x00; bmp[56] = 0x00;
        fs::write(format!("{dir}/rgb24_1x1.bmp"), &bmp).unwrap();

        // 24-bit 3x2 top-down, 3 padding bytes per row
        let mut bmp = vec![0u8; 54 + 24];
        bmp[0] = b'B'; bmp[1] = b'M';
        bmp[2..6].copy_from_slice(&78u32.to_le_bytes());
        bmp[10..14].copy_from_slice(&54u32.to_le_bytes());
        info_header(&mut bmp, 40, 3, -2, 24, 0);
        for (i, b) in bmp[54..].iter_mut().enumerate() {
            *b = (i * 37) as u8;
        }
        fs::write(format!("{dir}/rgb24_3x2_topdown.bmp"), &bmp).unwrap();

        // 32-bit bitfields 2x2, ARGB masks
        let mut bmp = vec![0u8; 138 + 16];
        bmp[0] = b'B'; bmp[1] = b'M';
        bmp[2..6].copy_from_slice(&154u32.to_le_bytes());
        bmp[10..14].copy_from_slice(&138u32.to_le_bytes());
        info_header(&mut bmp, 124, 2, 2, 32, 3);
        for (i, mask) in [0x00ff_0000u32, 0x0000_ff00, 0x0000_00ff, 0xff00_0000].iter().enumerate() {
            bmp[54 + i * 4..58 + i * 4].copy_from_slice(&mask.to_le_bytes());
        }
        bmp[70..74].copy_from_slice(b"BGRs");
        for (i, b) in bmp[138..].iter_mut().enumerate() {
            *b = (i * 61) as u8;
        }
        fs::write(format!("{dir}/argb32_2x2.bmp"), &bmp).unwrap();

        // Truncated/malformed seeds for edge coverage
        fs::write(format!("{dir}/empty.bin"), b"").unwrap();
        fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
        fs::write(format!("{dir}/headers_only.bin"), &bmp[..138]).unwrap();

        println!("Generated seed corpus in {dir}/");
    }
}
