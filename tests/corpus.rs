//! Test corpus: roundtrips and transforms over various patterns, sizes, and depths.

mod common;

use bitmapfx::*;
use common::*;

fn corpus() -> Vec<(String, Vec<u8>)> {
    let mut files = Vec::new();
    for (w, h) in [(1, 1), (2, 3), (3, 2), (5, 5), (7, 4), (16, 16), (17, 9), (33, 18)] {
        files.push((format!("rgb24 checker {w}x{h}"), bmp24(w, h as i32, &checkerboard_rgb(w, h))));
        files.push((format!("rgb24 noise {w}x{h}"), bmp24(w, h as i32, &noise_rgb(w, h))));
        files.push((
            format!("rgb24 top-down {w}x{h}"),
            bmp24(w, -(h as i32), &noise_rgb(w, h)),
        ));
        files.push((
            format!("argb32 noise {w}x{h}"),
            bmp32(w, h as i32, MASKS_ARGB, &noise_u32(w * h)),
        ));
        files.push((
            format!("abgr32 noise {w}x{h}"),
            bmp32(w, h as i32, MASKS_ABGR, &noise_u32(w * h)),
        ));
    }
    files
}

fn expected_roundtrip(input: &[u8]) -> Vec<u8> {
    let decoded = decode(input).unwrap();
    if decoded.headers().masks.is_some() {
        with_color_space_zeroed(input.to_vec())
    } else {
        input.to_vec()
    }
}

// ── Roundtrips ───────────────────────────────────────────────────────

#[test]
fn corpus_roundtrips_byte_exact() {
    for (name, input) in corpus() {
        let decoded = decode(&input).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(decoded.encode().unwrap(), expected_roundtrip(&input), "{name}");
    }
}

#[test]
fn corpus_reencode_is_stable() {
    for (name, input) in corpus() {
        let once = decode(&input).unwrap().encode().unwrap();
        let twice = decode(&once).unwrap().encode().unwrap();
        assert_eq!(once, twice, "{name}");
    }
}

#[test]
fn abgr_masks_match_24bit_channel_order() {
    let pixels = noise_rgb(4, 3);
    let packed: Vec<u32> = pixels
        .iter()
        .map(|&[r, g, b]| r as u32 | (g as u32) << 8 | (b as u32) << 16)
        .collect();
    let rgb24 = decode(&bmp24(4, 3, &pixels)).unwrap();
    let rgb32 = decode(&bmp32(4, 3, MASKS_ABGR, &packed)).unwrap();
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(rgb24.red(x, y).unwrap(), rgb32.red(x, y).unwrap());
            assert_eq!(rgb24.green(x, y).unwrap(), rgb32.green(x, y).unwrap());
            assert_eq!(rgb24.blue(x, y).unwrap(), rgb32.blue(x, y).unwrap());
        }
    }
}

// ── Transforms ───────────────────────────────────────────────────────

fn expected_dimensions(t: Transform, width: usize, height: usize) -> (usize, usize) {
    match t {
        Transform::Rotate90
        | Transform::Rotate270
        | Transform::FlipDiagonal1
        | Transform::FlipDiagonal2 => (height, width),
        Transform::ScaleUp => (width * 2, height * 2),
        Transform::ScaleDown if width == 1 || height == 1 => (width, height),
        Transform::ScaleDown => (width / 2, height / 2),
        _ => (width, height),
    }
}

#[test]
fn every_transform_output_redecodes() {
    let _ = env_logger::builder().is_test(true).try_init();
    for (name, input) in corpus() {
        let original = decode(&input).unwrap();
        for t in Transform::ALL {
            let mut image = original.clone();
            t.apply(&mut image)
                .unwrap_or_else(|e| panic!("{name} {t}: {e}"));

            let (width, height) = expected_dimensions(t, original.width(), original.height());
            assert_eq!((image.width(), image.height()), (width, height), "{name} {t}");
            assert_eq!(image.pixels().len(), width * height, "{name} {t}");

            let encoded = image.encode().unwrap();
            let redecoded = decode(&encoded).unwrap_or_else(|e| panic!("{name} {t}: {e}"));
            assert_eq!(redecoded.pixels(), image.pixels(), "{name} {t}");
            assert_eq!(redecoded.width(), width, "{name} {t}");
            assert_eq!(redecoded.height(), height, "{name} {t}");
        }
    }
}

#[test]
fn transforms_keep_header_identity_fields() {
    for (name, input) in corpus() {
        let original = decode(&input).unwrap();
        for t in Transform::ALL {
            let mut image = original.clone();
            t.apply(&mut image).unwrap();
            let (before, after) = (original.headers(), image.headers());
            assert_eq!(before.file, after.file, "{name} {t}");
            assert_eq!(before.masks, after.masks, "{name} {t}");
            assert_eq!(before.info.bit_count, after.info.bit_count, "{name} {t}");
            assert_eq!(before.info.compression, after.info.compression, "{name} {t}");
            assert_eq!(
                before.info.height.signum(),
                after.info.height.signum(),
                "{name} {t}"
            );
        }
    }
}

#[test]
fn transforms_never_touch_alpha() {
    for (w, h) in [(3, 3), (16, 16), (20, 7)] {
        let original = decode(&bmp32(w, h as i32, MASKS_ARGB, &noise_u32(w * h))).unwrap();
        for t in [
            Transform::CellShade,
            Transform::Grayscale,
            Transform::Pixelate,
            Transform::Blur,
        ] {
            let mut image = original.clone();
            t.apply(&mut image).unwrap();
            for y in 0..h {
                for x in 0..w {
                    assert_eq!(
                        image.alpha(x, y).unwrap(),
                        original.alpha(x, y).unwrap(),
                        "{t} at ({x}, {y})"
                    );
                }
            }
        }
    }
}
