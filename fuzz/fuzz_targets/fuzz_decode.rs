#![no_main]
use bitmapfx::{DecodeRequest, Limits, Transform};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };
    let Ok(image) = DecodeRequest::new(data).with_limits(&limits).decode() else {
        return;
    };

    // Neither must any transform of a decodable image
    for t in Transform::ALL {
        let mut copy = image.clone();
        let _ = t.apply(&mut copy);
        let _ = copy.encode();
    }
});
