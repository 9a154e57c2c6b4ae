#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = bitmapfx::decode(data) else {
        return;
    };

    let reencoded = decoded.encode().expect("decoded image failed to encode");
    let Ok(decoded2) = bitmapfx::decode(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.width(), decoded2.width());
    assert_eq!(decoded.height(), decoded2.height());
    assert_eq!(decoded.headers().info, decoded2.headers().info);

    // Re-encoding is a fixed point after the first pass
    assert_eq!(decoded2.encode().unwrap(), reencoded);
});
