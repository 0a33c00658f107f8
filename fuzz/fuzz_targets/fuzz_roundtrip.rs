#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpbm::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce the same image
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let Ok(decoded) = decode_with_limits(data, &limits, enough::Unstoppable) else {
        return;
    };

    for encoding in [Encoding::Ascii, Encoding::Binary] {
        let mut image = decoded.clone();
        image.set_encoding(encoding);
        let reencoded = image.encode();
        let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
            panic!("re-encoded {:?} failed to decode", image.magic());
        };
        assert_eq!(image, decoded2, "roundtrip mismatch");
    }
});
