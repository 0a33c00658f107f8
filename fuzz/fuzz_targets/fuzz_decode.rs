#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must never panic
    let _ = zenpbm::ImageInfo::from_bytes(data);
    // Unbounded path: declared sizes far beyond the input must fail, not allocate
    let _ = zenpbm::decode(data, enough::Unstoppable);

    let limits = zenpbm::Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let Ok(mut image) = zenpbm::decode_with_limits(data, &limits, enough::Unstoppable) else {
        return;
    };

    // Every transform is total on a decoded image
    image.invert();
    image.flip();
    image.flop();
    let _ = image.rotate90cw();
    let _ = image.to_graymap();
    let _ = image.to_bitmap();
});
