use enough::Unstoppable;
use rgb::RGB8;
use zenpbm::*;

fn sample_bitmap(w: usize, h: usize) -> Bitmap {
    let pixels = (0..w * h).map(|i| (i * 7 + i / w) % 3 == 0).collect();
    Bitmap::from_pixels(pixels, w, h, 1).unwrap()
}

fn sample_graymap(w: usize, h: usize, max: u8) -> Graymap {
    let pixels = (0..w * h).map(|i| (i * 37 % (max as usize + 1)) as u8).collect();
    Graymap::from_pixels(pixels, w, h, max).unwrap()
}

fn sample_pixmap(w: usize, h: usize, max: u8) -> Pixmap {
    let m = max as usize + 1;
    let pixels = (0..w * h)
        .map(|i| RGB8::new((i % m) as u8, (i * 11 % m) as u8, (i * 29 % m) as u8))
        .collect();
    Pixmap::from_pixels(pixels, w, h, max).unwrap()
}

// ── Scenarios ───────────────────────────────────────────────────────

#[test]
fn p1_decode_invert_encode() {
    let mut image = decode(b"P1\n3 2\n1 0 1\n0 1 0\n", Unstoppable).unwrap();
    assert_eq!(image.magic(), Magic::P1);
    let bitmap = image.as_bitmap().unwrap();
    let rows: Vec<Vec<bool>> = bitmap.rows().map(|r| r.to_vec()).collect();
    assert_eq!(rows, [[true, false, true], [false, true, false]]);

    image.invert();
    let bitmap = image.as_bitmap().unwrap();
    let rows: Vec<Vec<bool>> = bitmap.rows().map(|r| r.to_vec()).collect();
    assert_eq!(rows, [[false, true, false], [true, false, true]]);

    assert_eq!(image.encode(), b"P1\n3 2\n0 1 0\n1 0 1\n");
}

#[test]
fn graymap_to_bitmap_relative_threshold() {
    let gray = Graymap::from_pixels(vec![200; 4], 2, 2, 255).unwrap();
    let bitmap = gray.to_bitmap();
    assert_eq!(bitmap.size(), (2, 2));
    assert!(bitmap.pixels().iter().all(|&dark| dark));
}

// ── Round trips ─────────────────────────────────────────────────────

#[test]
fn bitmap_roundtrip_both_encodings() {
    for (w, h) in [(1, 1), (3, 2), (8, 3), (9, 4), (17, 5)] {
        let grid = sample_bitmap(w, h);
        for encoding in [Encoding::Ascii, Encoding::Binary] {
            let encoded = encode_pbm(&grid, encoding);
            let decoded = decode(&encoded, Unstoppable).unwrap();
            assert_eq!(decoded.encoding(), encoding);
            assert_eq!(decoded.as_bitmap(), Some(&grid), "{w}x{h} {encoding:?}");
        }
    }
}

#[test]
fn graymap_roundtrip_both_encodings() {
    for max in [1, 15, 200, 255] {
        let grid = sample_graymap(5, 3, max);
        for encoding in [Encoding::Ascii, Encoding::Binary] {
            let decoded = decode(&encode_pgm(&grid, encoding), Unstoppable).unwrap();
            assert_eq!(decoded.as_graymap(), Some(&grid), "max {max} {encoding:?}");
        }
    }
}

#[test]
fn pixmap_roundtrip_both_encodings() {
    for max in [1, 100, 255] {
        let grid = sample_pixmap(4, 6, max);
        for encoding in [Encoding::Ascii, Encoding::Binary] {
            let decoded = decode(&encode_ppm(&grid, encoding), Unstoppable).unwrap();
            assert_eq!(decoded.as_pixmap(), Some(&grid), "max {max} {encoding:?}");
        }
    }
}

#[test]
fn image_reencode_is_byte_identical() {
    let original = b"P3\n2 1\n15\n1 2 3 15 0 7\n";
    let image = decode(original, Unstoppable).unwrap();
    assert_eq!(image.encode(), original);
}

#[test]
fn smallest_max_value_roundtrips() {
    let grid = Graymap::from_pixels(vec![0, 1, 1, 0], 2, 2, 1).unwrap();
    for encoding in [Encoding::Ascii, Encoding::Binary] {
        let encoded = encode_pgm(&grid, encoding);
        let decoded = decode(&encoded, Unstoppable).unwrap();
        assert_eq!(decoded.as_graymap(), Some(&grid));
    }
    // a max value of 0 is not encodable, so no grid may carry it
    assert!(Graymap::from_pixels(vec![0, 0], 2, 1, 0).is_err());
    assert!(Pixmap::from_pixels(vec![RGB8::new(0, 0, 0)], 1, 1, 0).is_err());
}

// ── Encoding layout ─────────────────────────────────────────────────

#[test]
fn p2_header_and_rows() {
    let grid = Graymap::from_pixels(vec![0, 128, 255, 7], 2, 2, 255).unwrap();
    assert_eq!(
        encode_pgm(&grid, Encoding::Ascii),
        b"P2\n2 2\n255\n0 128\n255 7\n"
    );
}

#[test]
fn p4_rows_are_padded_to_bytes() {
    let mut grid = Bitmap::new(10, 1);
    grid.set(0, 0, true).unwrap();
    grid.set(9, 0, true).unwrap();
    let encoded = encode_pbm(&grid, Encoding::Binary);
    assert_eq!(encoded, b"P4\n10 1\n\x80\x40");
}

#[test]
fn p4_ignores_padding_bits_on_read() {
    let image = decode(b"P4\n3 1\n\xbf", Unstoppable).unwrap();
    assert_eq!(image.as_bitmap().unwrap().pixels(), &[true, false, true]);
}

#[test]
fn p6_is_triplets() {
    let grid = Pixmap::from_pixels(vec![RGB8::new(1, 2, 3)], 1, 1, 255).unwrap();
    assert_eq!(encode_ppm(&grid, Encoding::Binary), b"P6\n1 1\n255\n\x01\x02\x03");
}

// ── Tolerant ASCII parsing ──────────────────────────────────────────

#[test]
fn ascii_tokens_may_span_lines() {
    let image = decode(b"P2\n3 2\n9\n1 2\n3 4 5\n\n6", Unstoppable).unwrap();
    assert_eq!(image.as_graymap().unwrap().pixels(), &[1, 2, 3, 4, 5, 6]);

    let image = decode(b"P3 1 2 255 10 20\n30 40\n50 60", Unstoppable).unwrap();
    let pixmap = image.as_pixmap().unwrap();
    assert_eq!(pixmap.get(0, 0).unwrap(), RGB8::new(10, 20, 30));
    assert_eq!(pixmap.get(0, 1).unwrap(), RGB8::new(40, 50, 60));
}

#[test]
fn comments_are_skipped() {
    let data = b"P1\n# created by hand\n2 # width\n2\n1 0\n# middle\n0 1\n";
    let image = decode(data, Unstoppable).unwrap();
    assert_eq!(image.as_bitmap().unwrap().pixels(), &[true, false, false, true]);
}

// ── Errors ──────────────────────────────────────────────────────────

#[test]
fn unknown_magic() {
    match decode(b"P7\n1 1\n", Unstoppable) {
        Err(PbmError::UnsupportedMagic(token)) => assert_eq!(token, "P7"),
        other => panic!("expected UnsupportedMagic, got {other:?}"),
    }
}

#[test]
fn malformed_headers() {
    let cases: &[&[u8]] = &[
        b"",
        b"P1\n",
        b"P1\n3\n",
        b"P1\nthree 2\n",
        b"P2\n2 2\n",
        b"P2\n2 2\nmax\n",
        b"P2\n2 2\n0\n",
        b"P2\n2 2\n256\n",
        b"P1\n0 2\n",
    ];
    for data in cases {
        match decode(data, Unstoppable) {
            Err(PbmError::MalformedHeader(_)) => {}
            other => panic!(
                "{:?}: expected MalformedHeader, got {other:?}",
                String::from_utf8_lossy(data)
            ),
        }
    }
}

#[test]
fn truncated_ascii() {
    match decode(b"P3\n2 1\n255\n1 2 3 4 5\n", Unstoppable) {
        Err(PbmError::TruncatedData { needed, actual }) => {
            assert_eq!(needed, 6);
            assert_eq!(actual, 5);
        }
        other => panic!("expected TruncatedData, got {other:?}"),
    }
}

#[test]
fn truncated_ascii_with_huge_header() {
    // 60000 x 60000 fits a 32-bit usize; the stream holds a single sample
    let cases: [&[u8]; 3] = [
        b"P1\n60000 60000\n1\n",
        b"P2\n60000 60000\n255\n1\n",
        b"P3\n30000 30000\n255\n1\n",
    ];
    for data in cases {
        match decode(data, Unstoppable) {
            Err(PbmError::TruncatedData { actual, .. }) => assert_eq!(actual, 1),
            other => panic!(
                "{:?}: expected TruncatedData, got {other:?}",
                String::from_utf8_lossy(data)
            ),
        }
    }
}

#[test]
fn truncated_binary() {
    match decode(b"P4\n9 2\n\xff\xff\xff", Unstoppable) {
        Err(PbmError::TruncatedData { needed, actual }) => {
            assert_eq!(needed, 4);
            assert_eq!(actual, 3);
        }
        other => panic!("expected TruncatedData, got {other:?}"),
    }
    assert!(matches!(
        decode(b"P5\n2 2\n255\n", Unstoppable),
        Err(PbmError::TruncatedData { needed: 4, actual: 0 })
    ));
}

#[test]
fn invalid_samples() {
    let cases: [&[u8]; 4] = [
        b"P1\n2 1\n1 2\n",
        b"P2\n2 1\n10\n3 11\n",
        b"P2\n2 1\n10\n3 x\n",
        b"P5\n1 1\n100\n\xc8",
    ];
    for data in cases {
        assert!(
            matches!(decode(data, Unstoppable), Err(PbmError::InvalidData(_))),
            "{:?}",
            String::from_utf8_lossy(data)
        );
    }
}

// ── Probing, limits, cancellation ───────────────────────────────────

#[test]
fn image_info_probe() {
    let info = ImageInfo::from_bytes(b"P6\n640 480\n255\n").unwrap();
    assert_eq!(info.width, 640);
    assert_eq!(info.height, 480);
    assert_eq!(info.magic, Magic::P6);
    assert_eq!(info.kind(), ImageKind::Pixmap);
    assert_eq!(info.max_value, 255);
}

#[test]
fn limits_reject_large() {
    let encoded = encode_pgm(&Graymap::new(4, 4), Encoding::Binary);
    let limits = Limits {
        max_pixels: Some(15),
        ..Default::default()
    };
    match decode_with_limits(&encoded, &limits, Unstoppable) {
        Err(PbmError::LimitExceeded(_)) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_memory_bytes: Some(47),
        ..Default::default()
    };
    let encoded = encode_ppm(&Pixmap::new(4, 4), Encoding::Ascii);
    assert!(DecodeRequest::new(&encoded).with_limits(&limits).decode(Unstoppable).is_err());

    let limits = Limits {
        max_width: Some(4),
        max_height: Some(4),
        ..Default::default()
    };
    assert!(decode_with_limits(&encoded, &limits, Unstoppable).is_ok());
}

struct AlwaysStop;

impl Stop for AlwaysStop {
    fn check(&self) -> Result<(), enough::StopReason> {
        Err(enough::StopReason::Cancelled)
    }
}

#[test]
fn cancelled_decode_returns_nothing() {
    let encoded = encode_pbm(&Bitmap::new(2, 2), Encoding::Ascii);
    assert!(matches!(
        decode(&encoded, AlwaysStop),
        Err(PbmError::Cancelled(_))
    ));
}

// ── Encoding switch ─────────────────────────────────────────────────

#[test]
fn set_encoding_changes_magic() {
    let mut image = decode(b"P2\n1 1\n255\n9\n", Unstoppable).unwrap();
    image.set_encoding(Encoding::Binary);
    assert_eq!(image.magic(), Magic::P5);
    assert_eq!(image.encode(), b"P5\n1 1\n255\n\x09");
}

#[cfg(feature = "std")]
#[test]
fn reader_writer_adapters() {
    let mut input: &[u8] = b"P1\n1 1\n1\n";
    let image = read_image(&mut input, Unstoppable).unwrap();
    let mut out = Vec::new();
    write_image(&image, &mut out).unwrap();
    assert_eq!(out, b"P1\n1 1\n1\n");
}
