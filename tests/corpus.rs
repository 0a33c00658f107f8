//! Test corpus: roundtrip tests with various patterns, sizes, and encodings.

use enough::Unstoppable;
use rgb::RGB8;
use zenpbm::*;

fn checkerboard(w: usize, h: usize) -> Bitmap {
    let pixels = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x + y) % 2 == 0))
        .collect();
    Bitmap::from_pixels(pixels, w, h, 1).unwrap()
}

fn noise_pattern(len: usize) -> Vec<u8> {
    let mut state: u32 = 0xDEAD_BEEF;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

fn gradient(w: usize, h: usize) -> Graymap {
    let pixels = (0..h)
        .flat_map(|y| (0..w).map(move |x| ((x * 255) / w.max(1)) as u8 ^ (y as u8)))
        .collect();
    Graymap::from_pixels(pixels, w, h, 255).unwrap()
}

fn noise_pixmap(w: usize, h: usize) -> Pixmap {
    let pixels = noise_pattern(w * h * 3)
        .chunks_exact(3)
        .map(|c| RGB8::new(c[0], c[1], c[2]))
        .collect();
    Pixmap::from_pixels(pixels, w, h, 255).unwrap()
}

fn assert_roundtrip(image: &Image) {
    for encoding in [Encoding::Ascii, Encoding::Binary] {
        let mut image = image.clone();
        image.set_encoding(encoding);
        let encoded = image.encode();
        let decoded = decode(&encoded, Unstoppable).unwrap();
        assert_eq!(&decoded, &image, "{:?} {:?}", image.magic(), image.size());
        assert_eq!(decoded.encode(), encoded);
    }
}

// ── Patterns ────────────────────────────────────────────────────────

#[test]
fn checkerboard_bitmaps() {
    for (w, h) in [(1, 1), (2, 2), (7, 3), (8, 8), (15, 2), (16, 1), (33, 9)] {
        assert_roundtrip(&Image::new(checkerboard(w, h), Encoding::Ascii));
    }
}

#[test]
fn gradient_graymaps() {
    for (w, h) in [(1, 1), (16, 16), (255, 2), (3, 64)] {
        assert_roundtrip(&Image::new(gradient(w, h), Encoding::Ascii));
    }
}

#[test]
fn noise_pixmaps() {
    for (w, h) in [(1, 1), (5, 7), (31, 4)] {
        assert_roundtrip(&Image::new(noise_pixmap(w, h), Encoding::Ascii));
    }
}

#[test]
fn low_max_value_graymap() {
    let pixels = noise_pattern(40).iter().map(|b| b % 4).collect();
    let grid = Graymap::from_pixels(pixels, 8, 5, 3).unwrap();
    assert_roundtrip(&Image::new(grid, Encoding::Ascii));
}

// ── Transforms survive encoding ─────────────────────────────────────

#[test]
fn transformed_images_roundtrip() {
    let base = Image::new(noise_pixmap(6, 4), Encoding::Binary);
    let mut flipped = base.clone();
    flipped.flip();
    flipped.flop();
    flipped.invert();
    assert_roundtrip(&flipped);
    assert_roundtrip(&base.rotate90cw());
    assert_roundtrip(&base.to_graymap().unwrap());
    assert_roundtrip(&base.to_bitmap());
}

#[test]
fn drawn_scene_roundtrip() {
    let mut grid = Pixmap::new(24, 18);
    let blue = RGB8::new(0, 0, 255);
    grid.draw_filled_rectangle(Point::new(-2, -2), 10, 6, RGB8::new(255, 255, 0));
    grid.draw_filled_circle(Point::new(12, 9), 5, blue);
    grid.draw_filled_triangle(Point::new(0, 17), Point::new(8, 10), Point::new(20, 17), RGB8::new(9, 9, 9));
    grid.draw_polygon(
        &[Point::new(15, 0), Point::new(23, 3), Point::new(30, 12)],
        RGB8::new(200, 10, 10),
    );
    assert_eq!(grid.get(12, 9).unwrap(), blue);
    assert_roundtrip(&Image::new(grid, Encoding::Binary));
}
