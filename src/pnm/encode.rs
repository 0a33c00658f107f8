//! PNM encoder: P1–P6.
//!
//! ASCII variants write one space between samples and one row per line.

use alloc::format;
use alloc::vec::Vec;

use rgb::{ComponentBytes, RGB8};

use crate::grid::{Bitmap, Graymap, Grid, Pixmap};
use crate::info::{Encoding, ImageKind, Magic};
use crate::pixel::Sample;

fn header<S: Sample>(grid: &Grid<S>, magic: Magic, sample_bytes: usize) -> Vec<u8> {
    let (w, h) = grid.size();
    let header = if magic.has_max_value() {
        format!("{magic}\n{w} {h}\n{}\n", grid.max_value())
    } else {
        format!("{magic}\n{w} {h}\n")
    };
    log::trace!("encoding {magic} {w}x{h}");
    let mut out = Vec::with_capacity(header.len().saturating_add(sample_bytes));
    out.extend_from_slice(header.as_bytes());
    out
}

/// Append the decimal digits of `v`.
fn push_decimal(out: &mut Vec<u8>, v: u8) {
    if v >= 100 {
        out.push(b'0' + v / 100);
    }
    if v >= 10 {
        out.push(b'0' + (v / 10) % 10);
    }
    out.push(b'0' + v % 10);
}

/// Write every row as space-separated tokens.
fn write_ascii_rows<S: Sample>(
    out: &mut Vec<u8>,
    grid: &Grid<S>,
    mut write_sample: impl FnMut(&mut Vec<u8>, S),
) {
    for row in grid.rows() {
        for (x, &s) in row.iter().enumerate() {
            if x > 0 {
                out.push(b' ');
            }
            write_sample(out, s);
        }
        out.push(b'\n');
    }
}

pub(crate) fn encode_bitmap(grid: &Bitmap, encoding: Encoding) -> Vec<u8> {
    let (w, h) = grid.size();
    let magic = Magic::new(ImageKind::Bitmap, encoding);
    match encoding {
        Encoding::Ascii => {
            let mut out = header(grid, magic, w.saturating_mul(h).saturating_mul(2));
            write_ascii_rows(&mut out, grid, |out, bit| {
                out.push(if bit { b'1' } else { b'0' })
            });
            out
        }
        Encoding::Binary => {
            let row_bytes = w.div_ceil(8);
            let mut out = header(grid, magic, row_bytes * h);
            for row in grid.rows() {
                pack_row(row, &mut out);
            }
            out
        }
    }
}

/// Pack one row MSB first; padding bits in the last byte stay zero.
pub(crate) fn pack_row(row: &[bool], out: &mut Vec<u8>) {
    for chunk in row.chunks(8) {
        let byte = chunk
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &bit)| acc | (u8::from(bit) << (7 - i)));
        out.push(byte);
    }
}

pub(crate) fn encode_graymap(grid: &Graymap, encoding: Encoding) -> Vec<u8> {
    let (w, h) = grid.size();
    let magic = Magic::new(ImageKind::Graymap, encoding);
    match encoding {
        Encoding::Ascii => {
            let mut out = header(grid, magic, w.saturating_mul(h).saturating_mul(4));
            write_ascii_rows(&mut out, grid, push_decimal);
            out
        }
        Encoding::Binary => {
            let mut out = header(grid, magic, w * h);
            out.extend_from_slice(grid.pixels());
            out
        }
    }
}

pub(crate) fn encode_pixmap(grid: &Pixmap, encoding: Encoding) -> Vec<u8> {
    let (w, h) = grid.size();
    let magic = Magic::new(ImageKind::Pixmap, encoding);
    match encoding {
        Encoding::Ascii => {
            let mut out = header(grid, magic, w.saturating_mul(h).saturating_mul(12));
            write_ascii_rows(&mut out, grid, |out, px: RGB8| {
                push_decimal(out, px.r);
                out.push(b' ');
                push_decimal(out, px.g);
                out.push(b' ');
                push_decimal(out, px.b);
            });
            out
        }
        Encoding::Binary => {
            let mut out = header(grid, magic, w.saturating_mul(h).saturating_mul(3));
            out.extend_from_slice(grid.pixels().as_bytes());
            out
        }
    }
}
