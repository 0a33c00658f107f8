//! PNM decoder: P1–P6 with 8-bit samples.

use alloc::format;
use alloc::vec::Vec;

use enough::Stop;
use rgb::AsPixels as _;
use rgb::RGB8;

use super::PnmHeader;
use crate::error::PbmError;
use crate::grid::{Bitmap, Graymap, Pixmap};
use crate::info::{Encoding, Magic, describe};

/// Whitespace/comment-aware token cursor over a Netpbm stream.
pub(crate) struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Byte offset just past the last token returned.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    fn skip_blank(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                // comment runs to end of line
                while let Some(&c) = self.data.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Next run of non-blank bytes, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> Option<&'a [u8]> {
        self.skip_blank();
        let data = self.data;
        let start = self.pos;
        while let Some(&b) = data.get(self.pos) {
            if b.is_ascii_whitespace() || b == b'#' {
                break;
            }
            self.pos += 1;
        }
        if self.pos > start {
            Some(&data[start..self.pos])
        } else {
            None
        }
    }
}

fn parse_number(token: &[u8]) -> Option<usize> {
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return None;
    }
    token.iter().try_fold(0usize, |acc, &d| {
        acc.checked_mul(10)?.checked_add(usize::from(d - b'0'))
    })
}

fn header_number(token: Option<&[u8]>, what: &str) -> Result<usize, PbmError> {
    let token = token.ok_or_else(|| PbmError::MalformedHeader(format!("missing {what}")))?;
    parse_number(token).ok_or_else(|| {
        PbmError::MalformedHeader(format!("{what} is not a number: {}", describe(token)))
    })
}

/// Parse the magic, dimensions and (for gray/pixmaps) max value.
pub(crate) fn parse_header(data: &[u8]) -> Result<PnmHeader, PbmError> {
    let mut tokens = Tokens::new(data);

    let magic = tokens
        .next_token()
        .ok_or_else(|| PbmError::MalformedHeader("missing magic token".into()))?;
    let magic = Magic::from_token(magic)?;

    let width = header_number(tokens.next_token(), "width")?;
    let height = header_number(tokens.next_token(), "height")?;
    if width == 0 || height == 0 {
        return Err(PbmError::MalformedHeader(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }

    let max_value = if magic.has_max_value() {
        let max = header_number(tokens.next_token(), "max value")?;
        if !(1..=255).contains(&max) {
            return Err(PbmError::MalformedHeader(format!(
                "max value {max} outside 1..=255"
            )));
        }
        max as u8
    } else {
        1
    };

    let mut data_offset = tokens.position();
    if magic.encoding() == Encoding::Binary {
        // exactly one whitespace byte separates header from raster
        match data.get(data_offset) {
            Some(b) if b.is_ascii_whitespace() => data_offset += 1,
            Some(_) => {
                return Err(PbmError::MalformedHeader(
                    "expected whitespace before raster data".into(),
                ));
            }
            None => {}
        }
    }

    Ok(PnmHeader {
        magic,
        width,
        height,
        max_value,
        data_offset,
    })
}

/// `P1`: `0`/`1` tokens, row-major, line breaks irrelevant.
pub(crate) fn decode_bitmap_ascii(
    data: &[u8],
    header: &PnmHeader,
    stop: &dyn Stop,
) -> Result<Bitmap, PbmError> {
    let (w, h) = (header.width, header.height);
    let needed = w * h;
    let raster = &data[header.data_offset..];
    let mut tokens = Tokens::new(raster);
    let mut out = Vec::with_capacity(ascii_capacity(needed, raster));

    for y in 0..h {
        if y % 16 == 0 {
            stop.check()?;
        }
        for _ in 0..w {
            let token = tokens.next_token().ok_or(PbmError::TruncatedData {
                needed,
                actual: out.len(),
            })?;
            out.push(match token {
                b"0" => false,
                b"1" => true,
                other => {
                    return Err(PbmError::InvalidData(format!(
                        "bitmap token {} at ({}, {y}) is not 0 or 1",
                        describe(other),
                        out.len() % w
                    )));
                }
            });
        }
    }

    Bitmap::from_pixels(out, w, h, 1)
}

/// Reservation for `needed` ASCII tokens: every token takes at least one
/// byte plus a separator, so `raster` bounds how many can follow.
fn ascii_capacity(needed: usize, raster: &[u8]) -> usize {
    needed.min(raster.len() / 2 + 1)
}

/// `P4`: rows of `ceil(width / 8)` bytes, MSB first, 1 = set.
pub(crate) fn decode_bitmap_binary(
    data: &[u8],
    header: &PnmHeader,
    stop: &dyn Stop,
) -> Result<Bitmap, PbmError> {
    let (w, h) = (header.width, header.height);
    let row_bytes = w.div_ceil(8);
    let needed = row_bytes * h;
    let raster = &data[header.data_offset.min(data.len())..];
    if raster.len() < needed {
        return Err(PbmError::TruncatedData {
            needed,
            actual: raster.len(),
        });
    }

    let mut out = Vec::with_capacity(w * h);
    for (y, row) in raster[..needed].chunks_exact(row_bytes).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        unpack_row(row, w, &mut out);
    }

    Bitmap::from_pixels(out, w, h, 1)
}

/// Expand one packed row; padding bits past `width` are ignored.
pub(crate) fn unpack_row(row: &[u8], width: usize, out: &mut Vec<bool>) {
    out.extend((0..width).map(|x| (row[x / 8] >> (7 - x % 8)) & 1 != 0));
}

/// `P2`/`P3`: decimal tokens, `channels` per pixel, each `<= max_value`.
fn decode_ascii_samples(
    data: &[u8],
    header: &PnmHeader,
    channels: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PbmError> {
    let per_row = header.width * channels;
    let needed = per_row * header.height;
    let max = header.max_value;
    let raster = &data[header.data_offset..];
    let mut tokens = Tokens::new(raster);
    let mut out = Vec::with_capacity(ascii_capacity(needed, raster));

    for y in 0..header.height {
        if y % 16 == 0 {
            stop.check()?;
        }
        for _ in 0..per_row {
            let token = tokens.next_token().ok_or(PbmError::TruncatedData {
                needed,
                actual: out.len(),
            })?;
            let value = parse_number(token).ok_or_else(|| {
                PbmError::InvalidData(format!(
                    "sample {} on row {y} is not a number",
                    describe(token)
                ))
            })?;
            if value > usize::from(max) {
                return Err(PbmError::InvalidData(format!(
                    "sample {value} on row {y} exceeds max value {max}"
                )));
            }
            out.push(value as u8);
        }
    }

    Ok(out)
}

/// `P5`/`P6`: one byte per sample, each `<= max_value`.
fn decode_binary_samples(
    data: &[u8],
    header: &PnmHeader,
    channels: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PbmError> {
    let per_row = header.width * channels;
    let needed = per_row * header.height;
    let raster = &data[header.data_offset.min(data.len())..];
    if raster.len() < needed {
        return Err(PbmError::TruncatedData {
            needed,
            actual: raster.len(),
        });
    }

    let max = header.max_value;
    for (y, row) in raster[..needed].chunks_exact(per_row).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        if let Some(&value) = row.iter().find(|&&v| v > max) {
            return Err(PbmError::InvalidData(format!(
                "sample {value} on row {y} exceeds max value {max}"
            )));
        }
    }

    Ok(raster[..needed].to_vec())
}

pub(crate) fn decode_graymap(
    data: &[u8],
    header: &PnmHeader,
    stop: &dyn Stop,
) -> Result<Graymap, PbmError> {
    let samples = match header.magic.encoding() {
        Encoding::Ascii => decode_ascii_samples(data, header, 1, stop)?,
        Encoding::Binary => decode_binary_samples(data, header, 1, stop)?,
    };
    Graymap::from_pixels(samples, header.width, header.height, header.max_value)
}

pub(crate) fn decode_pixmap(
    data: &[u8],
    header: &PnmHeader,
    stop: &dyn Stop,
) -> Result<Pixmap, PbmError> {
    let samples = match header.magic.encoding() {
        Encoding::Ascii => decode_ascii_samples(data, header, 3, stop)?,
        Encoding::Binary => decode_binary_samples(data, header, 3, stop)?,
    };
    let pixels: &[RGB8] = samples.as_pixels();
    Pixmap::from_pixels(
        pixels.to_vec(),
        header.width,
        header.height,
        header.max_value,
    )
}
