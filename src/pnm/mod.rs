//! PNM family: P1/P4 (PBM), P2/P5 (PGM), P3/P6 (PPM).
//!
//! Headers may carry `#` comments wherever whitespace is allowed. Samples
//! are 8-bit, so max values run 1..=255.

mod decode;
mod encode;

pub(crate) use decode::parse_header;

use alloc::vec::Vec;
use enough::Stop;

use crate::error::PbmError;
use crate::grid::{Bitmap, Graymap, Pixmap};
use crate::image::{Image, Raster};
use crate::info::{Encoding, ImageKind, Magic};
use crate::limits::Limits;

/// Parsed PNM header (internal).
pub(crate) struct PnmHeader {
    pub magic: Magic,
    pub width: usize,
    pub height: usize,
    pub max_value: u8,
    /// Start of the raster: first sample token (ASCII) or byte (binary).
    pub data_offset: usize,
}

/// Decode a full PNM stream into an [`Image`].
///
/// Nothing is returned unless every sample decoded.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, PbmError> {
    let header = parse_header(data)?;
    let (w, h) = (header.width, header.height);
    let kind = header.magic.kind();

    // in-memory size: bool and u8 are one byte, RGB8 three
    let out_bytes = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(kind.channels()))
        .ok_or(PbmError::DimensionsTooLarge {
            width: w,
            height: h,
        })?;
    if let Some(limits) = limits {
        limits.check(w, h)?;
        limits.check_memory(out_bytes)?;
    }

    stop.check()?;

    let raster = match (kind, header.magic.encoding()) {
        (ImageKind::Bitmap, Encoding::Ascii) => {
            Raster::Bitmap(decode::decode_bitmap_ascii(data, &header, stop)?)
        }
        (ImageKind::Bitmap, Encoding::Binary) => {
            Raster::Bitmap(decode::decode_bitmap_binary(data, &header, stop)?)
        }
        (ImageKind::Graymap, _) => Raster::Graymap(decode::decode_graymap(data, &header, stop)?),
        (ImageKind::Pixmap, _) => Raster::Pixmap(decode::decode_pixmap(data, &header, stop)?),
    };

    log::debug!(
        "decoded {} {w}x{h} max {}",
        header.magic,
        header.max_value
    );
    Ok(Image::new(raster, header.magic.encoding()))
}

pub(crate) fn encode_bitmap(grid: &Bitmap, encoding: Encoding) -> Vec<u8> {
    encode::encode_bitmap(grid, encoding)
}

pub(crate) fn encode_graymap(grid: &Graymap, encoding: Encoding) -> Vec<u8> {
    encode::encode_graymap(grid, encoding)
}

pub(crate) fn encode_pixmap(grid: &Pixmap, encoding: Encoding) -> Vec<u8> {
    encode::encode_pixmap(grid, encoding)
}
