use alloc::vec::Vec;

use crate::grid::{Bitmap, Graymap, Pixmap};
use crate::info::Encoding;
use crate::pnm;

/// Encode a bitmap as `P1` (ASCII) or `P4` (binary).
pub fn encode_pbm(grid: &Bitmap, encoding: Encoding) -> Vec<u8> {
    pnm::encode_bitmap(grid, encoding)
}

/// Encode a graymap as `P2` (ASCII) or `P5` (binary).
pub fn encode_pgm(grid: &Graymap, encoding: Encoding) -> Vec<u8> {
    pnm::encode_graymap(grid, encoding)
}

/// Encode a pixmap as `P3` (ASCII) or `P6` (binary).
pub fn encode_ppm(grid: &Pixmap, encoding: Encoding) -> Vec<u8> {
    pnm::encode_pixmap(grid, encoding)
}

/// Encode `image` and write it out. The writer is borrowed, not flushed.
#[cfg(feature = "std")]
pub fn write_image<W: std::io::Write>(
    image: &crate::Image,
    writer: &mut W,
) -> Result<(), crate::PbmError> {
    writer.write_all(&image.encode())?;
    Ok(())
}
