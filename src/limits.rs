use alloc::format;

use crate::error::PbmError;

/// Caps applied to a header before any raster memory is allocated.
///
/// `None` leaves a dimension unbounded; [`Limits::default`] bounds nothing.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Cap on `width * height`.
    pub max_pixels: Option<u64>,
    /// Cap on the decoded grid's sample bytes (`width * height * channels`).
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check(&self, width: usize, height: usize) -> Result<(), PbmError> {
        let (width, height) = (width as u64, height as u64);
        exceeds("width", width, self.max_width)?;
        exceeds("height", height, self.max_height)?;
        exceeds("pixel count", width.saturating_mul(height), self.max_pixels)
    }

    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), PbmError> {
        exceeds("grid bytes", bytes as u64, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, cap: Option<u64>) -> Result<(), PbmError> {
    match cap {
        Some(cap) if value > cap => Err(PbmError::LimitExceeded(format!(
            "{what} {value} exceeds limit {cap}"
        ))),
        _ => Ok(()),
    }
}
