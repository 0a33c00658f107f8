use enough::Stop;

use crate::error::PbmError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pnm;

/// Decode builder: input bytes plus optional resource limits.
///
/// ```
/// use zenpbm::{DecodeRequest, Limits, Unstoppable};
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let image = DecodeRequest::new(b"P1\n2 1\n1 0\n")
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// assert_eq!(image.size(), (2, 1));
/// # Ok::<(), zenpbm::PbmError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before allocating the grid.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode, checking `stop` before the raster and every 16 rows.
    pub fn decode(self, stop: impl Stop) -> Result<Image, PbmError> {
        pnm::decode(self.data, self.limits, &stop)
    }
}

/// Decode a PNM stream (`P1`–`P6`).
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Image, PbmError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode with resource limits.
pub fn decode_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Image, PbmError> {
    DecodeRequest::new(data).with_limits(limits).decode(stop)
}

/// Read a whole stream and decode it. The reader is borrowed, not closed.
#[cfg(feature = "std")]
pub fn read_image<R: std::io::Read>(reader: &mut R, stop: impl Stop) -> Result<Image, PbmError> {
    let mut data = alloc::vec::Vec::new();
    reader.read_to_end(&mut data)?;
    decode(&data, stop)
}
