use alloc::string::String;
use enough::StopReason;

/// Errors from Netpbm decoding and grid access.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PbmError {
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("unsupported magic token: {0:?}")]
    UnsupportedMagic(String),

    #[error("truncated data: need {needed} samples, got {actual}")]
    TruncatedData { needed: usize, actual: usize },

    #[error("invalid sample data: {0}")]
    InvalidData(String),

    #[error("pixel ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: usize, height: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for PbmError {
    fn from(r: StopReason) -> Self {
        PbmError::Cancelled(r)
    }
}
