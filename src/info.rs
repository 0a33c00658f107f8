use alloc::format;
use alloc::string::String;

use crate::error::PbmError;

/// Sample depth family of a Netpbm image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// PBM: one bit per pixel.
    Bitmap,
    /// PGM: one 8-bit gray sample per pixel.
    Graymap,
    /// PPM: an 8-bit R, G, B triplet per pixel.
    Pixmap,
}

impl ImageKind {
    /// Number of stored samples per pixel.
    pub fn channels(self) -> usize {
        match self {
            Self::Bitmap | Self::Graymap => 1,
            Self::Pixmap => 3,
        }
    }
}

/// On-disk sub-encoding of the sample data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Whitespace-separated decimal tokens ("plain" Netpbm).
    #[default]
    Ascii,
    /// Raw bytes: row-packed bits for PBM, one byte per sample otherwise.
    Binary,
}

/// Netpbm magic token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Magic {
    /// `P1`: ASCII bitmap.
    P1,
    /// `P2`: ASCII graymap.
    P2,
    /// `P3`: ASCII pixmap.
    P3,
    /// `P4`: binary bitmap.
    P4,
    /// `P5`: binary graymap.
    P5,
    /// `P6`: binary pixmap.
    P6,
}

impl Magic {
    pub fn new(kind: ImageKind, encoding: Encoding) -> Self {
        match (kind, encoding) {
            (ImageKind::Bitmap, Encoding::Ascii) => Self::P1,
            (ImageKind::Graymap, Encoding::Ascii) => Self::P2,
            (ImageKind::Pixmap, Encoding::Ascii) => Self::P3,
            (ImageKind::Bitmap, Encoding::Binary) => Self::P4,
            (ImageKind::Graymap, Encoding::Binary) => Self::P5,
            (ImageKind::Pixmap, Encoding::Binary) => Self::P6,
        }
    }

    pub fn kind(self) -> ImageKind {
        match self {
            Self::P1 | Self::P4 => ImageKind::Bitmap,
            Self::P2 | Self::P5 => ImageKind::Graymap,
            Self::P3 | Self::P6 => ImageKind::Pixmap,
        }
    }

    pub fn encoding(self) -> Encoding {
        match self {
            Self::P1 | Self::P2 | Self::P3 => Encoding::Ascii,
            Self::P4 | Self::P5 | Self::P6 => Encoding::Binary,
        }
    }

    /// Whether the header carries a max value line (everything but PBM).
    pub fn has_max_value(self) -> bool {
        self.kind() != ImageKind::Bitmap
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
            Self::P5 => "P5",
            Self::P6 => "P6",
        }
    }

    /// Match a header token against the known magics.
    pub fn from_token(token: &[u8]) -> Result<Self, PbmError> {
        match token {
            b"P1" => Ok(Self::P1),
            b"P2" => Ok(Self::P2),
            b"P3" => Ok(Self::P3),
            b"P4" => Ok(Self::P4),
            b"P5" => Ok(Self::P5),
            b"P6" => Ok(Self::P6),
            other => Err(PbmError::UnsupportedMagic(
                String::from_utf8_lossy(other).into_owned(),
            )),
        }
    }
}

impl core::fmt::Display for Magic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header information, available without decoding the raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: usize,
    pub height: usize,
    pub magic: Magic,
    /// Declared max sample value; 1 for bitmaps.
    pub max_value: u8,
}

impl ImageInfo {
    /// Probe a Netpbm header.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PbmError> {
        let header = crate::pnm::parse_header(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            magic: header.magic,
            max_value: header.max_value,
        })
    }

    pub fn kind(&self) -> ImageKind {
        self.magic.kind()
    }
}

pub(crate) fn describe(token: &[u8]) -> String {
    format!("{:?}", String::from_utf8_lossy(token))
}
