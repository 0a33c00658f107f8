use alloc::vec::Vec;

use crate::grid::{Bitmap, Graymap, Pixmap};
use crate::info::{Encoding, ImageKind, Magic};
use crate::pnm;

/// A grid of one of the three Netpbm sample kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Raster {
    Bitmap(Bitmap),
    Graymap(Graymap),
    Pixmap(Pixmap),
}

/// Run the same generic grid expression on whichever variant is present.
macro_rules! each_grid {
    ($raster:expr, $g:ident => $body:expr) => {
        match $raster {
            Raster::Bitmap($g) => $body,
            Raster::Graymap($g) => $body,
            Raster::Pixmap($g) => $body,
        }
    };
}

impl Raster {
    pub fn kind(&self) -> ImageKind {
        each_grid!(self, g => g.kind())
    }

    pub fn width(&self) -> usize {
        each_grid!(self, g => g.width())
    }

    pub fn height(&self) -> usize {
        each_grid!(self, g => g.height())
    }

    /// `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        each_grid!(self, g => g.size())
    }

    /// Declared max sample value; 1 for bitmaps.
    pub fn max_value(&self) -> u8 {
        each_grid!(self, g => g.max_value())
    }

    pub fn invert(&mut self) {
        each_grid!(self, g => g.invert())
    }

    pub fn flip(&mut self) {
        each_grid!(self, g => g.flip())
    }

    pub fn flop(&mut self) {
        each_grid!(self, g => g.flop())
    }

    pub fn rotate90cw(&self) -> Raster {
        match self {
            Raster::Bitmap(g) => Raster::Bitmap(g.rotate90cw()),
            Raster::Graymap(g) => Raster::Graymap(g.rotate90cw()),
            Raster::Pixmap(g) => Raster::Pixmap(g.rotate90cw()),
        }
    }

    /// Threshold to a bitmap; a bitmap is returned as a copy.
    pub fn to_bitmap(&self) -> Bitmap {
        match self {
            Raster::Bitmap(g) => g.clone(),
            Raster::Graymap(g) => g.to_bitmap(),
            Raster::Pixmap(g) => g.to_bitmap(),
        }
    }

    /// Luminosity-reduce a pixmap, or copy a graymap. Bitmaps have no
    /// gray representation and yield `None`.
    pub fn to_graymap(&self) -> Option<Graymap> {
        match self {
            Raster::Bitmap(_) => None,
            Raster::Graymap(g) => Some(g.clone()),
            Raster::Pixmap(g) => Some(g.to_graymap()),
        }
    }

    pub fn encode(&self, encoding: Encoding) -> Vec<u8> {
        match self {
            Raster::Bitmap(g) => pnm::encode_bitmap(g, encoding),
            Raster::Graymap(g) => pnm::encode_graymap(g, encoding),
            Raster::Pixmap(g) => pnm::encode_pixmap(g, encoding),
        }
    }
}

impl From<Bitmap> for Raster {
    fn from(g: Bitmap) -> Self {
        Raster::Bitmap(g)
    }
}

impl From<Graymap> for Raster {
    fn from(g: Graymap) -> Self {
        Raster::Graymap(g)
    }
}

impl From<Pixmap> for Raster {
    fn from(g: Pixmap) -> Self {
        Raster::Pixmap(g)
    }
}

/// A raster plus the sub-encoding it is written in.
///
/// The magic token is derived from both, so a kind/magic mismatch cannot
/// be represented.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    raster: Raster,
    encoding: Encoding,
}

impl Image {
    pub fn new(raster: impl Into<Raster>, encoding: Encoding) -> Self {
        Self {
            raster: raster.into(),
            encoding,
        }
    }

    pub fn magic(&self) -> Magic {
        Magic::new(self.raster.kind(), self.encoding)
    }

    pub fn kind(&self) -> ImageKind {
        self.raster.kind()
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Switch between ASCII and binary output for the same kind.
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn raster_mut(&mut self) -> &mut Raster {
        &mut self.raster
    }

    pub fn into_raster(self) -> Raster {
        self.raster
    }

    pub fn width(&self) -> usize {
        self.raster.width()
    }

    pub fn height(&self) -> usize {
        self.raster.height()
    }

    pub fn size(&self) -> (usize, usize) {
        self.raster.size()
    }

    pub fn as_bitmap(&self) -> Option<&Bitmap> {
        match &self.raster {
            Raster::Bitmap(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_graymap(&self) -> Option<&Graymap> {
        match &self.raster {
            Raster::Graymap(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_pixmap(&self) -> Option<&Pixmap> {
        match &self.raster {
            Raster::Pixmap(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_bitmap_mut(&mut self) -> Option<&mut Bitmap> {
        match &mut self.raster {
            Raster::Bitmap(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_graymap_mut(&mut self) -> Option<&mut Graymap> {
        match &mut self.raster {
            Raster::Graymap(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_pixmap_mut(&mut self) -> Option<&mut Pixmap> {
        match &mut self.raster {
            Raster::Pixmap(g) => Some(g),
            _ => None,
        }
    }

    pub fn invert(&mut self) {
        self.raster.invert();
    }

    pub fn flip(&mut self) {
        self.raster.flip();
    }

    pub fn flop(&mut self) {
        self.raster.flop();
    }

    /// New image rotated 90° clockwise, same encoding.
    pub fn rotate90cw(&self) -> Image {
        Image::new(self.raster.rotate90cw(), self.encoding)
    }

    /// Bitmap conversion, keeping this image's encoding.
    pub fn to_bitmap(&self) -> Image {
        Image::new(self.raster.to_bitmap(), self.encoding)
    }

    /// Graymap conversion, keeping this image's encoding.
    pub fn to_graymap(&self) -> Option<Image> {
        let gray = self.raster.to_graymap()?;
        Some(Image::new(gray, self.encoding))
    }

    /// Serialize with the header for [`Image::magic`].
    pub fn encode(&self) -> Vec<u8> {
        self.raster.encode(self.encoding)
    }
}
