use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};
use rgb::RGB8;

use crate::error::PbmError;
use crate::info::ImageKind;
use crate::pixel::Sample;

/// A PBM raster: one `bool` per pixel, `true` = set (dark).
pub type Bitmap = Grid<bool>;
/// A PGM raster: one 8-bit gray sample per pixel.
pub type Graymap = Grid<u8>;
/// A PPM raster: one [`RGB8`] triplet per pixel.
pub type Pixmap = Grid<RGB8>;

/// Row-major 2D sample storage shared by all three Netpbm kinds.
///
/// Rows are packed (stride == width). `max_value` bounds every channel of
/// every sample; bitmaps always report 1.
#[derive(Clone)]
pub struct Grid<S: Sample> {
    img: ImgVec<S>,
    max_value: u8,
}

impl<S: Sample> Grid<S> {
    /// A `width x height` grid filled with the default sample
    /// (unset / black), declaring the kind's default max value.
    ///
    /// # Panics
    ///
    /// If either dimension is zero or `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_max_value(width, height, S::DEFAULT_MAX)
    }

    /// Like [`Grid::new`] with an explicit max value (ignored for bitmaps).
    ///
    /// # Panics
    ///
    /// As [`Grid::new`], and if `max_value` is 0 for a graymap or pixmap.
    pub fn with_max_value(width: usize, height: usize, max_value: u8) -> Self {
        let max_value = normalize_max::<S>(max_value);
        match validate(width, height, max_value) {
            Ok(len) => Self {
                img: ImgVec::new(vec![S::default(); len], width, height),
                max_value,
            },
            Err(e) => panic!("invalid grid: {e}"),
        }
    }

    /// Wrap row-major samples. Fails if a dimension or the max value is
    /// zero, the length is not `width * height`, or any sample exceeds
    /// `max_value`.
    pub fn from_pixels(
        pixels: Vec<S>,
        width: usize,
        height: usize,
        max_value: u8,
    ) -> Result<Self, PbmError> {
        let max_value = normalize_max::<S>(max_value);
        let expected = validate(width, height, max_value)?;
        if pixels.len() != expected {
            return Err(PbmError::InvalidData(format!(
                "{} samples for a {width}x{height} grid",
                pixels.len()
            )));
        }
        if let Some(i) = pixels.iter().position(|s| !s.fits(max_value)) {
            return Err(PbmError::InvalidData(format!(
                "sample {:?} at ({}, {}) exceeds max value {max_value}",
                pixels[i],
                i % width,
                i / width
            )));
        }
        Ok(Self {
            img: ImgVec::new(pixels, width, height),
            max_value,
        })
    }

    pub fn kind(&self) -> ImageKind {
        S::KIND
    }

    pub fn width(&self) -> usize {
        self.img.width()
    }

    pub fn height(&self) -> usize {
        self.img.height()
    }

    /// `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Change the declared max value without rescaling samples.
    ///
    /// Fails if `max_value` is 0 or a stored sample would exceed it.
    /// Bitmaps keep 1.
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), PbmError> {
        let max_value = normalize_max::<S>(max_value);
        if max_value == 0 {
            return Err(PbmError::InvalidData("max value must be at least 1".into()));
        }
        if let Some(s) = self.pixels().iter().find(|s| !s.fits(max_value)) {
            return Err(PbmError::InvalidData(format!(
                "sample {s:?} exceeds new max value {max_value}"
            )));
        }
        self.max_value = max_value;
        Ok(())
    }

    /// Sample at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<S, PbmError> {
        let idx = self.index(x, y)?;
        Ok(self.pixels()[idx])
    }

    /// Overwrite the sample at `(x, y)`.
    ///
    /// Fails with [`PbmError::OutOfBounds`] outside the grid and with
    /// [`PbmError::InvalidData`] if `value` exceeds the max value.
    pub fn set(&mut self, x: usize, y: usize, value: S) -> Result<(), PbmError> {
        let idx = self.index(x, y)?;
        if !value.fits(self.max_value) {
            return Err(PbmError::InvalidData(format!(
                "sample {value:?} exceeds max value {}",
                self.max_value
            )));
        }
        self.pixels_mut()[idx] = value;
        Ok(())
    }

    /// Set `(x, y)` if it lies inside the grid; silently skip otherwise.
    ///
    /// This is the write path of every drawing operation.
    #[inline]
    pub fn plot(&mut self, x: i64, y: i64, value: S) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if x < self.width() && y < self.height() {
            let w = self.width();
            self.pixels_mut()[y * w + x] = value;
        }
    }

    /// All samples, row-major.
    pub fn pixels(&self) -> &[S] {
        self.img.buf()
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [S] {
        self.img.buf_mut()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[S]> {
        self.pixels().chunks_exact(self.width())
    }

    /// Borrow as an [`imgref::ImgRef`].
    pub fn as_imgref(&self) -> ImgRef<'_, S> {
        self.img.as_ref()
    }

    /// Take the underlying [`imgref::ImgVec`].
    pub fn into_imgvec(self) -> ImgVec<S> {
        self.img
    }

    /// Build a same-sized grid by mapping every sample.
    pub(crate) fn map<T: Sample>(&self, max_value: u8, f: impl Fn(S) -> T) -> Grid<T> {
        let pixels = self.pixels().iter().map(|&s| f(s)).collect();
        Grid {
            img: ImgVec::new(pixels, self.width(), self.height()),
            max_value: normalize_max::<T>(max_value),
        }
    }

    pub(crate) fn from_imgvec(img: ImgVec<S>, max_value: u8) -> Self {
        Self {
            img,
            max_value: normalize_max::<S>(max_value),
        }
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, PbmError> {
        let (width, height) = self.size();
        if x >= width || y >= height {
            return Err(PbmError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        Ok(y * width + x)
    }
}

impl<S: Sample> PartialEq for Grid<S> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self.max_value == other.max_value
            && self.pixels() == other.pixels()
    }
}

impl<S: Sample + Eq> Eq for Grid<S> {}

impl<S: Sample> core::fmt::Debug for Grid<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Grid")
            .field("kind", &S::KIND)
            .field("width", &self.width())
            .field("height", &self.height())
            .field("max_value", &self.max_value)
            .finish_non_exhaustive()
    }
}

/// Sample count of a `width x height` grid, if both dimensions and the max
/// value are positive.
fn validate(width: usize, height: usize, max_value: u8) -> Result<usize, PbmError> {
    if width == 0 || height == 0 {
        return Err(PbmError::InvalidData(format!(
            "grid dimensions {width}x{height} must be positive"
        )));
    }
    if max_value == 0 {
        return Err(PbmError::InvalidData("max value must be at least 1".into()));
    }
    width
        .checked_mul(height)
        .ok_or(PbmError::DimensionsTooLarge { width, height })
}

fn normalize_max<S: Sample>(max_value: u8) -> u8 {
    if S::KIND == ImageKind::Bitmap {
        1
    } else {
        max_value
    }
}
