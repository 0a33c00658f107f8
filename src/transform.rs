//! Whole-grid operations: invert, mirror, rotate, depth reduction.
//!
//! Shape-preserving operations mutate in place. Rotation and depth
//! conversion return a new grid since dimensions or sample kind change.

use alloc::vec::Vec;

use imgref::ImgVec;

use crate::grid::{Bitmap, Graymap, Grid, Pixmap};
use crate::pixel::{Sample, luminance};

/// Pixmap luminance above this is dark when reducing to a bitmap.
pub const PIXMAP_THRESHOLD: f64 = 128.0;

impl<S: Sample> Grid<S> {
    /// Replace every sample with `max_value - sample` (NOT for bitmaps).
    pub fn invert(&mut self) {
        let max = self.max_value();
        for s in self.pixels_mut() {
            *s = s.inverted(max);
        }
    }

    /// Mirror left-right.
    pub fn flip(&mut self) {
        let w = self.width();
        for row in self.pixels_mut().chunks_exact_mut(w) {
            row.reverse();
        }
    }

    /// Mirror top-bottom.
    pub fn flop(&mut self) {
        let (w, h) = self.size();
        let buf = self.pixels_mut();
        for y in 0..h / 2 {
            let (top, bottom) = buf.split_at_mut((h - 1 - y) * w);
            top[y * w..(y + 1) * w].swap_with_slice(&mut bottom[..w]);
        }
    }

    /// Rotate 90° clockwise into a new `height x width` grid.
    ///
    /// Source `(x, y)` lands at `(height - 1 - y, x)`.
    pub fn rotate90cw(&self) -> Self {
        let (w, h) = self.size();
        let src = self.pixels();
        let mut out = Vec::with_capacity(src.len());
        for x in 0..w {
            for y in (0..h).rev() {
                out.push(src[y * w + x]);
            }
        }
        Grid::from_imgvec(ImgVec::new(out, h, w), self.max_value())
    }
}

impl Pixmap {
    /// Reduce to gray with the luminosity formula, truncating.
    ///
    /// The graymap keeps this pixmap's max value.
    pub fn to_graymap(&self) -> Graymap {
        log::debug!("pixmap -> graymap {}x{}", self.width(), self.height());
        self.map(self.max_value(), |px| luminance(px) as u8)
    }

    /// Reduce to a bitmap: dark where luminance exceeds
    /// [`PIXMAP_THRESHOLD`], regardless of max value.
    pub fn to_bitmap(&self) -> Bitmap {
        log::debug!("pixmap -> bitmap {}x{}", self.width(), self.height());
        self.map(1, |px| luminance(px) > PIXMAP_THRESHOLD)
    }
}

impl Graymap {
    /// Reduce to a bitmap: dark where the sample exceeds `max_value / 2`.
    pub fn to_bitmap(&self) -> Bitmap {
        log::debug!("graymap -> bitmap {}x{}", self.width(), self.height());
        let threshold = self.max_value() / 2;
        self.map(1, |g| g > threshold)
    }
}
