use core::fmt::Debug;

use rgb::RGB8;

use crate::info::ImageKind;

mod private {
    pub trait Sealed {}
    impl Sealed for bool {}
    impl Sealed for u8 {}
    impl Sealed for rgb::RGB8 {}
}

/// One cell of a [`Grid`](crate::Grid).
///
/// Implemented for `bool` (bitmap, `true` = set/dark), `u8` (graymap) and
/// [`RGB8`] (pixmap). Sealed: the codec only knows these three depths.
pub trait Sample: Copy + Default + PartialEq + Debug + private::Sealed {
    /// Which Netpbm family stores this sample kind.
    const KIND: ImageKind;

    /// Max value declared by a freshly constructed grid.
    const DEFAULT_MAX: u8;

    /// `max_value - self` per channel (logical NOT for bits).
    fn inverted(self, max_value: u8) -> Self;

    /// Whether every channel is within `0..=max_value`.
    fn fits(self, max_value: u8) -> bool;
}

impl Sample for bool {
    const KIND: ImageKind = ImageKind::Bitmap;
    const DEFAULT_MAX: u8 = 1;

    #[inline]
    fn inverted(self, _max_value: u8) -> Self {
        !self
    }

    #[inline]
    fn fits(self, _max_value: u8) -> bool {
        true
    }
}

impl Sample for u8 {
    const KIND: ImageKind = ImageKind::Graymap;
    const DEFAULT_MAX: u8 = 255;

    // Wrapping keeps inversion an involution even for out-of-range samples.
    #[inline]
    fn inverted(self, max_value: u8) -> Self {
        max_value.wrapping_sub(self)
    }

    #[inline]
    fn fits(self, max_value: u8) -> bool {
        self <= max_value
    }
}

impl Sample for RGB8 {
    const KIND: ImageKind = ImageKind::Pixmap;
    const DEFAULT_MAX: u8 = 255;

    #[inline]
    fn inverted(self, max_value: u8) -> Self {
        RGB8::new(
            self.r.inverted(max_value),
            self.g.inverted(max_value),
            self.b.inverted(max_value),
        )
    }

    #[inline]
    fn fits(self, max_value: u8) -> bool {
        self.r <= max_value && self.g <= max_value && self.b <= max_value
    }
}

/// Luminosity of an RGB sample: `0.299 R + 0.587 G + 0.114 B`, unrounded.
///
/// Summed left to right in `f64` so truncation matches bit-for-bit.
#[inline]
pub fn luminance(px: RGB8) -> f64 {
    0.299 * f64::from(px.r) + 0.587 * f64::from(px.g) + 0.114 * f64::from(px.b)
}
