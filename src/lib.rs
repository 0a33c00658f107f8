//! # zenpbm
//!
//! Netpbm (PBM/PGM/PPM) codec and raster drawing engine.
//!
//! ## Supported Formats
//!
//! - **P1** / **P4**: bitmap, ASCII / row-packed binary (MSB first)
//! - **P2** / **P5**: 8-bit graymap, ASCII / binary
//! - **P3** / **P6**: 8-bit RGB pixmap, ASCII / binary
//!
//! ASCII decoding treats the raster as a flat token stream, so samples may
//! wrap or split across physical lines freely. `#` comments are skipped.
//!
//! ## Model
//!
//! A [`Grid`] stores row-major samples of one kind (`bool`, `u8` or
//! [`rgb::RGB8`]) plus a max value. [`Raster`] tags which kind is present and
//! [`Image`] pairs it with its on-disk [`Encoding`]. Drawing operations
//! (`draw_line`, `draw_filled_polygon`, ...) and in-place transforms
//! (`invert`, `flip`, `flop`) are generic over the sample kind; rotation and
//! depth reduction return new grids.
//!
//! ## Non-Goals
//!
//! - 16-bit samples (max value > 255), PAM, PFM
//! - Anti-aliasing: every shape is hard-edged with truncated coordinates
//! - Color management beyond the fixed `0.299 R + 0.587 G + 0.114 B` weights
//!
//! ## Usage
//!
//! ```
//! use zenpbm::{Point, Unstoppable};
//!
//! let mut image = zenpbm::decode(b"P1\n3 2\n1 0 1\n0 1 0\n", Unstoppable)?;
//! image.invert();
//! assert_eq!(image.encode(), b"P1\n3 2\n0 1 0\n1 0 1\n");
//!
//! let bitmap = image.as_bitmap_mut().unwrap();
//! bitmap.draw_line(Point::new(0, 0), Point::new(2, 1), true);
//! # Ok::<(), zenpbm::PbmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod draw;
mod error;
mod grid;
mod image;
mod info;
mod limits;
mod pixel;
mod transform;

mod pnm;

mod decode;
mod encode;

// Re-exports
pub use decode::{DecodeRequest, decode, decode_with_limits};
pub use draw::Point;
pub use encode::{encode_pbm, encode_pgm, encode_ppm};
pub use enough::{Stop, Unstoppable};
pub use error::PbmError;
pub use grid::{Bitmap, Graymap, Grid, Pixmap};
pub use image::{Image, Raster};
pub use info::{Encoding, ImageInfo, ImageKind, Magic};
pub use limits::Limits;
pub use pixel::{Sample, luminance};
pub use transform::PIXMAP_THRESHOLD;

#[cfg(feature = "std")]
pub use decode::read_image;
#[cfg(feature = "std")]
pub use encode::write_image;
