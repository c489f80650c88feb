//! regrow-core - Basic data structures for region growing
//!
//! This crate provides the containers shared by the rest of the workspace:
//!
//! - [`Pix`] / [`PixMut`] - Three-sample raster image (immutable / mutable)
//! - [`Mask`] / [`MaskValue`] - Per-pixel classification grid produced by a fill
//! - [`Pixel`] - One three-sample pixel value
//!
//! The samples of a pixel are opaque ordered scalars. Whether they hold
//! B, G, R or L, a, b is decided by whoever builds the image.

pub mod error;
pub mod mask;
pub mod pix;

pub use error::{Error, Result};
pub use mask::{Mask, MaskValue};
pub use pix::{Pix, PixMut};

/// A single pixel: three ordered samples in `[0, 255]`.
pub type Pixel = [u8; 3];

/// Sample indices and packing helpers for 32-bit pixel words.
///
/// # Pixel format
///
/// Each pixel occupies the low 24 bits of one 32-bit word, stored as
/// `0x00112233`: sample 0 in bits 16..24, then samples 1 and 2. The top
/// byte is always zero.
pub mod sample {
    use crate::Pixel;

    /// Sample 0
    pub const FIRST: usize = 0;
    /// Sample 1
    pub const SECOND: usize = 1;
    /// Sample 2
    pub const THIRD: usize = 2;

    /// Shift amounts for extracting samples
    pub const FIRST_SHIFT: u32 = 16;
    pub const SECOND_SHIFT: u32 = 8;
    pub const THIRD_SHIFT: u32 = 0;

    /// Pack three samples into a 32-bit pixel word.
    #[inline]
    pub fn compose(pixel: Pixel) -> u32 {
        ((pixel[FIRST] as u32) << FIRST_SHIFT)
            | ((pixel[SECOND] as u32) << SECOND_SHIFT)
            | ((pixel[THIRD] as u32) << THIRD_SHIFT)
    }

    /// Unpack the three samples from a 32-bit pixel word.
    #[inline]
    pub fn extract(word: u32) -> Pixel {
        [
            ((word >> FIRST_SHIFT) & 0xff) as u8,
            ((word >> SECOND_SHIFT) & 0xff) as u8,
            ((word >> THIRD_SHIFT) & 0xff) as u8,
        ]
    }

}
