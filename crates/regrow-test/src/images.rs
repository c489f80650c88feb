//! Synthetic test images
//!
//! Small images with known content, so expected masks can be written down
//! by hand.

use regrow_core::{Pix, Pixel};

/// Image with every pixel set to `pixel`.
///
/// # Panics
///
/// Panics on zero dimensions.
pub fn make_uniform(width: u32, height: u32, pixel: Pixel) -> Pix {
    Pix::new_filled(width, height, pixel).unwrap()
}

/// Image whose pixel at `(row, col)` is `f(row, col)`.
///
/// # Panics
///
/// Panics on zero dimensions.
pub fn make_from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> Pixel) -> Pix {
    let mut pm = Pix::new(width, height).unwrap().to_mut();
    for row in 0..height {
        for col in 0..width {
            pm.set_pixel_unchecked(col, row, f(row, col));
        }
    }
    pm.into()
}

/// Single-row image holding `pixels` left to right.
///
/// # Panics
///
/// Panics if `pixels` is empty.
pub fn make_row(pixels: &[Pixel]) -> Pix {
    make_from_fn(pixels.len() as u32, 1, |_, col| pixels[col as usize])
}
