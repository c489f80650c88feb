//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//! Coordinates are `(x, y)` = `(column, row)`.

use super::{Pix, PixMut};
use crate::Pixel;
use crate::error::{Error, Result};
use crate::sample;

#[inline]
fn word_index(width: u32, x: u32, y: u32) -> usize {
    (y as usize) * (width as usize) + (x as usize)
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking against the row width.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Pixel {
        sample::extract(self.data()[word_index(self.width(), x, y)])
    }
}

impl PixMut {
    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, pixel);
        Ok(())
    }

    /// Set a pixel value without bounds checking against the row width.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: Pixel) {
        let idx = word_index(self.width(), x, y);
        self.inner.data[idx] = sample::compose(pixel);
    }
}
