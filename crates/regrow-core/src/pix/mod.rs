//! PIX - The image container
//!
//! `Pix` is the read-only raster a fill runs over. Every pixel carries three
//! 8-bit samples.
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words, one word per pixel
//! - Rows are stored top to bottom, pixels left to right
//! - Samples are packed MSB first, see [`crate::sample`]
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership), so any number of
//! region growers can read the same image concurrently. To modify pixel
//! data, take a copy with [`Pix::to_mut`] and convert back with `Into<Pix>`.

mod access;

use crate::Pixel;
use crate::error::{Error, Result};
use crate::sample;
use std::sync::Arc;

/// Internal PIX data
#[derive(Debug)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The image data (one packed 32-bit word per pixel)
    data: Vec<u32>,
}

impl PixData {
    fn zeroed(width: u32, height: u32) -> Self {
        PixData {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize)],
        }
    }
}

/// PIX - Three-sample image container
///
/// `Pix` uses reference counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use regrow_core::Pix;
///
/// let pix = Pix::new(640, 480).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// assert_eq!(pix.get_pixel(0, 0), Some([0, 0, 0]));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions.
    ///
    /// Every sample is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Pix {
            inner: Arc::new(PixData::zeroed(width, height)),
        })
    }

    /// Create a PIX from an interleaved sample buffer.
    ///
    /// `samples` holds `width * height` pixels of three bytes each, row
    /// by row. This is the layout decoders hand over for 3-channel images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for an empty image and
    /// [`Error::BufferSizeMismatch`] if the buffer length is wrong.
    pub fn from_samples(width: u32, height: u32, samples: &[u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize) * 3;
        if samples.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: samples.len(),
            });
        }

        let data = samples
            .chunks_exact(3)
            .map(|px| sample::compose([px[0], px[1], px[2]]))
            .collect();

        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create a PIX with every pixel set to `pixel`.
    pub fn new_filled(width: u32, height: u32, pixel: Pixel) -> Result<Self> {
        let mut pm = Self::new(width, height)?.to_mut();
        pm.fill(pixel);
        Ok(pm.into())
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the packed image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Create a mutable copy of this PIX.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: Pixel) {
        self.inner.data.fill(sample::compose(pixel));
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}
