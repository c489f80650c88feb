//! Region mask
//!
//! A [`Mask`] is a single-channel 8-bit grid with the same dimensions as the
//! image it classifies. Each cell holds one of three [`MaskValue`]s.

use crate::error::{Error, Result};
use crate::pix::Pix;

/// Classification of one mask cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum MaskValue {
    /// Not reached by the traversal
    #[default]
    Unvisited = 0,
    /// Visited and rejected by the similarity test
    Rejected = 100,
    /// Part of the region
    Accepted = 255,
}

impl MaskValue {
    /// Raw byte stored in the mask.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Interpret a raw mask byte, `None` for bytes outside {0, 100, 255}.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Unvisited),
            100 => Some(Self::Rejected),
            255 => Some(Self::Accepted),
            _ => None,
        }
    }
}

/// Per-pixel classification grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Mask {
    /// Create an all-unvisited mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Mask {
            width,
            height,
            data: vec![MaskValue::Unvisited.as_u8(); (width as usize) * (height as usize)],
        })
    }

    /// Create an all-unvisited mask matching the dimensions of `pix`.
    pub fn for_pix(pix: &Pix) -> Self {
        Mask {
            width: pix.width(),
            height: pix.height(),
            data: vec![MaskValue::Unvisited.as_u8(); pix.data().len()],
        }
    }

    /// Get the mask width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the mask height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check the mask covers the same grid as `pix`.
    pub fn matches(&self, pix: &Pix) -> bool {
        self.width == pix.width() && self.height == pix.height()
    }

    /// Check the mask dimensions equal those of `pix`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when they differ.
    pub fn ensure_matches(&self, pix: &Pix) -> Result<()> {
        if self.matches(pix) {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: (pix.width(), pix.height()),
                actual: (self.width, self.height),
            })
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get the cell at (x, y), `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<MaskValue> {
        self.index(x, y)
            .and_then(|idx| MaskValue::from_u8(self.data[idx]))
    }

    /// Set the cell at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: MaskValue) -> Result<()> {
        let idx = self.index(x, y).ok_or(Error::IndexOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.data[idx] = value.as_u8();
        Ok(())
    }

    /// Reset every cell to [`MaskValue::Unvisited`].
    pub fn clear(&mut self) {
        self.data.fill(MaskValue::Unvisited.as_u8());
    }

    /// Raw row-major mask bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: MaskValue) -> usize {
        let raw = value.as_u8();
        self.data.iter().filter(|&&v| v == raw).count()
    }

    /// Bounding box of the accepted cells as `(x, y, width, height)`.
    ///
    /// Returns `None` when nothing was accepted.
    pub fn region_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        let accepted = MaskValue::Accepted.as_u8();
        let mut min_x = self.width;
        let mut min_y = self.height;
        let mut max_x = 0;
        let mut max_y = 0;
        let mut found = false;

        for (y, row) in self.data.chunks_exact(self.width as usize).enumerate() {
            for (x, &v) in row.iter().enumerate() {
                if v == accepted {
                    found = true;
                    min_x = min_x.min(x as u32);
                    min_y = min_y.min(y as u32);
                    max_x = max_x.max(x as u32);
                    max_y = max_y.max(y as u32);
                }
            }
        }

        found.then(|| (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    }

    /// Membership-only copy: accepted cells stay 255, everything else is 0.
    pub fn to_binary(&self) -> Vec<u8> {
        let accepted = MaskValue::Accepted.as_u8();
        self.data
            .iter()
            .map(|&v| if v == accepted { accepted } else { 0 })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_value_bytes() {
        assert_eq!(MaskValue::Unvisited.as_u8(), 0);
        assert_eq!(MaskValue::Rejected.as_u8(), 100);
        assert_eq!(MaskValue::Accepted.as_u8(), 255);
        assert_eq!(MaskValue::from_u8(100), Some(MaskValue::Rejected));
        assert_eq!(MaskValue::from_u8(1), None);
    }

    #[test]
    fn test_new_mask_is_unvisited() {
        let mask = Mask::new(3, 2).unwrap();
        assert_eq!(mask.count(MaskValue::Unvisited), 6);
        assert!(mask.as_bytes().iter().all(|&v| v == 0));
        assert!(Mask::new(0, 2).is_err());
    }

    #[test]
    fn test_set_and_bounds() {
        let mut mask = Mask::new(5, 4).unwrap();
        mask.set(1, 1, MaskValue::Accepted).unwrap();
        mask.set(3, 2, MaskValue::Accepted).unwrap();
        mask.set(4, 3, MaskValue::Rejected).unwrap();

        assert_eq!(mask.get(3, 2), Some(MaskValue::Accepted));
        assert_eq!(mask.get(5, 0), None);
        assert!(mask.set(0, 4, MaskValue::Accepted).is_err());
        assert_eq!(mask.region_bounds(), Some((1, 1, 3, 2)));
        assert_eq!(mask.count(MaskValue::Rejected), 1);
    }

    #[test]
    fn test_bounds_empty() {
        let mask = Mask::new(2, 2).unwrap();
        assert_eq!(mask.region_bounds(), None);
    }

    #[test]
    fn test_to_binary_and_clear() {
        let mut mask = Mask::new(3, 1).unwrap();
        mask.set(0, 0, MaskValue::Accepted).unwrap();
        mask.set(1, 0, MaskValue::Rejected).unwrap();
        assert_eq!(mask.to_binary(), vec![255, 0, 0]);

        mask.clear();
        assert_eq!(mask.as_bytes(), &[0, 0, 0]);
    }

    #[test]
    fn test_for_pix_matches() {
        let pix = Pix::new(7, 3).unwrap();
        let mask = Mask::for_pix(&pix);
        assert!(mask.matches(&pix));
        assert!(mask.ensure_matches(&pix).is_ok());

        let other = Pix::new(3, 7).unwrap();
        assert_eq!(
            mask.ensure_matches(&other),
            Err(Error::DimensionMismatch {
                expected: (3, 7),
                actual: (7, 3)
            })
        );
    }
}
