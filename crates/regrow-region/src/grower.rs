//! Seeded region growing
//!
//! [`RegionGrower`] grows the maximal 4-connected region around a seed
//! pixel whose pixels lie within a distance threshold of the seed's value.
//! The result is a [`Mask`] of the image size where region pixels are 255,
//! pixels that were reached but failed the similarity test are 100, and
//! pixels never reached are 0.
//!
//! Every pixel is compared against the seed's value, never against its
//! neighbour, so membership is a per-pixel predicate and the final mask
//! does not depend on the order in which neighbours are visited.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --set_point--> Seeded --find_region--> Growing --> Done
//!                       ^                                  |
//!                       +-------- reset_mask / set_point --+
//! ```

use crate::error::{RegionError, RegionResult};
use crate::options::{GrowOptions, validate_threshold};
use log::{debug, trace};
use regrow_color::{ColorMetric, pixel_distance_with};
use regrow_core::{Mask, MaskValue, Pix, Pixel};
use std::collections::VecDeque;

/// Neighbour offsets `(d_row, d_col)` in visiting order: N, E, S, W.
const NEIGHBORS: [(i64, i64); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Where a grower is in its fill lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowState {
    /// Image bound, no seed set
    Idle,
    /// Seed captured, ready to fill
    Seeded,
    /// Traversal in progress
    Growing,
    /// Traversal finished, mask holds the final classification
    Done,
}

/// The seed of a fill and the reference value captured from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPoint {
    /// Row (y) of the seed
    pub row: u32,
    /// Column (x) of the seed
    pub col: u32,
    /// Image pixel at the seed when it was set
    pub value: Pixel,
}

/// Region growing engine
///
/// Owns a shared handle to the image, its own mask, the seed, and the
/// metric configuration. Independent growers over clones of the same
/// [`Pix`] can run on different threads.
///
/// # Examples
///
/// ```
/// use regrow_core::{MaskValue, Pix};
/// use regrow_region::RegionGrower;
///
/// let pix = Pix::new_filled(5, 5, [40, 50, 60]).unwrap();
/// let mut grower = RegionGrower::new(pix);
/// grower.set_point(2, 2).unwrap();
/// let mask = grower.find_region().unwrap();
/// assert_eq!(mask.count(MaskValue::Accepted), 25);
/// ```
#[derive(Debug, Clone)]
pub struct RegionGrower {
    image: Pix,
    mask: Mask,
    seed: Option<SeedPoint>,
    options: GrowOptions,
    state: GrowState,
    evaluations: usize,
}

impl RegionGrower {
    /// Create a grower with the default metric (CIE94) and threshold (120).
    pub fn new(image: Pix) -> Self {
        let mask = Mask::for_pix(&image);
        Self {
            image,
            mask,
            seed: None,
            options: GrowOptions::default(),
            state: GrowState::Idle,
            evaluations: 0,
        }
    }

    /// Create a grower with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidConfiguration`] if the options do not
    /// validate.
    pub fn with_options(image: Pix, options: GrowOptions) -> RegionResult<Self> {
        options.validate()?;
        let mut grower = Self::new(image);
        grower.options = options;
        Ok(grower)
    }

    /// Create a grower that reuses an existing mask buffer.
    ///
    /// The buffer is cleared before use.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Core`] if the mask size differs from the
    /// image, or [`RegionError::InvalidConfiguration`] for bad options.
    pub fn with_buffer(image: Pix, options: GrowOptions, mut mask: Mask) -> RegionResult<Self> {
        options.validate()?;
        mask.ensure_matches(&image)?;
        mask.clear();
        Ok(Self {
            image,
            mask,
            seed: None,
            options,
            state: GrowState::Idle,
            evaluations: 0,
        })
    }

    /// The image being segmented.
    #[inline]
    pub fn image(&self) -> &Pix {
        &self.image
    }

    /// The current mask.
    ///
    /// Stable between the end of [`find_region`](Self::find_region) and the
    /// next call that modifies the grower.
    #[inline]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Consume the grower and keep its mask.
    pub fn into_mask(self) -> Mask {
        self.mask
    }

    /// The seed, if one has been set.
    #[inline]
    pub fn seed(&self) -> Option<SeedPoint> {
        self.seed
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> GrowState {
        self.state
    }

    /// Current options.
    #[inline]
    pub fn options(&self) -> &GrowOptions {
        &self.options
    }

    /// Number of similarity tests run since the last fill started.
    ///
    /// After [`find_region`](Self::find_region) this equals the number of
    /// classified cells other than the seed, since no cell is scored twice.
    #[inline]
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Set the metric and the pre-squared threshold for the next fill.
    ///
    /// Allowed in any state.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidConfiguration`] if the threshold is
    /// negative or not finite. Nothing changes on error.
    pub fn set_params(&mut self, metric: ColorMetric, threshold: f64) -> RegionResult<()> {
        validate_threshold(threshold)?;
        self.options.metric = metric;
        self.options.threshold = threshold;
        debug!("region params: metric={metric}, threshold={threshold}");
        log_sample_space(metric);
        Ok(())
    }

    /// Replace all options for the next fill.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidConfiguration`] if the options do not
    /// validate. Nothing changes on error.
    pub fn set_options(&mut self, options: GrowOptions) -> RegionResult<()> {
        options.validate()?;
        debug!("region options: {options:?}");
        log_sample_space(options.metric);
        self.options = options;
        Ok(())
    }

    /// Bind a new image.
    ///
    /// The mask is reallocated for the new size and the seed is dropped;
    /// options are kept.
    pub fn set_image(&mut self, image: Pix) {
        self.mask = Mask::for_pix(&image);
        self.image = image;
        self.seed = None;
        self.state = GrowState::Idle;
    }

    /// Reset every mask cell to unvisited.
    ///
    /// Seed and options are kept, so the grower stays ready to fill if a
    /// seed was set.
    pub fn reset_mask(&mut self) {
        self.mask.clear();
        self.state = if self.seed.is_some() {
            GrowState::Seeded
        } else {
            GrowState::Idle
        };
    }

    /// Set the seed at `(row, col)` and capture its pixel value.
    ///
    /// Marks the seed cell as part of the region.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::OutOfBounds`] if the coordinate lies outside
    /// the image. Nothing changes on error.
    pub fn set_point(&mut self, row: i64, col: i64) -> RegionResult<()> {
        let out_of_bounds = || RegionError::OutOfBounds {
            row,
            col,
            width: self.image.width(),
            height: self.image.height(),
        };
        if !self.check_bounds(row, col) {
            return Err(out_of_bounds());
        }
        let (row, col) = (row as u32, col as u32);
        let value = self.image.get_pixel(col, row).ok_or_else(out_of_bounds)?;

        self.mask.set(col, row, MaskValue::Accepted)?;
        self.seed = Some(SeedPoint { row, col, value });
        self.state = GrowState::Seeded;
        debug!("seed set at row={row}, col={col}, value={value:?}");
        Ok(())
    }

    /// Grow the region from the seed.
    ///
    /// The mask is cleared, the seed cell marked, and the 4-connected
    /// neighbourhood explored breadth first. Neighbours are checked north,
    /// east, south, west; each check is short-circuited in the order
    /// [`check_bounds`](Self::check_bounds),
    /// [`check_unvisited`](Self::check_unvisited),
    /// [`check_similarity`](Self::check_similarity).
    ///
    /// Runs in O(width * height) time; every pixel is enqueued at most once.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidState`] if no seed has been set.
    /// Nothing changes on error.
    pub fn find_region(&mut self) -> RegionResult<&Mask> {
        let Some(seed) = self.seed else {
            return Err(RegionError::InvalidState(
                "find_region called before set_point",
            ));
        };

        self.mask.clear();
        self.mask.set(seed.col, seed.row, MaskValue::Accepted)?;
        self.state = GrowState::Growing;
        self.evaluations = 0;

        let mut queue = VecDeque::new();
        self.visit_neighbors(seed.row, seed.col, seed.value, &mut queue);
        while let Some((row, col)) = queue.pop_front() {
            self.visit_neighbors(row, col, seed.value, &mut queue);
        }

        self.state = GrowState::Done;
        debug!(
            "region grown from ({}, {}): {} accepted, {} rejected, {} tests",
            seed.row,
            seed.col,
            self.mask.count(MaskValue::Accepted),
            self.mask.count(MaskValue::Rejected),
            self.evaluations
        );
        Ok(&self.mask)
    }

    /// Check the four neighbours of `(row, col)` and enqueue the accepted ones.
    fn visit_neighbors(
        &mut self,
        row: u32,
        col: u32,
        reference: Pixel,
        queue: &mut VecDeque<(u32, u32)>,
    ) {
        for (d_row, d_col) in NEIGHBORS {
            let n_row = row as i64 + d_row;
            let n_col = col as i64 + d_col;
            if !self.check_bounds(n_row, n_col) {
                continue;
            }
            let (n_row, n_col) = (n_row as u32, n_col as u32);
            if !self.check_unvisited(n_row, n_col) {
                continue;
            }
            if self.check_similarity(n_row, n_col, reference) {
                queue.push_back((n_row, n_col));
            }
        }
    }

    /// Whether `(row, col)` lies inside the image.
    pub fn check_bounds(&self, row: i64, col: i64) -> bool {
        (0..self.image.height() as i64).contains(&row)
            && (0..self.image.width() as i64).contains(&col)
    }

    /// Whether the mask cell at `(row, col)` has not been classified yet.
    ///
    /// Out-of-bounds cells count as visited.
    pub fn check_unvisited(&self, row: u32, col: u32) -> bool {
        let unvisited = self.mask.get(col, row) == Some(MaskValue::Unvisited);
        if !unvisited {
            trace!("({row}, {col}) already marked");
        }
        unvisited
    }

    /// Classify `(row, col)` against `reference` and record the outcome.
    ///
    /// Writes 255 and returns `true` when the distance is within the
    /// threshold, otherwise writes 100 and returns `false`. Out-of-bounds
    /// cells are left alone and return `false`.
    pub fn check_similarity(&mut self, row: u32, col: u32, reference: Pixel) -> bool {
        let Some(pixel) = self.image.get_pixel(col, row) else {
            return false;
        };
        self.evaluations += 1;
        let distance =
            pixel_distance_with(pixel, reference, self.options.metric, &self.options.cie94);
        let accepted = distance <= self.options.threshold;
        let value = if accepted {
            MaskValue::Accepted
        } else {
            MaskValue::Rejected
        };
        if self.mask.set(col, row, value).is_err() {
            return false;
        }
        trace!(
            "({row}, {col}) distance {distance:.5} -> {}",
            if accepted { "accepted" } else { "rejected" }
        );
        accepted
    }
}

fn log_sample_space(metric: ColorMetric) {
    if metric.is_perceptual() {
        debug!("{metric} reads samples as (L, a, b); convert images before growing");
    }
}

/// Grow a region from `(row, col)` in one call.
///
/// Convenience wrapper around [`RegionGrower`] that returns the mask.
///
/// # Errors
///
/// Returns [`RegionError::InvalidConfiguration`] for invalid options and
/// [`RegionError::OutOfBounds`] for a seed outside the image.
pub fn grow_region(image: &Pix, row: i64, col: i64, options: &GrowOptions) -> RegionResult<Mask> {
    let mut grower = RegionGrower::with_options(image.clone(), options.clone())?;
    grower.set_point(row, col)?;
    grower.find_region()?;
    Ok(grower.into_mask())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32) -> Pix {
        Pix::new_filled(width, height, [10, 20, 30]).unwrap()
    }

    #[test]
    fn test_new_is_idle() {
        let grower = RegionGrower::new(uniform(4, 3));
        assert_eq!(grower.state(), GrowState::Idle);
        assert_eq!(grower.seed(), None);
        assert_eq!(grower.mask().count(MaskValue::Unvisited), 12);
        assert_eq!(grower.options(), &GrowOptions::default());
    }

    #[test]
    fn test_set_point_marks_seed() {
        let mut grower = RegionGrower::new(uniform(4, 3));
        grower.set_point(2, 3).unwrap();
        assert_eq!(grower.state(), GrowState::Seeded);
        assert_eq!(
            grower.seed(),
            Some(SeedPoint {
                row: 2,
                col: 3,
                value: [10, 20, 30]
            })
        );
        assert_eq!(grower.mask().get(3, 2), Some(MaskValue::Accepted));
        assert_eq!(grower.mask().count(MaskValue::Accepted), 1);
    }

    #[test]
    fn test_set_point_out_of_bounds_changes_nothing() {
        let mut grower = RegionGrower::new(uniform(4, 3));
        for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 4), (i64::MAX, 0)] {
            assert!(matches!(
                grower.set_point(row, col),
                Err(RegionError::OutOfBounds { .. })
            ));
        }
        assert_eq!(grower.state(), GrowState::Idle);
        assert_eq!(grower.seed(), None);
        assert_eq!(grower.mask().count(MaskValue::Unvisited), 12);
    }

    #[test]
    fn test_find_region_without_seed() {
        let mut grower = RegionGrower::new(uniform(2, 2));
        assert!(matches!(
            grower.find_region(),
            Err(RegionError::InvalidState(_))
        ));
        assert_eq!(grower.state(), GrowState::Idle);
    }

    #[test]
    fn test_check_bounds() {
        let grower = RegionGrower::new(uniform(4, 3));
        assert!(grower.check_bounds(0, 0));
        assert!(grower.check_bounds(2, 3));
        assert!(!grower.check_bounds(-1, 0));
        assert!(!grower.check_bounds(0, -1));
        assert!(!grower.check_bounds(3, 0));
        assert!(!grower.check_bounds(0, 4));
    }

    #[test]
    fn test_check_unvisited() {
        let mut grower = RegionGrower::new(uniform(4, 3));
        assert!(grower.check_unvisited(1, 1));
        grower.set_point(1, 1).unwrap();
        assert!(!grower.check_unvisited(1, 1));
        assert!(!grower.check_unvisited(5, 5));

        // A rejected cell is visited too
        let mut pm = uniform(4, 3).to_mut();
        pm.set_pixel(2, 0, [250, 250, 250]).unwrap();
        let mut grower = RegionGrower::new(pm.into());
        grower.set_params(ColorMetric::Euclidean, 1.0).unwrap();
        assert!(!grower.check_similarity(0, 2, [10, 20, 30]));
        assert_eq!(grower.mask().get(2, 0), Some(MaskValue::Rejected));
        assert!(!grower.check_unvisited(0, 2));
    }

    #[test]
    fn test_rejected_cell_scored_once() {
        // Bright center is a neighbour of four accepted cells
        let mut pm = uniform(3, 3).to_mut();
        pm.set_pixel(1, 1, [250, 250, 250]).unwrap();
        let mut grower = RegionGrower::new(pm.into());
        grower.set_params(ColorMetric::Euclidean, 1.0).unwrap();
        grower.set_point(0, 0).unwrap();

        let mask = grower.find_region().unwrap();
        assert_eq!(mask.get(1, 1), Some(MaskValue::Rejected));
        assert_eq!(mask.count(MaskValue::Accepted), 8);
        assert_eq!(grower.evaluations(), 8);

        // Counter restarts with every fill
        grower.find_region().unwrap();
        assert_eq!(grower.evaluations(), 8);
    }

    #[test]
    fn test_check_similarity_writes_outcome() {
        let mut pm = uniform(3, 1).to_mut();
        pm.set_pixel(2, 0, [200, 200, 200]).unwrap();
        let mut grower = RegionGrower::new(pm.into());
        grower.set_params(ColorMetric::Euclidean, 0.0).unwrap();

        assert!(grower.check_similarity(0, 1, [10, 20, 30]));
        assert_eq!(grower.mask().get(1, 0), Some(MaskValue::Accepted));
        assert!(!grower.check_similarity(0, 2, [10, 20, 30]));
        assert_eq!(grower.mask().get(2, 0), Some(MaskValue::Rejected));
        assert!(!grower.check_similarity(1, 0, [10, 20, 30]));
        assert_eq!(grower.mask().get(0, 0), Some(MaskValue::Unvisited));
    }

    #[test]
    fn test_reset_mask_keeps_seed() {
        let mut grower = RegionGrower::new(uniform(3, 3));
        grower.set_point(1, 1).unwrap();
        grower.find_region().unwrap();
        assert_eq!(grower.state(), GrowState::Done);

        grower.reset_mask();
        assert_eq!(grower.state(), GrowState::Seeded);
        assert_eq!(grower.mask().count(MaskValue::Unvisited), 9);
        assert!(grower.seed().is_some());

        let mask = grower.find_region().unwrap();
        assert_eq!(mask.count(MaskValue::Accepted), 9);
    }

    #[test]
    fn test_set_params_rejects_negative_threshold() {
        let mut grower = RegionGrower::new(uniform(2, 2));
        assert!(matches!(
            grower.set_params(ColorMetric::Euclidean, -1.0),
            Err(RegionError::InvalidConfiguration(_))
        ));
        assert_eq!(grower.options(), &GrowOptions::default());
    }

    #[test]
    fn test_set_options() {
        let mut grower = RegionGrower::new(uniform(2, 2));
        let options = GrowOptions::new(ColorMetric::Redmean, 4000.0);
        grower.set_options(options.clone()).unwrap();
        assert_eq!(grower.options(), &options);

        let bad = options.with_threshold(-2.0);
        assert!(grower.set_options(bad).is_err());
        assert_eq!(grower.options().threshold, 4000.0);
    }

    #[test]
    fn test_set_image_drops_seed() {
        let mut grower = RegionGrower::new(uniform(2, 2));
        grower.set_params(ColorMetric::Cie76, 20.0).unwrap();
        grower.set_point(1, 1).unwrap();
        grower.set_image(uniform(5, 4));
        assert_eq!(grower.state(), GrowState::Idle);
        assert_eq!(grower.seed(), None);
        assert!(grower.mask().matches(grower.image()));
        assert_eq!(grower.options().metric, ColorMetric::Cie76);
    }

    #[test]
    fn test_with_buffer_checks_size() {
        let mut reused = Mask::new(3, 3).unwrap();
        reused.set(0, 0, MaskValue::Rejected).unwrap();
        let grower =
            RegionGrower::with_buffer(uniform(3, 3), GrowOptions::default(), reused).unwrap();
        assert_eq!(grower.mask().count(MaskValue::Unvisited), 9);

        let wrong = Mask::new(2, 3).unwrap();
        assert!(matches!(
            RegionGrower::with_buffer(uniform(3, 3), GrowOptions::default(), wrong),
            Err(RegionError::Core(_))
        ));
    }

    #[test]
    fn test_grow_region_wrapper() {
        let mask = grow_region(&uniform(4, 4), 0, 0, &GrowOptions::default()).unwrap();
        assert_eq!(mask.count(MaskValue::Accepted), 16);
        assert!(grow_region(&uniform(4, 4), 4, 0, &GrowOptions::default()).is_err());
    }
}
