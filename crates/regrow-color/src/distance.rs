//! Pixel distance
//!
//! Dissimilarity between two three-sample pixels under one of the five
//! [`ColorMetric`]s. All formulas return *squared* distances so the
//! per-pixel hot loop never takes a square root; thresholds are expected
//! to be squared by the caller.
//!
//! The perceptual metrics ([`ColorMetric::Cie76`], [`ColorMetric::Cie94`])
//! read the samples as (L, a, b). No conversion happens here: pixels must
//! already be in that space.
//!
//! Every metric is symmetric in its two arguments and returns exactly 0 for
//! identical pixels.

use crate::error::{ColorError, ColorResult};
use crate::metric::ColorMetric;
use regrow_core::Pixel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance within which `k_L * S_L` counts as exactly 1.
pub const UNITY_EPSILON: f64 = 1e-5;

/// Redmean cross-term divisor.
const REDMEAN_SCALE: f64 = 1.0 / 256.0;

/// Sample weights of the weighted metrics, indexed by sample.
const WEIGHTS: [f64; 3] = [3.0, 4.0, 2.0];

/// CIE94 weighting constants
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Cie94Params {
    /// Lightness parametric factor k_L
    pub k_l: f64,
    /// Lightness weighting S_L
    pub s_l: f64,
    /// Chroma weighting slope K1
    pub k1: f64,
    /// Hue weighting slope K2
    pub k2: f64,
}

impl Default for Cie94Params {
    fn default() -> Self {
        Self {
            k_l: 1.0,
            s_l: 1.0,
            k1: 0.045,
            k2: 0.015,
        }
    }
}

impl Cie94Params {
    /// Set the lightness parametric factor
    pub fn with_k_l(mut self, k_l: f64) -> Self {
        self.k_l = k_l;
        self
    }

    /// Set the lightness weighting
    pub fn with_s_l(mut self, s_l: f64) -> Self {
        self.s_l = s_l;
        self
    }

    /// Set the chroma and hue slopes
    pub fn with_slopes(mut self, k1: f64, k2: f64) -> Self {
        self.k1 = k1;
        self.k2 = k2;
        self
    }

    /// Check every constant is usable as a divisor or slope.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] if `k_l` or `s_l` is not a
    /// positive finite number, or `k1`/`k2` is negative or not finite.
    pub fn validate(&self) -> ColorResult<()> {
        for (name, value) in [("k_l", self.k_l), ("s_l", self.s_l)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ColorError::InvalidParameters(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        for (name, value) in [("k1", self.k1), ("k2", self.k2)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ColorError::InvalidParameters(format!(
                    "{name} must be non-negative and finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Divisor of the lightness term, `None` when it is 1 within
    /// [`UNITY_EPSILON`].
    fn lightness_divisor(&self) -> Option<f64> {
        let scale = self.k_l * self.s_l;
        if (scale - 1.0).abs() < UNITY_EPSILON {
            None
        } else {
            Some(scale * scale)
        }
    }
}

#[inline]
fn squared_diff(a: u8, b: u8) -> f64 {
    let d = a as f64 - b as f64;
    d * d
}

#[inline]
fn chroma(pixel: Pixel) -> f64 {
    (pixel[1] as f64).hypot(pixel[2] as f64)
}

/// Distance between two pixels with the default CIE94 constants.
///
/// # Examples
///
/// ```
/// use regrow_color::{ColorMetric, pixel_distance};
///
/// let d = pixel_distance([10, 20, 30], [13, 24, 30], ColorMetric::Euclidean);
/// assert_eq!(d, 25.0);
/// ```
pub fn pixel_distance(sample: Pixel, reference: Pixel, metric: ColorMetric) -> f64 {
    pixel_distance_with(sample, reference, metric, &Cie94Params::default())
}

/// Distance between two pixels.
///
/// `cie94` only affects [`ColorMetric::Cie94`]; it is assumed to have
/// passed [`Cie94Params::validate`].
pub fn pixel_distance_with(
    sample: Pixel,
    reference: Pixel,
    metric: ColorMetric,
    cie94: &Cie94Params,
) -> f64 {
    match metric {
        ColorMetric::Euclidean | ColorMetric::Cie76 => euclidean(sample, reference),
        ColorMetric::WeightedEuclidean => weighted(sample, reference),
        ColorMetric::Redmean => redmean(sample, reference),
        ColorMetric::Cie94 => cie94_distance(sample, reference, cie94),
    }
}

/// Squared Euclidean distance over the three samples.
pub fn euclidean(a: Pixel, b: Pixel) -> f64 {
    (0..3).map(|i| squared_diff(a[i], b[i])).sum()
}

/// Squared Euclidean distance with weights 3, 4, 2 on samples 0, 1, 2.
pub fn weighted(a: Pixel, b: Pixel) -> f64 {
    (0..3).map(|i| WEIGHTS[i] * squared_diff(a[i], b[i])).sum()
}

/// Weighted distance plus `midR * (dR² - dB²) / 256`.
///
/// Sample 2 plays red and sample 0 plays blue (BGR order); `midR` is the
/// mean of the two red samples. The cross term never outweighs the
/// weighted part, so the result stays non-negative.
pub fn redmean(a: Pixel, b: Pixel) -> f64 {
    let d_r2 = squared_diff(a[2], b[2]);
    let d_b2 = squared_diff(a[0], b[0]);
    let mid_r = (a[2] as f64 + b[2] as f64) * 0.5;
    weighted(a, b) + mid_r * (d_r2 - d_b2) * REDMEAN_SCALE
}

/// Squared CIE94 difference on (L, a, b) samples.
///
/// The chroma and hue weightings use the geometric mean of both chromas,
/// which keeps the formula symmetric. The textbook form weights by the
/// sample's chroma alone (`S_C = 1 + K1 * C1`), so values differ from it
/// whenever the two chromas differ, and a threshold tuned against that
/// form (such as the suggested 120) is a starting point rather than an
/// exact match. The hue term is clamped at zero to absorb rounding when
/// the hue difference vanishes.
pub fn cie94_distance(a: Pixel, b: Pixel, params: &Cie94Params) -> f64 {
    let d_l2 = squared_diff(a[0], b[0]);
    let c1 = chroma(a);
    let c2 = chroma(b);
    let d_c = c1 - c2;
    let d_c2 = d_c * d_c;
    let d_h2 = (squared_diff(a[1], b[1]) + squared_diff(a[2], b[2]) - d_c2).max(0.0);

    let c_mean = (c1 * c2).sqrt();
    let s_c = 1.0 + params.k1 * c_mean;
    let s_h = 1.0 + params.k2 * c_mean;

    let lightness = match params.lightness_divisor() {
        None => d_l2,
        Some(divisor) => d_l2 / divisor,
    };
    lightness + d_c2 / (s_c * s_c) + d_h2 / (s_h * s_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean([0, 0, 0], [1, 2, 2]), 9.0);
        assert_eq!(euclidean([255, 0, 0], [0, 0, 0]), 65025.0);
    }

    #[test]
    fn test_weighted_channel_order() {
        // weight 3 on sample 0, 4 on sample 1, 2 on sample 2
        assert_eq!(weighted([1, 0, 0], [0, 0, 0]), 3.0);
        assert_eq!(weighted([0, 1, 0], [0, 0, 0]), 4.0);
        assert_eq!(weighted([0, 0, 1], [0, 0, 0]), 2.0);
    }

    #[test]
    fn test_redmean_cross_term() {
        // red (sample 2) differs by 16 around a mean of 8: 2*256 + 8*256/256
        assert_eq!(redmean([0, 0, 16], [0, 0, 0]), 520.0);
        // blue (sample 0) differs by 16, red mean is 0: 3*256 - 0
        assert_eq!(redmean([16, 0, 0], [0, 0, 0]), 768.0);
        // blue differs with a bright red mean: 3*256 - 200*256/256
        assert_eq!(redmean([16, 0, 200], [0, 0, 200]), 568.0);
    }

    #[test]
    fn test_cie94_lightness_only() {
        // Equal chroma and hue: only the lightness term remains
        let d = cie94_distance([50, 0, 0], [40, 0, 0], &Cie94Params::default());
        assert_eq!(d, 100.0);
    }

    #[test]
    fn test_cie94_chroma_term() {
        // c1 = 5, c2 = 0: c_mean = 0, weights are 1, dC² = 25, dH² = 0
        let d = cie94_distance([0, 3, 4], [0, 0, 0], &Cie94Params::default());
        assert!((d - 25.0).abs() < 1e-12, "d = {d}");
    }

    #[test]
    fn test_cie94_weights_shrink_chroma_difference() {
        // c1 = 10, c2 = 5: c_mean = sqrt(50), dC² = 25, dH² = 0
        let d = cie94_distance([0, 6, 8], [0, 3, 4], &Cie94Params::default());
        let s_c = 1.0 + 0.045 * 50f64.sqrt();
        assert!((d - 25.0 / (s_c * s_c)).abs() < 1e-9, "d = {d}");
    }

    #[test]
    fn test_cie94_equal_chroma_matches_textbook() {
        // Both chromas are 5, so the mean equals the sample chroma
        let d = cie94_distance([50, 3, 4], [40, 4, 3], &Cie94Params::default());
        let s_h = 1.0 + 0.015 * 5.0;
        assert!((d - (100.0 + 2.0 / (s_h * s_h))).abs() < 1e-9, "d = {d}");
    }

    #[test]
    fn test_cie94_lightness_divisor() {
        let params = Cie94Params::default().with_k_l(2.0);
        assert_eq!(cie94_distance([50, 0, 0], [40, 0, 0], &params), 25.0);

        let params = Cie94Params::default().with_k_l(2.0).with_s_l(0.5);
        assert_eq!(cie94_distance([50, 0, 0], [40, 0, 0], &params), 100.0);
    }

    #[test]
    fn test_unity_guard_is_symmetric() {
        let just_below = Cie94Params::default().with_k_l(1.0 - 1e-6);
        let just_above = Cie94Params::default().with_k_l(1.0 + 1e-6);
        let well_below = Cie94Params::default().with_k_l(0.5);
        assert_eq!(just_below.lightness_divisor(), None);
        assert_eq!(just_above.lightness_divisor(), None);
        assert_eq!(well_below.lightness_divisor(), Some(0.25));
    }

    #[test]
    fn test_validate() {
        let params = Cie94Params::default();
        assert!(params.validate().is_ok());
        assert!(params.with_k_l(0.0).validate().is_err());
        assert!(params.with_s_l(f64::NAN).validate().is_err());
        assert!(params.with_slopes(-0.1, 0.0).validate().is_err());
        assert!(params.with_slopes(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_dispatch() {
        let a = [10, 20, 30];
        let b = [12, 25, 27];
        assert_eq!(
            pixel_distance(a, b, ColorMetric::Euclidean),
            euclidean(a, b)
        );
        assert_eq!(pixel_distance(a, b, ColorMetric::Cie76), euclidean(a, b));
        assert_eq!(
            pixel_distance(a, b, ColorMetric::WeightedEuclidean),
            weighted(a, b)
        );
        assert_eq!(pixel_distance(a, b, ColorMetric::Redmean), redmean(a, b));
        assert_eq!(
            pixel_distance(a, b, ColorMetric::Cie94),
            cie94_distance(a, b, &Cie94Params::default())
        );
    }
}
