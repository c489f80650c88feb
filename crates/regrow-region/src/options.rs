//! Region growing configuration

use crate::error::{RegionError, RegionResult};
use regrow_color::{Cie94Params, ColorMetric};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metric used when none is configured.
pub const DEFAULT_METRIC: ColorMetric = ColorMetric::Cie94;

/// Pre-squared threshold used when none is configured.
pub const DEFAULT_THRESHOLD: f64 = 120.0;

/// Options for region growing
///
/// `threshold` is compared against the squared distance returned by the
/// metric, so it must be squared as well: to accept a Euclidean distance
/// of up to 20, pass 400.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GrowOptions {
    /// Distance formula
    pub metric: ColorMetric,
    /// Largest accepted (squared) distance, inclusive
    pub threshold: f64,
    /// Constants of the CIE94 formula
    pub cie94: Cie94Params,
}

impl Default for GrowOptions {
    fn default() -> Self {
        Self {
            metric: DEFAULT_METRIC,
            threshold: DEFAULT_THRESHOLD,
            cie94: Cie94Params::default(),
        }
    }
}

impl GrowOptions {
    /// Create options with the given metric and threshold
    pub fn new(metric: ColorMetric, threshold: f64) -> Self {
        Self {
            metric,
            threshold,
            ..Self::default()
        }
    }

    /// Create options from a numeric metric selector
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidConfiguration`] for selectors outside
    /// `0..=4` or an invalid threshold.
    pub fn from_selector(selector: u8, threshold: f64) -> RegionResult<Self> {
        let options = Self::new(ColorMetric::try_from(selector)?, threshold);
        options.validate()?;
        Ok(options)
    }

    /// Set the metric
    pub fn with_metric(mut self, metric: ColorMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the pre-squared threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the CIE94 constants
    pub fn with_cie94(mut self, cie94: Cie94Params) -> Self {
        self.cie94 = cie94;
        self
    }

    /// Check the threshold and metric constants.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidConfiguration`] if the threshold is
    /// negative or not finite, or the CIE94 constants are unusable.
    pub fn validate(&self) -> RegionResult<()> {
        validate_threshold(self.threshold)?;
        self.cie94.validate()?;
        Ok(())
    }
}

pub(crate) fn validate_threshold(threshold: f64) -> RegionResult<()> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(())
    } else {
        Err(RegionError::InvalidConfiguration(format!(
            "threshold must be non-negative and finite, got {threshold}"
        )))
    }
}
