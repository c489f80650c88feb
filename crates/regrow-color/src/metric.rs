//! Metric selector
//!
//! [`ColorMetric`] names one of the five distance formulas. Collaborators
//! that only carry a number (a command line, a settings file) convert the
//! selector `0..=4` with `TryFrom<u8>` or parse it with `FromStr`.

use crate::error::{ColorError, ColorResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pixel distance formula
///
/// Every variant yields a *squared* distance; thresholds compared against
/// it must be squared too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorMetric {
    /// Plain squared Euclidean distance over the three samples (selector 0)
    #[cfg_attr(feature = "serde", serde(rename = "euclidean"))]
    Euclidean,
    /// Squared Euclidean with weights 2, 4, 3 on samples 2, 1, 0 (selector 1)
    #[cfg_attr(feature = "serde", serde(rename = "weighted"))]
    WeightedEuclidean,
    /// Weighted distance plus the "redmean" cross term (selector 2)
    #[cfg_attr(feature = "serde", serde(rename = "redmean"))]
    Redmean,
    /// CIE76 on samples read as (L, a, b) (selector 3)
    #[cfg_attr(feature = "serde", serde(rename = "cie76"))]
    Cie76,
    /// CIE94 on samples read as (L, a, b) (selector 4)
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "cie94"))]
    Cie94,
}

impl ColorMetric {
    /// All metrics in selector order.
    pub const ALL: [ColorMetric; 5] = [
        ColorMetric::Euclidean,
        ColorMetric::WeightedEuclidean,
        ColorMetric::Redmean,
        ColorMetric::Cie76,
        ColorMetric::Cie94,
    ];

    /// Numeric selector of this metric.
    pub fn index(self) -> u8 {
        match self {
            ColorMetric::Euclidean => 0,
            ColorMetric::WeightedEuclidean => 1,
            ColorMetric::Redmean => 2,
            ColorMetric::Cie76 => 3,
            ColorMetric::Cie94 => 4,
        }
    }

    /// Short lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            ColorMetric::Euclidean => "euclidean",
            ColorMetric::WeightedEuclidean => "weighted",
            ColorMetric::Redmean => "redmean",
            ColorMetric::Cie76 => "cie76",
            ColorMetric::Cie94 => "cie94",
        }
    }

    /// Whether the metric expects pixels already converted to a Lab space.
    pub fn is_perceptual(self) -> bool {
        matches!(self, ColorMetric::Cie76 | ColorMetric::Cie94)
    }

    /// Pre-squared threshold known to give sensible regions on photos.
    ///
    /// `None` for the weighted metric, which never had a tuned value.
    pub fn suggested_threshold(self) -> Option<f64> {
        match self {
            ColorMetric::Euclidean => Some(40.0),
            ColorMetric::WeightedEuclidean => None,
            ColorMetric::Redmean => Some(4000.0),
            ColorMetric::Cie76 => Some(20.0),
            ColorMetric::Cie94 => Some(120.0),
        }
    }
}

impl TryFrom<u8> for ColorMetric {
    type Error = ColorError;

    fn try_from(selector: u8) -> ColorResult<Self> {
        ColorMetric::ALL
            .get(selector as usize)
            .copied()
            .ok_or(ColorError::InvalidMetric(selector))
    }
}

impl FromStr for ColorMetric {
    type Err = ColorError;

    /// Accepts the selector digit or the metric name, case-insensitively.
    fn from_str(s: &str) -> ColorResult<Self> {
        let s = s.trim();
        if let Ok(selector) = s.parse::<u8>() {
            return ColorMetric::try_from(selector);
        }
        ColorMetric::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorError::UnknownMetric(s.to_string()))
    }
}

impl fmt::Display for ColorMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
