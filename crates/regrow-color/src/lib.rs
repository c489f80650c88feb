//! regrow-color - Pixel color distances
//!
//! This crate provides the similarity measure used by region growing:
//!
//! - **Metric selection** ([`metric`]): the five formulas and their numeric
//!   selectors
//! - **Pixel distance** ([`distance`]): squared Euclidean, weighted,
//!   redmean, CIE76 and CIE94 distances between two pixels

pub mod distance;
pub mod error;
pub mod metric;

// Re-export core types
pub use regrow_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export metric selection
pub use metric::ColorMetric;

// Re-export distance types and functions
pub use distance::{
    // Types
    Cie94Params,
    // Constants
    UNITY_EPSILON,
    // Per-formula functions
    cie94_distance,
    euclidean,
    // Dispatch
    pixel_distance,
    pixel_distance_with,
    redmean,
    weighted,
};
