//! regrow-region - Seeded region growing with tolerance
//!
//! This crate grows a 4-connected region around a seed pixel:
//!
//! - **Grower** ([`grower`]): the [`RegionGrower`] engine and its lifecycle
//! - **Options** ([`options`]): metric, threshold and CIE94 constants
//!
//! # Examples
//!
//! ## Growing a region
//!
//! ```
//! use regrow_color::ColorMetric;
//! use regrow_core::{MaskValue, Pix};
//! use regrow_region::RegionGrower;
//!
//! // A 3x1 strip: two dark pixels and one bright one
//! let pix = Pix::from_samples(3, 1, &[10, 10, 10, 12, 10, 10, 200, 200, 200]).unwrap();
//!
//! let mut grower = RegionGrower::new(pix);
//! grower.set_params(ColorMetric::Euclidean, 4.0).unwrap();
//! grower.set_point(0, 0).unwrap();
//! let mask = grower.find_region().unwrap();
//!
//! assert_eq!(mask.get(0, 0), Some(MaskValue::Accepted));
//! assert_eq!(mask.get(1, 0), Some(MaskValue::Accepted));
//! assert_eq!(mask.get(2, 0), Some(MaskValue::Rejected));
//! ```
//!
//! ## One-shot fill
//!
//! ```
//! use regrow_core::Pix;
//! use regrow_region::{GrowOptions, grow_region};
//!
//! let pix = Pix::new_filled(8, 8, [0, 128, 128]).unwrap();
//! let mask = grow_region(&pix, 3, 3, &GrowOptions::default()).unwrap();
//! assert_eq!(mask.region_bounds(), Some((0, 0, 8, 8)));
//! ```

pub mod error;
pub mod grower;
pub mod options;

// Re-export core and color crates
pub use regrow_color;
pub use regrow_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export grower types and functions
pub use grower::{GrowState, RegionGrower, SeedPoint, grow_region};

// Re-export options
pub use options::{DEFAULT_METRIC, DEFAULT_THRESHOLD, GrowOptions};
