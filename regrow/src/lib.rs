//! Regrow - Seeded region growing for Rust
//!
//! Grows the 4-connected region around a seed pixel whose pixels are
//! within a distance threshold of the seed's value, and reports the result
//! as a three-valued mask.
//!
//! # Overview
//!
//! - Image and mask containers ([`Pix`], [`Mask`])
//! - Five interchangeable distance metrics ([`color`])
//! - The region growing engine ([`region`])
//!
//! # Example
//!
//! ```
//! use regrow::color::ColorMetric;
//! use regrow::region::RegionGrower;
//! use regrow::{MaskValue, Pix};
//!
//! let pix = Pix::new_filled(6, 4, [90, 120, 30]).unwrap();
//! let mut grower = RegionGrower::new(pix);
//! grower.set_params(ColorMetric::Redmean, 4000.0).unwrap();
//! grower.set_point(1, 1).unwrap();
//! let mask = grower.find_region().unwrap();
//! assert_eq!(mask.count(MaskValue::Accepted), 24);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use regrow_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use regrow_color as color;
pub use regrow_region as region;
