//! regrow-test - Regression test helpers for regrow
//!
//! This crate provides the bookkeeping used by the `*_reg` integration
//! tests of every workspace crate:
//!
//! - [`RegParams`] numbers each check, records failures instead of
//!   panicking on the first one, and reports a summary from `cleanup()`
//! - [`images`] builds small synthetic images with known geometry
//!
//! # Usage
//!
//! ```
//! use regrow_test::RegParams;
//!
//! let mut rp = RegParams::new("distance");
//! rp.compare_values(120.0, 120.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_VERBOSE`: when set to `1`, print every passing check as well

pub mod images;
mod params;

pub use images::{make_from_fn, make_row, make_uniform};
pub use params::RegParams;
