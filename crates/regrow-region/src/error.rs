//! Error types for regrow-region

use regrow_color::ColorError;
use thiserror::Error;

/// Errors that can occur during region growing
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] regrow_core::Error),

    /// Seed coordinate outside the image
    #[error("seed ({row}, {col}) outside {width}x{height} image")]
    OutOfBounds {
        row: i64,
        col: i64,
        width: u32,
        height: u32,
    },

    /// Operation called in a state that does not allow it
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// Metric selector, threshold or metric constants rejected
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<ColorError> for RegionError {
    fn from(err: ColorError) -> Self {
        RegionError::InvalidConfiguration(err.to_string())
    }
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
