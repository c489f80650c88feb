//! Error types for regrow-core
//!
//! Provides a unified error type for the image and mask containers.
//! Each variant captures enough context for diagnostics without exposing
//! internal layout details.

use thiserror::Error;

/// regrow-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinate out of bounds
    #[error("index out of bounds: ({x}, {y}) outside {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Sample buffer length does not match the image dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
