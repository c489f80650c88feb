//! Error types for regrow-color

use thiserror::Error;

/// Errors that can occur when configuring a color distance
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Numeric metric selector outside 0..=4
    #[error("invalid metric selector: {0} (expected 0..=4)")]
    InvalidMetric(u8),

    /// Metric name that matches no known metric
    #[error("unknown metric: {0:?}")]
    UnknownMetric(String),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
