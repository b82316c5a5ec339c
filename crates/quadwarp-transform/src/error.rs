//! Error types for quadwarp-transform

use thiserror::Error;

/// Errors that can occur while setting up a warp
///
/// Drawing itself never fails: a degenerate quadrilateral is skipped and
/// numerical singularities are clamped.
#[derive(Debug, Error)]
pub enum WarpError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] quadwarp_core::Error),

    /// Invalid construction argument (e.g. an empty image)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for warp operations
pub type WarpResult<T> = Result<T, WarpError>;
