//! Error types for quadwarp-core
//!
//! Provides a unified error type for raster, geometry and surface
//! operations in the core crate. Drawing onto a surface never fails;
//! only construction and explicit pixel access return errors.

use thiserror::Error;

/// quadwarp-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: ({x}, {y}) outside {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Pixel buffer length does not match the stated dimensions
    #[error("dimension mismatch: {width}x{height} needs {expected} pixels, got {actual}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Singular matrix (non-invertible)
    #[error("singular transformation matrix")]
    SingularMatrix,
}

/// Result type alias for quadwarp-core operations
pub type Result<T> = std::result::Result<T, Error>;
