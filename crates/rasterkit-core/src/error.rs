//! Error types for rasterkit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Rasterkit core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Bytes-per-pixel value outside the supported set {3, 4}
    #[error("unsupported pixel format: {0} bytes per pixel")]
    UnsupportedFormat(u32),

    /// Row stride smaller than one row of pixel data
    #[error("stride too small: {stride} bytes, need at least {required}")]
    StrideTooSmall { stride: u32, required: u32 },

    /// Supplied buffer length does not match height * stride
    #[error("data length mismatch: expected {expected} bytes, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Pixel coordinates out of bounds
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Incompatible image sizes
    #[error("incompatible image sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),

    /// Incompatible pixel formats
    #[error("incompatible pixel formats: {0} bpp vs {1} bpp")]
    IncompatibleFormats(u32, u32),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for rasterkit core operations
pub type Result<T> = std::result::Result<T, Error>;
