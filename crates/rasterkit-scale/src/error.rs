//! Error types for rasterkit-scale

use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error)]
pub enum ScaleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Source pixel format not accepted by the requested method
    #[error("invalid source format: need {required} bytes per pixel, got {actual}")]
    InvalidFormat { required: u32, actual: u32 },

    /// Non-positive target dimensions
    #[error("invalid target size: {width}x{height}")]
    InvalidTarget { width: u32, height: u32 },

    /// Invalid scale factor
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),

    /// Worker pool construction failed
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for resampling operations
pub type ScaleResult<T> = Result<T, ScaleError>;
