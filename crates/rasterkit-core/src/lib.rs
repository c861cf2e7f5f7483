//! Rasterkit Core - Basic pixel buffer types for bitmap utilities
//!
//! This crate provides the fundamental data structures shared by the
//! rasterkit bitmap utilities:
//!
//! - [`Raster`] / [`RasterMut`] - The main pixel buffer (immutable / mutable)
//! - [`PixelFormat`] - Packed byte layout of one pixel (BGR or BGRA)
//!
//! Buffers are packed row-major byte arrays. The row stride may exceed
//! `width * bytes_per_pixel`; padding bytes are carried but never
//! interpreted.

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{PixelDiffResult, PixelFormat, Raster, RasterMut};
