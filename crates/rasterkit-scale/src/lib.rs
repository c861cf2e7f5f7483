//! rasterkit-scale - Raster resampling for rasterkit
//!
//! This crate provides the resampling core of the rasterkit bitmap
//! utilities:
//!
//! - Nearest-neighbor sampling (direct address mapping)
//! - Bilinear interpolation (2x2 taps, single pass)
//! - Separable Catmull-Rom bicubic (4 taps per axis, two passes with
//!   precomputed weight tables)
//!
//! All methods map output coordinates through half-pixel centers, clamp at
//! the image borders, and fan output scanlines out over a rayon worker
//! pool. The [`scale`] facade owns validation and method dispatch; the
//! individual resamplers are not exposed.

mod bicubic;
mod bilinear;
mod clamp;
mod error;
mod nearest;
mod scale;

pub use error::{ScaleError, ScaleResult};
pub use scale::{ScaleMethod, scale, scale_by_factor, scale_to_size};
