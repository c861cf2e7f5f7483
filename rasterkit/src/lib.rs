//! Rasterkit - bitmap utilities built around a resampling core
//!
//! # Overview
//!
//! Rasterkit provides packed-byte pixel buffers and the resampling core
//! consumed by the surrounding bitmap utilities:
//!
//! - Pixel buffers ([`Raster`] / [`RasterMut`], BGR or BGRA byte layout)
//! - Resampling to arbitrary target sizes (nearest-neighbor, bilinear,
//!   separable bicubic) with row-parallel execution
//!
//! # Example
//!
//! ```
//! use rasterkit::{PixelFormat, Raster};
//! use rasterkit::scale::{ScaleMethod, scale};
//!
//! let src = Raster::new(320, 200, PixelFormat::Bgr).unwrap();
//! let big = scale(&src, 640, 400, ScaleMethod::Bicubic, 0).unwrap();
//! assert_eq!((big.width(), big.height()), (640, 400));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterkit_scale as scale;
