//! Raster - the main pixel buffer container
//!
//! The `Raster` structure is the fundamental image type in rasterkit.
//! It owns one contiguous byte buffer plus its format metadata.
//!
//! # Pixel layout
//!
//! - Image data is stored row-major as packed bytes
//! - Channel order within a pixel is `[B, G, R]` or `[B, G, R, A]`
//! - Every row starts at `y * stride`; `stride >= width * bytes_per_pixel`,
//!   so rows may carry trailing padding which is never interpreted
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.

mod compare;

pub use compare::PixelDiffResult;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Packed pixel format (bytes per pixel and channel order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelFormat {
    /// 3 bytes per pixel, `[B, G, R]`, no alpha
    Bgr = 3,
    /// 4 bytes per pixel, `[B, G, R, A]`
    Bgra = 4,
}

impl PixelFormat {
    /// Create `PixelFormat` from a raw bytes-per-pixel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if `bytes` is not 3 or 4.
    pub fn from_bytes(bytes: u32) -> Result<Self> {
        match bytes {
            3 => Ok(PixelFormat::Bgr),
            4 => Ok(PixelFormat::Bgra),
            _ => Err(Error::UnsupportedFormat(bytes)),
        }
    }

    /// Get the number of bytes per pixel.
    pub fn bytes_per_pixel(self) -> u32 {
        self as u32
    }

    /// Check whether this format carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Bgra)
    }
}

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Bytes per row, including any padding
    stride: u32,
    /// Packed pixel format
    format: PixelFormat,
    /// The image data (`height * stride` bytes)
    data: Vec<u8>,
}

impl RasterData {
    /// Byte range of the pixel data of row `y` (padding excluded).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    fn row_span(&self, y: u32) -> std::ops::Range<usize> {
        assert!(y < self.height, "row {} out of bounds (height {})", y, self.height);
        let start = y as usize * self.stride as usize;
        start..start + (self.width * self.format.bytes_per_pixel()) as usize
    }
}

/// Raster - main pixel buffer container
///
/// `Raster` is the fundamental image type in rasterkit. It uses reference
/// counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use rasterkit_core::{PixelFormat, Raster};
///
/// // Create a new zeroed BGR image
/// let img = Raster::new(640, 480, PixelFormat::Bgr).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.height(), 480);
/// assert_eq!(img.stride(), 640 * 3);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the specified dimensions and format.
    ///
    /// The image data is initialized to zero and rows are tightly packed
    /// (`stride == width * bytes_per_pixel`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let stride = Self::compute_stride(width, format);
        let data = vec![0u8; stride as usize * height as usize];

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                stride,
                format,
                data,
            }),
        })
    }

    /// Create a raster from a caller-supplied buffer.
    ///
    /// The buffer must hold exactly `height * stride` bytes, and `stride`
    /// must cover at least one row of pixel data. Row padding beyond
    /// `width * bytes_per_pixel` is permitted and left untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::StrideTooSmall`] if `stride < width * bytes_per_pixel`
    /// - [`Error::DataLengthMismatch`] if `data.len() != height * stride`
    pub fn from_vec(
        width: u32,
        height: u32,
        stride: u32,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let required = Self::compute_stride(width, format);
        if stride < required {
            return Err(Error::StrideTooSmall { stride, required });
        }
        let expected = stride as usize * height as usize;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                stride,
                format,
                data,
            }),
        })
    }

    /// Compute the tight row stride for given width and format.
    ///
    /// Uses u64 arithmetic to catch overflow for absurd widths.
    ///
    /// # Panics
    ///
    /// Panics if the result would exceed `u32::MAX`.
    #[inline]
    fn compute_stride(width: u32, format: PixelFormat) -> u32 {
        let bytes = u64::from(width) * u64::from(format.bytes_per_pixel());
        u32::try_from(bytes).unwrap_or_else(|_| {
            panic!("image row too large: width={} format={:?}", width, format)
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the row stride in bytes.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.inner.stride
    }

    /// Get the pixel format.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.inner.format
    }

    /// Get raw access to the image data, padding included.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the pixel bytes of one scanline (row padding excluded).
    ///
    /// The returned slice holds exactly `width * bytes_per_pixel` bytes.
    /// This is the hot-loop accessor: one bounds check per row instead of
    /// one per pixel.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        &self.inner.data[self.inner.row_span(y)]
    }

    /// Get the channel bytes of the pixel at (x, y).
    ///
    /// Returns a slice of `bytes_per_pixel` bytes, or `None` if the
    /// coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        let bpp = self.inner.format.bytes_per_pixel() as usize;
        let row = self.row(y);
        Some(&row[x as usize * bpp..x as usize * bpp + bpp])
    }

    /// Check if two rasters have the same width, height, and format.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.format == other.inner.format
    }

    /// Create a new zeroed raster with the same dimensions, stride, and
    /// format as this one.
    pub fn create_template(&self) -> Self {
        let data = vec![0u8; self.inner.data.len()];
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                stride: self.inner.stride,
                format: self.inner.format,
                data,
            }),
        }
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                stride: self.inner.stride,
                format: self.inner.format,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`RasterMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                stride: self.inner.stride,
                format: self.inner.format,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows modification of image data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`. Holding the data exclusively (rather
/// than behind a reference count) makes disjoint-row mutable access safe
/// to hand out to parallel workers.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the row stride in bytes.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.inner.stride
    }

    /// Get the pixel format.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.inner.format
    }

    /// Get raw access to the image data, padding included.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get raw mutable access to the image data, padding included.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get the pixel bytes of one scanline (row padding excluded).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        &self.inner.data[self.inner.row_span(y)]
    }

    /// Get mutable access to the pixel bytes of one scanline.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let span = self.inner.row_span(y);
        &mut self.inner.data[span]
    }

    /// Get the channel bytes of the pixel at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        let bpp = self.inner.format.bytes_per_pixel() as usize;
        let row = self.row(y);
        Some(&row[x as usize * bpp..x as usize * bpp + bpp])
    }

    /// Set the channel bytes of the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfBounds`] if the coordinates are out of bounds
    /// - [`Error::InvalidParameter`] if `channels` does not hold exactly
    ///   `bytes_per_pixel` bytes
    pub fn set_pixel(&mut self, x: u32, y: u32, channels: &[u8]) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let bpp = self.inner.format.bytes_per_pixel() as usize;
        if channels.len() != bpp {
            return Err(Error::InvalidParameter(format!(
                "expected {} channel bytes, got {}",
                bpp,
                channels.len()
            )));
        }
        let row = self.row_mut(y);
        row[x as usize * bpp..x as usize * bpp + bpp].copy_from_slice(channels);
        Ok(())
    }

    /// Fill the whole image with one pixel value.
    ///
    /// Row padding bytes are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `channels` does not hold
    /// exactly `bytes_per_pixel` bytes.
    pub fn fill(&mut self, channels: &[u8]) -> Result<()> {
        let bpp = self.inner.format.bytes_per_pixel() as usize;
        if channels.len() != bpp {
            return Err(Error::InvalidParameter(format!(
                "expected {} channel bytes, got {}",
                bpp,
                channels.len()
            )));
        }
        for y in 0..self.inner.height {
            for px in self.row_mut(y).chunks_exact_mut(bpp) {
                px.copy_from_slice(channels);
            }
        }
        Ok(())
    }

    /// Clear all pixel bytes to zero (padding included).
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}
