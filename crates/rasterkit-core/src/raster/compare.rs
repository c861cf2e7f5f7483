//! Raster comparison operations
//!
//! This module provides functions for comparing images:
//!
//! - Pixel equality checks
//! - Pixel difference counting
//! - Maximum per-channel difference
//!
//! Comparison walks rows through the scanline accessor, so two images with
//! different strides but identical pixel content compare equal.

use super::Raster;
use crate::error::{Error, Result};

/// Result of counting pixel differences between two images
#[derive(Debug, Clone)]
pub struct PixelDiffResult {
    /// Number of pixels that differ in at least one channel
    pub n_diff: u64,
    /// Fraction of pixels that differ (0.0 to 1.0)
    pub fract_diff: f64,
    /// Maximum absolute channel difference
    pub max_diff: u8,
}

impl Raster {
    /// Check if two images have identical pixel content.
    ///
    /// Images with different dimensions or formats are never equal.
    /// Row padding is ignored.
    pub fn equals(&self, other: &Raster) -> bool {
        if !self.sizes_equal(other) {
            return false;
        }
        (0..self.height()).all(|y| self.row(y) == other.row(y))
    }

    /// Count the number of pixels that differ between two images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] or [`Error::IncompatibleFormats`]
    /// if the images cannot be compared pixel-for-pixel.
    pub fn count_pixel_diffs(&self, other: &Raster) -> Result<PixelDiffResult> {
        self.check_comparable(other)?;

        let bpp = self.format().bytes_per_pixel() as usize;
        let mut n_diff = 0u64;
        let mut max_diff = 0u8;
        for y in 0..self.height() {
            let a = self.row(y);
            let b = other.row(y);
            for (pa, pb) in a.chunks_exact(bpp).zip(b.chunks_exact(bpp)) {
                let mut differs = false;
                for (&ca, &cb) in pa.iter().zip(pb) {
                    let d = ca.abs_diff(cb);
                    if d > 0 {
                        differs = true;
                        max_diff = max_diff.max(d);
                    }
                }
                if differs {
                    n_diff += 1;
                }
            }
        }

        let total = u64::from(self.width()) * u64::from(self.height());
        Ok(PixelDiffResult {
            n_diff,
            fract_diff: n_diff as f64 / total as f64,
            max_diff,
        })
    }

    /// Get the maximum absolute per-channel difference between two images.
    ///
    /// Returns 0 for identical images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] or [`Error::IncompatibleFormats`]
    /// if the images cannot be compared pixel-for-pixel.
    pub fn max_channel_diff(&self, other: &Raster) -> Result<u8> {
        Ok(self.count_pixel_diffs(other)?.max_diff)
    }

    fn check_comparable(&self, other: &Raster) -> Result<()> {
        if self.width() != other.width() || self.height() != other.height() {
            return Err(Error::IncompatibleSizes(
                self.width(),
                self.height(),
                other.width(),
                other.height(),
            ));
        }
        if self.format() != other.format() {
            return Err(Error::IncompatibleFormats(
                self.format().bytes_per_pixel(),
                other.format().bytes_per_pixel(),
            ));
        }
        Ok(())
    }
}
