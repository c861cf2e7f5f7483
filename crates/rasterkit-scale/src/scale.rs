//! Image scaling facade
//!
//! Validates the request, short-circuits the degenerate identity size,
//! and dispatches to the resampler selected by [`ScaleMethod`].
//!
//! # Minification
//!
//! No method prefilters when shrinking: every mode samples at most its
//! usual tap window around each mapped center, so heavy downscales behave
//! like nearest-neighbor sampling. Callers relying on that behavior get it
//! unchanged here.

use crate::error::{ScaleError, ScaleResult};
use crate::{bicubic, bilinear, nearest};
use rasterkit_core::{PixelFormat, Raster};

/// Interpolation method to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMethod {
    /// Nearest-neighbor sampling (fastest, pixelated results)
    #[default]
    NearestNeighbor,
    /// Bilinear interpolation (2x2 taps, smooth)
    Bilinear,
    /// Separable Catmull-Rom bicubic (4 taps per axis, sharpest)
    Bicubic,
}

/// Scale an image to a target size
///
/// # Arguments
/// * `src` - Input image (3-byte BGR only)
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `method` - Interpolation method
/// * `threads` - Worker count; 0 uses one worker per available CPU
///
/// The output is always a freshly allocated buffer with tightly packed
/// rows; `src` is never mutated. Output bytes are identical for every
/// `threads` value.
///
/// # Errors
/// - [`ScaleError::InvalidFormat`] if `src` is not 3 bytes per pixel
/// - [`ScaleError::InvalidTarget`] if `width` or `height` is 0
pub fn scale(
    src: &Raster,
    width: u32,
    height: u32,
    method: ScaleMethod,
    threads: usize,
) -> ScaleResult<Raster> {
    if src.format() != PixelFormat::Bgr {
        return Err(ScaleError::InvalidFormat {
            required: PixelFormat::Bgr.bytes_per_pixel(),
            actual: src.format().bytes_per_pixel(),
        });
    }
    if width == 0 || height == 0 {
        return Err(ScaleError::InvalidTarget { width, height });
    }
    if width == src.width() && height == src.height() {
        return Ok(src.deep_clone());
    }

    if threads == 0 {
        dispatch(src, width, height, method)
    } else {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
        pool.install(|| dispatch(src, width, height, method))
    }
}

fn dispatch(src: &Raster, width: u32, height: u32, method: ScaleMethod) -> ScaleResult<Raster> {
    match method {
        ScaleMethod::NearestNeighbor => nearest::scale_nearest(src, width, height),
        ScaleMethod::Bilinear => bilinear::scale_bilinear(src, width, height),
        ScaleMethod::Bicubic => bicubic::scale_bicubic(src, width, height),
    }
}

/// Scale an image by the given factors
///
/// Target extents are `max(1, round(extent * factor))` per axis.
///
/// # Arguments
/// * `src` - Input image
/// * `scale_x` - Horizontal scale factor (e.g., 2.0 = double width)
/// * `scale_y` - Vertical scale factor
/// * `method` - Interpolation method
/// * `threads` - Worker count; 0 uses one worker per available CPU
///
/// # Errors
/// Returns [`ScaleError::InvalidScaleFactor`] if a factor is not a
/// positive finite number, plus everything [`scale`] can return.
pub fn scale_by_factor(
    src: &Raster,
    scale_x: f32,
    scale_y: f32,
    method: ScaleMethod,
    threads: usize,
) -> ScaleResult<Raster> {
    if !scale_x.is_finite() || !scale_y.is_finite() || scale_x <= 0.0 || scale_y <= 0.0 {
        return Err(ScaleError::InvalidScaleFactor(format!(
            "{scale_x} x {scale_y}"
        )));
    }
    let width = ((src.width() as f32 * scale_x).round() as u32).max(1);
    let height = ((src.height() as f32 * scale_y).round() as u32).max(1);
    scale(src, width, height, method, threads)
}

/// Scale an image to a specific size, optionally preserving aspect ratio
///
/// # Arguments
/// * `src` - Input image
/// * `width` - Target width (0 to derive from `height` keeping aspect)
/// * `height` - Target height (0 to derive from `width` keeping aspect)
/// * `method` - Interpolation method
/// * `threads` - Worker count; 0 uses one worker per available CPU
///
/// # Errors
/// Returns [`ScaleError::InvalidTarget`] if both extents are 0, plus
/// everything [`scale`] can return.
pub fn scale_to_size(
    src: &Raster,
    width: u32,
    height: u32,
    method: ScaleMethod,
    threads: usize,
) -> ScaleResult<Raster> {
    let (width, height) = match (width, height) {
        (0, 0) => return Err(ScaleError::InvalidTarget { width, height }),
        (0, h) => {
            let w = (src.width() as f64 * f64::from(h) / src.height() as f64).round() as u32;
            (w.max(1), h)
        }
        (w, 0) => {
            let h = (src.height() as f64 * f64::from(w) / src.width() as f64).round() as u32;
            (w, h.max(1))
        }
        (w, h) => (w, h),
    };
    scale(src, width, height, method, threads)
}

#[cfg(test)]
mod tests {
    use super::*;

    const METHODS: [ScaleMethod; 3] = [
        ScaleMethod::NearestNeighbor,
        ScaleMethod::Bilinear,
        ScaleMethod::Bicubic,
    ];

    /// Deterministic non-uniform test image.
    fn checker(w: u32, h: u32) -> Raster {
        let img = Raster::new(w, h, PixelFormat::Bgr).unwrap();
        let mut m = img.try_into_mut().unwrap();
        for y in 0..h {
            for x in 0..w {
                let v = ((x * 37 + y * 101) % 256) as u8;
                m.set_pixel(x, y, &[v, v.wrapping_mul(3), 255 - v]).unwrap();
            }
        }
        m.into()
    }

    #[test]
    fn test_rejects_alpha_format() {
        let src = Raster::new(4, 4, PixelFormat::Bgra).unwrap();
        for method in METHODS {
            assert!(matches!(
                scale(&src, 8, 8, method, 0),
                Err(ScaleError::InvalidFormat { required: 3, actual: 4 })
            ));
        }
    }

    #[test]
    fn test_rejects_zero_target() {
        let src = checker(4, 4);
        assert!(matches!(
            scale(&src, 0, 8, ScaleMethod::Bilinear, 0),
            Err(ScaleError::InvalidTarget { .. })
        ));
        assert!(matches!(
            scale(&src, 8, 0, ScaleMethod::Bicubic, 0),
            Err(ScaleError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_identity_short_circuit() {
        let src = checker(6, 5);
        for method in METHODS {
            let out = scale(&src, 6, 5, method, 0).unwrap();
            assert!(out.equals(&src), "{method:?}");
            // distinct allocation, not a shared handle
            assert_ne!(out.data().as_ptr(), src.data().as_ptr());
        }
    }

    #[test]
    fn test_one_by_one_source_constant_for_all_modes() {
        let img = Raster::new(1, 1, PixelFormat::Bgr).unwrap();
        let mut m = img.try_into_mut().unwrap();
        m.set_pixel(0, 0, &[9, 130, 201]).unwrap();
        let src: Raster = m.into();

        for method in METHODS {
            let out = scale(&src, 13, 7, method, 0).unwrap();
            for y in 0..7 {
                for px in out.row(y).chunks_exact(3) {
                    assert_eq!(px, &[9, 130, 201], "{method:?}");
                }
            }
        }
    }

    #[test]
    fn test_deterministic_across_thread_hints() {
        let src = checker(23, 17);
        for method in METHODS {
            let serial = scale(&src, 57, 41, method, 1).unwrap();
            let parallel = scale(&src, 57, 41, method, 4).unwrap();
            let default_pool = scale(&src, 57, 41, method, 0).unwrap();
            assert!(serial.equals(&parallel), "{method:?}");
            assert!(serial.equals(&default_pool), "{method:?}");
        }
    }

    #[test]
    fn test_padded_and_tight_sources_agree() {
        let tight = checker(9, 6);
        let mut padded_data = Vec::new();
        for y in 0..6 {
            padded_data.extend_from_slice(tight.row(y));
            padded_data.extend_from_slice(&[0xCC; 5]);
        }
        let padded =
            Raster::from_vec(9, 6, 9 * 3 + 5, PixelFormat::Bgr, padded_data).unwrap();

        for method in METHODS {
            let a = scale(&tight, 20, 15, method, 0).unwrap();
            let b = scale(&padded, 20, 15, method, 0).unwrap();
            assert!(a.equals(&b), "{method:?}");
        }
    }

    #[test]
    fn test_source_not_mutated() {
        let src = checker(5, 5);
        let before = src.deep_clone();
        for method in METHODS {
            let _ = scale(&src, 11, 3, method, 2).unwrap();
        }
        assert!(src.equals(&before));
    }

    #[test]
    fn test_output_dimensions() {
        let src = checker(10, 20);
        let out = scale(&src, 33, 44, ScaleMethod::Bicubic, 0).unwrap();
        assert_eq!(out.width(), 33);
        assert_eq!(out.height(), 44);
        assert_eq!(out.format(), PixelFormat::Bgr);
        assert_eq!(out.stride(), 33 * 3);
    }

    #[test]
    fn test_scale_by_factor() {
        let src = checker(10, 20);
        let out = scale_by_factor(&src, 2.0, 0.5, ScaleMethod::NearestNeighbor, 0).unwrap();
        assert_eq!(out.width(), 20);
        assert_eq!(out.height(), 10);

        // tiny factors clamp to a 1-pixel extent
        let out = scale_by_factor(&src, 0.01, 0.01, ScaleMethod::Bilinear, 0).unwrap();
        assert_eq!((out.width(), out.height()), (1, 1));

        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                scale_by_factor(&src, bad, 1.0, ScaleMethod::Bilinear, 0),
                Err(ScaleError::InvalidScaleFactor(_))
            ));
        }
    }

    #[test]
    fn test_scale_to_size_preserves_aspect() {
        let src = checker(40, 20);
        let out = scale_to_size(&src, 0, 10, ScaleMethod::NearestNeighbor, 0).unwrap();
        assert_eq!((out.width(), out.height()), (20, 10));

        let out = scale_to_size(&src, 10, 0, ScaleMethod::NearestNeighbor, 0).unwrap();
        assert_eq!((out.width(), out.height()), (10, 5));

        assert!(matches!(
            scale_to_size(&src, 0, 0, ScaleMethod::NearestNeighbor, 0),
            Err(ScaleError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_default_method_is_nearest() {
        assert_eq!(ScaleMethod::default(), ScaleMethod::NearestNeighbor);
    }
}
