//! Nearest-neighbor resampling
//!
//! Direct address mapping under the half-pixel-center convention: output
//! pixel `i` samples the source pixel containing `(i + 0.5) * ratio`.
//! Channel bytes are copied verbatim, so repeated application never
//! accumulates rounding error.

use crate::ScaleResult;
use rasterkit_core::Raster;
use rayon::prelude::*;

/// Resample `src` to `width` x `height` by nearest-neighbor sampling.
///
/// Output rows are computed independently and in parallel; each worker
/// owns one disjoint scanline of the target buffer.
pub(crate) fn scale_nearest(src: &Raster, width: u32, height: u32) -> ScaleResult<Raster> {
    let bpp = src.format().bytes_per_pixel() as usize;
    let ratio_x = src.width() as f32 / width as f32;
    let ratio_y = src.height() as f32 / height as f32;
    let last_row = src.height() - 1;

    // Byte offset of the sampled source pixel for every output column,
    // computed once and shared read-only by all row workers. The center
    // is always < src extent; the min() only guards f32 rounding.
    let last_col = (src.width() - 1) as usize;
    let col_offsets: Vec<usize> = (0..width)
        .map(|x| (((x as f32 + 0.5) * ratio_x) as usize).min(last_col) * bpp)
        .collect();

    let out = Raster::new(width, height, src.format())?;
    let mut out = out.try_into_mut().unwrap();
    let stride = out.stride() as usize;

    out.data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let src_y = (((y as f32 + 0.5) * ratio_y) as u32).min(last_row);
            let src_row = src.row(src_y);
            for (x, &off) in col_offsets.iter().enumerate() {
                dst_row[x * bpp..x * bpp + bpp].copy_from_slice(&src_row[off..off + bpp]);
            }
        });

    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::PixelFormat;

    #[test]
    fn test_upsample_2x1_to_4x1() {
        // Two pixels, red then green (BGR byte order). With half-pixel
        // centers each source pixel covers exactly two output pixels.
        let src = Raster::from_vec(
            2,
            1,
            6,
            PixelFormat::Bgr,
            vec![0, 0, 255, 0, 255, 0],
        )
        .unwrap();
        let out = scale_nearest(&src, 4, 1).unwrap();
        assert_eq!(out.row(0), &[0, 0, 255, 0, 0, 255, 0, 255, 0, 0, 255, 0]);
    }

    #[test]
    fn test_downsample_picks_covering_pixel() {
        // 4x1 -> 2x1: centers at 1.0 and 3.0 sample pixels 1 and 3.
        let src = Raster::from_vec(
            4,
            1,
            12,
            PixelFormat::Bgr,
            vec![10, 10, 10, 20, 20, 20, 30, 30, 30, 40, 40, 40],
        )
        .unwrap();
        let out = scale_nearest(&src, 2, 1).unwrap();
        assert_eq!(out.row(0), &[20, 20, 20, 40, 40, 40]);
    }

    #[test]
    fn test_identity_is_exact() {
        let src = Raster::from_vec(
            3,
            2,
            9,
            PixelFormat::Bgr,
            (0..18).collect::<Vec<u8>>(),
        )
        .unwrap();
        let out = scale_nearest(&src, 3, 2).unwrap();
        assert!(out.equals(&src));
    }

    #[test]
    fn test_source_padding_ignored() {
        let tight = Raster::from_vec(2, 2, 6, PixelFormat::Bgr, (0..12).collect()).unwrap();
        let mut padded_data = Vec::new();
        for y in 0..2 {
            padded_data.extend_from_slice(tight.row(y));
            padded_data.extend_from_slice(&[0xEE, 0xEE]);
        }
        let padded = Raster::from_vec(2, 2, 8, PixelFormat::Bgr, padded_data).unwrap();

        let a = scale_nearest(&tight, 5, 5).unwrap();
        let b = scale_nearest(&padded, 5, 5).unwrap();
        assert!(a.equals(&b));
    }
}
