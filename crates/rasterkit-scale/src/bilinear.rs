//! Bilinear resampling
//!
//! Single-pass 2x2-tap interpolation. Each axis contributes the pixel
//! containing the mapped center plus the neighbor the center leans toward;
//! the four 2-D weights are the products of the axis weights, renormalized
//! so boundary clamping never changes the total contribution. Edge policy
//! is clamp-to-edge, never wrap or extrapolate.

use crate::ScaleResult;
use crate::clamp::clamp_channel;
use rasterkit_core::Raster;
use rayon::prelude::*;

/// Two source taps along one axis for one output coordinate.
#[derive(Debug, Clone, Copy)]
struct AxisTap {
    /// Index of the pixel containing the mapped center
    i0: usize,
    /// Index of the neighbor the center leans toward
    i1: usize,
    w0: f32,
    w1: f32,
}

/// Map output coordinate `out` to its two source taps.
///
/// Uses the half-pixel-center convention: `center = (out + 0.5) * ratio`.
/// The axis weight of the containing pixel is one minus the distance from
/// `center` to that pixel's own center; its neighbor gets the complement.
/// Both indices are clamped to `[0, last]`.
fn axis_tap(out: u32, ratio: f32, last: usize) -> AxisTap {
    let center = (out as f32 + 0.5) * ratio;
    let idx = center.floor();
    let other = if center < idx + 0.5 { idx - 1.0 } else { idx + 1.0 };
    let w0 = 1.0 - (center - (idx + 0.5)).abs();
    AxisTap {
        i0: (idx.max(0.0) as usize).min(last),
        i1: (other.max(0.0) as usize).min(last),
        w0,
        w1: 1.0 - w0,
    }
}

/// Resample `src` to `width` x `height` by bilinear interpolation.
///
/// Column taps are precomputed once and shared read-only by all row
/// workers; each worker owns one disjoint scanline of the target buffer.
pub(crate) fn scale_bilinear(src: &Raster, width: u32, height: u32) -> ScaleResult<Raster> {
    let bpp = src.format().bytes_per_pixel() as usize;
    let ratio_x = src.width() as f32 / width as f32;
    let ratio_y = src.height() as f32 / height as f32;
    let last_x = (src.width() - 1) as usize;
    let last_y = (src.height() - 1) as usize;

    let cols: Vec<AxisTap> = (0..width).map(|x| axis_tap(x, ratio_x, last_x)).collect();

    let out = Raster::new(width, height, src.format())?;
    let mut out = out.try_into_mut().unwrap();
    let stride = out.stride() as usize;

    out.data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let ty = axis_tap(y as u32, ratio_y, last_y);
            let row0 = src.row(ty.i0 as u32);
            let row1 = src.row(ty.i1 as u32);
            for (x, tx) in cols.iter().enumerate() {
                let w = [
                    tx.w0 * ty.w0,
                    tx.w1 * ty.w0,
                    tx.w0 * ty.w1,
                    tx.w1 * ty.w1,
                ];
                let inv = 1.0 / (w[0] + w[1] + w[2] + w[3]);
                let p00 = &row0[tx.i0 * bpp..tx.i0 * bpp + bpp];
                let p10 = &row0[tx.i1 * bpp..tx.i1 * bpp + bpp];
                let p01 = &row1[tx.i0 * bpp..tx.i0 * bpp + bpp];
                let p11 = &row1[tx.i1 * bpp..tx.i1 * bpp + bpp];
                for c in 0..bpp {
                    let v = p00[c] as f32 * w[0]
                        + p10[c] as f32 * w[1]
                        + p01[c] as f32 * w[2]
                        + p11[c] as f32 * w[3];
                    dst_row[x * bpp + c] = clamp_channel(v * inv);
                }
            }
        });

    Ok(out.into())
}
