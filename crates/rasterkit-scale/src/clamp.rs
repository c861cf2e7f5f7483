//! Saturating float-to-byte conversion
//!
//! Every resampler that computes a weighted floating-point channel value
//! funnels it through [`clamp_channel`] on the way back to a byte.

/// Saturate `v` to `[0, 255]` and round half-up (`+0.5` truncation).
#[inline]
pub(crate) fn clamp_channel(v: f32) -> u8 {
    if v <= 0.0 {
        0
    } else if v >= 255.0 {
        255
    } else {
        (v + 0.5) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_saturates() {
        assert_eq!(clamp_channel(-1.0), 0);
        assert_eq!(clamp_channel(-0.001), 0);
        assert_eq!(clamp_channel(256.0), 255);
        assert_eq!(clamp_channel(1e9), 255);
        assert_eq!(clamp_channel(f32::NEG_INFINITY), 0);
        assert_eq!(clamp_channel(f32::INFINITY), 255);
    }

    #[test]
    fn test_clamp_rounds_half_up() {
        assert_eq!(clamp_channel(0.0), 0);
        assert_eq!(clamp_channel(0.49), 0);
        assert_eq!(clamp_channel(0.5), 1);
        assert_eq!(clamp_channel(127.5), 128);
        assert_eq!(clamp_channel(254.4), 254);
        assert_eq!(clamp_channel(254.6), 255);
        assert_eq!(clamp_channel(255.0), 255);
    }
}
