//! Fast polar-angle approximation and hue angle helpers.
//!
//! Hue extraction runs once per pixel in the perceptual grader, so the
//! exact `atan2` is replaced with a short rational polynomial. The fit is
//! the standard GPU arctangent approximation: divide the smaller axis
//! magnitude by the larger, evaluate an odd cubic, then fold the result
//! back into the correct quadrant.

use std::f32::consts::{FRAC_PI_2, PI};

/// Fast two-argument arctangent approximation.
///
/// Maximum error is below 0.2 degrees against [`f32::atan2`]. The
/// polynomial argument is `min(|x|, |y|) / max(|x|, |y|)`, so the division
/// is always by the larger-magnitude axis; quadrant corrections are then
/// applied (pi/2 - r when `|y| > |x|`, pi - r when `x < 0`, negation when
/// `y < 0`).
///
/// # Degenerate input
///
/// `fast_atan2(0.0, 0.0)` divides zero by zero and returns NaN. This
/// matches the source pipeline, which documents the degeneracy instead of
/// special-casing it; the NaN propagates through the hue computation.
///
/// # Example
///
/// ```rust
/// use tone_math::fast_atan2;
///
/// let a = fast_atan2(1.0, 1.0);
/// assert!((a - std::f32::consts::FRAC_PI_4).abs() < 0.004);
/// ```
#[inline]
pub fn fast_atan2(y: f32, x: f32) -> f32 {
    let ax = x.abs();
    let ay = y.abs();
    let a = ax.min(ay) / ax.max(ay);
    let s = a * a;
    let mut r = ((-0.046_496_475 * s + 0.159_314_22) * s - 0.327_622_76) * s * a + a;
    if ay > ax {
        r = FRAC_PI_2 - r;
    }
    if x < 0.0 {
        r = PI - r;
    }
    if y < 0.0 { -r } else { r }
}

/// Normalizes an angle in degrees into the half-open range [0, 360).
///
/// Applied after every piece of hue arithmetic (atan2 extraction,
/// hue-offset addition) so hue always satisfies the [0, 360) invariant.
///
/// # Example
///
/// ```rust
/// use tone_math::wrap_degrees;
///
/// assert_eq!(wrap_degrees(-30.0), 330.0);
/// assert_eq!(wrap_degrees(360.0), 0.0);
/// assert_eq!(wrap_degrees(725.0), 5.0);
/// ```
#[inline]
pub fn wrap_degrees(h: f32) -> f32 {
    h.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0.2 degrees in radians.
    const MAX_ERR: f32 = 0.2 * PI / 180.0;

    #[test]
    fn test_fast_atan2_dense_grid() {
        // Dense grid over all four quadrants, excluding the origin
        for i in -40i32..=40 {
            for j in -40i32..=40 {
                if i == 0 && j == 0 {
                    continue;
                }
                let x = i as f32 * 0.25;
                let y = j as f32 * 0.25;
                let approx = fast_atan2(y, x);
                let exact = y.atan2(x);
                let mut diff = (approx - exact).abs();
                // Angles are equivalent modulo 2*pi at the +-pi seam
                if diff > PI {
                    diff = 2.0 * PI - diff;
                }
                assert!(
                    diff < MAX_ERR,
                    "fast_atan2({}, {}) = {}, exact = {}, err = {}",
                    y,
                    x,
                    approx,
                    exact,
                    diff
                );
            }
        }
    }

    #[test]
    fn test_fast_atan2_axes() {
        assert!((fast_atan2(0.0, 1.0)).abs() < MAX_ERR);
        assert!((fast_atan2(1.0, 0.0) - FRAC_PI_2).abs() < MAX_ERR);
        assert!((fast_atan2(0.0, -1.0).abs() - PI).abs() < MAX_ERR);
        assert!((fast_atan2(-1.0, 0.0) + FRAC_PI_2).abs() < MAX_ERR);
    }

    #[test]
    fn test_fast_atan2_origin_is_nan() {
        // Documented degeneracy: 0/0 propagates, no epsilon clamp
        assert!(fast_atan2(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(359.9), 359.9);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-30.0), 330.0);
        assert_eq!(wrap_degrees(720.5), 0.5);
        assert!(wrap_degrees(f32::NAN).is_nan());
    }

    #[test]
    fn test_wrap_degrees_range() {
        for i in -1000..1000 {
            let h = wrap_degrees(i as f32 * 1.7);
            assert!((0.0..360.0).contains(&h), "wrap({}) = {}", i as f32 * 1.7, h);
        }
    }
}
