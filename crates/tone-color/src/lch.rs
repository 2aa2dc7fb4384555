//! Cartesian Lab <-> polar L\*C\*h\* conversions.
//!
//! Chroma is the Euclidean norm of the (a, b) opponent axes; hue comes
//! from the fast arctangent in `tone-math` and is always normalized into
//! [0, 360) degrees.

use crate::Lab;
use tone_math::{fast_atan2, wrap_degrees};

/// A polar Lab color: lightness, chroma, hue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lch {
    /// Lightness, same scale as the source Lab.
    pub l: f32,
    /// Chroma, nominally >= 0.
    pub c: f32,
    /// Hue angle in degrees, normalized to [0, 360).
    pub h: f32,
}

impl Lch {
    /// Creates an LCh color from components.
    #[inline]
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }
}

/// Converts Cartesian Lab to polar LCh.
///
/// Hue uses [`fast_atan2`], so it carries that approximation's sub-0.2
/// degree error. An exactly neutral color (a = b = 0) produces a NaN hue
/// from the degenerate arctangent, and the NaN survives the inverse
/// (`0 * cos(NaN)` is NaN). Documented boundary condition, reproduced
/// as-is rather than epsilon-clamped.
#[inline]
pub fn lab_to_lch(lab: Lab) -> Lch {
    let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
    let h = wrap_degrees(fast_atan2(lab.b, lab.a).to_degrees());
    Lch::new(lab.l, c, h)
}

/// Converts polar LCh back to Cartesian Lab.
#[inline]
pub fn lch_to_lab(lch: Lch) -> Lab {
    let rad = lch.h.to_radians();
    Lab::new(lch.l, lch.c * rad.cos(), lch.c * rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lch_identity_over_polar_grid() {
        // lch_to_lab then lab_to_lch is identity for h in [0, 360), c >= 0
        for hi in 0..36 {
            for &c in &[0.5, 10.0, 60.0] {
                let h = hi as f32 * 10.0;
                let lch = Lch::new(50.0, c, h);
                let back = lab_to_lch(lch_to_lab(lch));
                assert!((back.l - lch.l).abs() < 1e-4);
                assert!((back.c - lch.c).abs() < 1e-3, "c at h={}: {}", h, back.c);
                let mut dh = (back.h - lch.h).abs();
                if dh > 180.0 {
                    dh = 360.0 - dh;
                }
                assert!(dh < 0.2, "h={} came back as {}", h, back.h);
            }
        }
    }

    #[test]
    fn test_hue_quadrants() {
        assert!(lab_to_lch(Lab::new(50.0, 10.0, 0.0)).h.abs() < 0.2);
        assert!((lab_to_lch(Lab::new(50.0, 0.0, 10.0)).h - 90.0).abs() < 0.2);
        assert!((lab_to_lch(Lab::new(50.0, -10.0, 0.0)).h - 180.0).abs() < 0.2);
        assert!((lab_to_lch(Lab::new(50.0, 0.0, -10.0)).h - 270.0).abs() < 0.2);
    }

    #[test]
    fn test_chroma_is_norm() {
        let lch = lab_to_lch(Lab::new(50.0, 3.0, 4.0));
        assert!((lch.c - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_neutral_hue_is_nan() {
        // Degenerate atan2 at the neutral axis propagates, chroma stays 0
        let lch = lab_to_lch(Lab::new(50.0, 0.0, 0.0));
        assert!(lch.h.is_nan());
        assert_eq!(lch.c, 0.0);
    }
}
