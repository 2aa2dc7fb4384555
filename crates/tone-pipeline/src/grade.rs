//! Perceptual grading in Oklab/LCh and linear contrast.
//!
//! The grading order is fixed and non-commutative: the a/b multipliers
//! scale the Cartesian Oklab axes *before* chroma and hue are derived,
//! so they shift the hue the saturation multiplier then acts on.
//! Reordering these stages changes the image.

use crate::GradingConfig;
use tone_color::{Lab, lab_to_lch, lch_to_lab, oklab_to_rgb, rgb_to_oklab};
use tone_math::{Vec3, wrap_degrees};

/// Applies the Oklab/LCh grading stage to one color.
///
/// Steps, in order:
///
/// 1. RGB -> Oklab
/// 2. multiply L, a, b by the configured fractions
/// 3. Oklab -> LCh (hue via the fast arctangent)
/// 4. add the hue offset, wrap into [0, 360)
/// 5. multiply chroma by the saturation fraction
/// 6. LCh -> Oklab -> RGB
///
/// The result is unclamped; out-of-gamut values are expected
/// intermediate states. An exactly neutral input hits the NaN-hue
/// degeneracy of the polar conversion and comes back NaN; real sampled
/// colors never land exactly on the neutral axis.
pub fn grade(rgb: Vec3, config: &GradingConfig) -> Vec3 {
    let ok = rgb_to_oklab(rgb);
    let scaled = Lab::new(
        ok.l * config.luminance,
        ok.a * config.a_mul,
        ok.b * config.b_mul,
    );

    let mut lch = lab_to_lch(scaled);
    lch.h = wrap_degrees(lch.h + config.hue_offset);
    lch.c *= config.saturation;

    oklab_to_rgb(lch_to_lab(lch))
}

/// Linear contrast as a blend toward a pivot color.
///
/// `lerp(pivot, color, fraction)`: 1.0 is identity, 0.0 collapses to
/// the pivot, above 1.0 pushes away from it. Not a power curve.
#[inline]
pub fn contrast(rgb: Vec3, pivot: Vec3, fraction: f32) -> Vec3 {
    pivot.lerp(rgb, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3, tol: f32, what: &str) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < tol, "{}: {:?} vs {:?}", what, a, b);
        }
    }

    #[test]
    fn test_identity_settings_preserve_color() {
        // All multipliers 1, zero hue offset: identity up to the round
        // trip and fast-atan2 tolerance
        let config = GradingConfig::default();
        for &c in &[[0.5, 0.3, 0.2], [0.1, 0.8, 0.4], [0.9, 0.8, 0.7]] {
            let rgb = Vec3::from_array(c);
            assert_close(grade(rgb, &config), rgb, 2e-3, "identity grade");
        }
    }

    #[test]
    fn test_luminance_scales_lightness() {
        let config = GradingConfig {
            luminance: 1.3,
            ..Default::default()
        };
        let rgb = Vec3::new(0.4, 0.35, 0.3);
        let graded = grade(rgb, &config);
        let before = rgb_to_oklab(rgb).l;
        let after = rgb_to_oklab(graded).l;
        assert!(
            (after - before * 1.3).abs() < 5e-3,
            "L {} -> {}",
            before,
            after
        );
    }

    #[test]
    fn test_saturation_zero_desaturates() {
        let config = GradingConfig {
            saturation: 0.0,
            ..Default::default()
        };
        let graded = grade(Vec3::new(0.8, 0.2, 0.1), &config);
        let ok = rgb_to_oklab(graded);
        assert!(ok.a.abs() < 1e-3 && ok.b.abs() < 1e-3, "{:?}", ok);
    }

    #[test]
    fn test_hue_offset_rotates() {
        let config = GradingConfig {
            hue_offset: 60.0,
            ..Default::default()
        };
        let rgb = Vec3::new(0.7, 0.2, 0.2);
        let h0 = lab_to_lch(rgb_to_oklab(rgb)).h;
        let h1 = lab_to_lch(rgb_to_oklab(grade(rgb, &config))).h;
        let mut dh = (h1 - h0 - 60.0).abs();
        if dh > 180.0 {
            dh = 360.0 - dh;
        }
        assert!(dh < 1.0, "hue moved {} -> {}", h0, h1);
    }

    #[test]
    fn test_ab_multipliers_shift_hue_before_saturation() {
        // Scaling only b in Oklab changes the derived hue, which a plain
        // chroma multiplier never does
        let config = GradingConfig {
            b_mul: 2.0,
            ..Default::default()
        };
        let rgb = Vec3::new(0.6, 0.4, 0.2);
        let h0 = lab_to_lch(rgb_to_oklab(rgb)).h;
        let h1 = lab_to_lch(rgb_to_oklab(grade(rgb, &config))).h;
        let mut dh = (h1 - h0).abs();
        if dh > 180.0 {
            dh = 360.0 - dh;
        }
        assert!(dh > 1.0, "b multiplier left hue at {}", h0);
    }

    #[test]
    fn test_contrast_is_pivot_blend() {
        let pivot = Vec3::splat(0.5);
        let rgb = Vec3::new(0.9, 0.1, 0.5);
        assert_close(contrast(rgb, pivot, 1.0), rgb, 1e-6, "fraction 1");
        assert_close(contrast(rgb, pivot, 0.0), pivot, 1e-6, "fraction 0");
        let half = contrast(rgb, pivot, 0.5);
        assert_close(half, Vec3::new(0.7, 0.3, 0.5), 1e-6, "fraction 0.5");
    }

    #[test]
    fn test_contrast_above_one_expands() {
        let pivot = Vec3::splat(0.5);
        let out = contrast(Vec3::new(0.6, 0.4, 0.5), pivot, 2.0);
        assert_close(out, Vec3::new(0.7, 0.3, 0.5), 1e-6, "fraction 2");
    }
}
