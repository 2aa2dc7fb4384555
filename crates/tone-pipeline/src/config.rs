//! Per-frame configuration for the grading and tone-map passes.
//!
//! Configuration is built once per frame from external parameters,
//! validated at construction, and consumed read-only by the per-pixel
//! shading functions. No ambient tunables; every knob is a field here.

use crate::{GradeError, GradeResult};
use tone_math::Vec3;

/// Perceptual grading parameters for one frame.
///
/// Multipliers are fractions (1.0 = no change), the hue offset is in
/// degrees. Stage enables gate the grader and the contrast blend
/// independently; a disabled stage is an identity pass-through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradingConfig {
    /// Oklab L multiplier.
    pub luminance: f32,
    /// Chroma multiplier, applied in LCh after the hue offset.
    pub saturation: f32,
    /// Hue rotation in degrees, within [-180, 180].
    pub hue_offset: f32,
    /// Oklab a-axis multiplier.
    pub a_mul: f32,
    /// Oklab b-axis multiplier.
    pub b_mul: f32,
    /// Contrast blend fraction (1.0 = no change).
    pub contrast: f32,
    /// Pivot color the contrast blend pulls toward.
    pub contrast_pivot: Vec3,
    /// Enables the Oklab/LCh grading stage.
    pub grade_enabled: bool,
    /// Enables the linear contrast stage.
    pub contrast_enabled: bool,
}

impl GradingConfig {
    /// Validates field ranges and returns the config.
    ///
    /// # Errors
    ///
    /// - `hue_offset` outside [-180, 180]
    /// - any multiplier fraction negative or non-finite
    /// - non-finite pivot color
    pub fn validated(self) -> GradeResult<Self> {
        if !(-180.0..=180.0).contains(&self.hue_offset) {
            return Err(GradeError::InvalidConfig(format!(
                "hue offset {} outside [-180, 180]",
                self.hue_offset
            )));
        }
        for (name, v) in [
            ("luminance", self.luminance),
            ("saturation", self.saturation),
            ("a multiplier", self.a_mul),
            ("b multiplier", self.b_mul),
            ("contrast", self.contrast),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(GradeError::InvalidConfig(format!(
                    "{} fraction {} must be finite and >= 0",
                    name, v
                )));
            }
        }
        if !self.contrast_pivot.is_finite() {
            return Err(GradeError::InvalidConfig(
                "contrast pivot must be finite".into(),
            ));
        }
        Ok(self)
    }

    /// True when every stage is a no-op at these settings.
    pub fn is_identity(&self) -> bool {
        let grade_noop = !self.grade_enabled
            || (self.luminance == 1.0
                && self.saturation == 1.0
                && self.hue_offset == 0.0
                && self.a_mul == 1.0
                && self.b_mul == 1.0);
        let contrast_noop = !self.contrast_enabled || self.contrast == 1.0;
        grade_noop && contrast_noop
    }
}

impl Default for GradingConfig {
    /// Identity grade: all multipliers 1, zero hue offset, mid-gray pivot.
    fn default() -> Self {
        Self {
            luminance: 1.0,
            saturation: 1.0,
            hue_offset: 0.0,
            a_mul: 1.0,
            b_mul: 1.0,
            contrast: 1.0,
            contrast_pivot: Vec3::splat(0.5),
            grade_enabled: true,
            contrast_enabled: true,
        }
    }
}

/// Tone-map parameters for one frame.
///
/// Each stage enable gates one step of the tone-map path; a disabled
/// stage passes the color through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMapConfig {
    /// Color temperature of the scene tint in Kelvin.
    pub kelvin: f32,
    /// Bit depth of the quantization target, drives dither amplitude.
    pub dither_bit_depth: u32,
    /// Enables the Kelvin tint multiply.
    pub tint_enabled: bool,
    /// Enables the display LUT lookup.
    pub lut_enabled: bool,
    /// Enables the pre-quantization dither.
    pub dither_enabled: bool,
}

impl ToneMapConfig {
    /// Validates field ranges and returns the config.
    ///
    /// # Errors
    ///
    /// Non-finite Kelvin or a zero bit depth.
    pub fn validated(self) -> GradeResult<Self> {
        if !self.kelvin.is_finite() {
            return Err(GradeError::InvalidConfig(format!(
                "kelvin {} must be finite",
                self.kelvin
            )));
        }
        if self.dither_bit_depth == 0 || self.dither_bit_depth > 16 {
            return Err(GradeError::InvalidConfig(format!(
                "dither bit depth {} outside [1, 16]",
                self.dither_bit_depth
            )));
        }
        Ok(self)
    }
}

impl Default for ToneMapConfig {
    fn default() -> Self {
        Self {
            kelvin: 6500.0,
            dither_bit_depth: 10,
            tint_enabled: true,
            lut_enabled: true,
            dither_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        assert!(GradingConfig::default().is_identity());
    }

    #[test]
    fn test_rejects_out_of_range_hue() {
        let cfg = GradingConfig {
            hue_offset: 200.0,
            ..Default::default()
        };
        assert!(matches!(cfg.validated(), Err(GradeError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_negative_fraction() {
        let cfg = GradingConfig {
            saturation: -0.5,
            ..Default::default()
        };
        assert!(cfg.validated().is_err());
    }

    #[test]
    fn test_rejects_nan_pivot() {
        let cfg = GradingConfig {
            contrast_pivot: Vec3::new(f32::NAN, 0.5, 0.5),
            ..Default::default()
        };
        assert!(cfg.validated().is_err());
    }

    #[test]
    fn test_disabled_stages_are_identity() {
        let cfg = GradingConfig {
            luminance: 2.0,
            contrast: 0.5,
            grade_enabled: false,
            contrast_enabled: false,
            ..Default::default()
        };
        assert!(cfg.is_identity());
    }

    #[test]
    fn test_tonemap_rejects_zero_bit_depth() {
        let cfg = ToneMapConfig {
            dither_bit_depth: 0,
            ..Default::default()
        };
        assert!(cfg.validated().is_err());
    }

    #[test]
    fn test_valid_config_passes() {
        let cfg = GradingConfig {
            luminance: 1.1,
            saturation: 0.9,
            hue_offset: -30.0,
            ..Default::default()
        };
        assert!(cfg.validated().is_ok());
    }
}
