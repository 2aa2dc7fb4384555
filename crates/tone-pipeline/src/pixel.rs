//! Per-pixel orchestration of the two display paths.
//!
//! Each shade function is a pure function of its sampled inputs and the
//! read-only per-frame state, so any host loop (single thread, tile
//! pool, GPU-style dispatch) may invoke it per pixel with no ordering.
//!
//! Stage order is load-bearing in both paths and must not be rearranged.

use crate::{Ditherer, ExposureModel, GradeResult, GradingConfig, ToneMapConfig, grade};
use tone_color::kelvin_to_rgb;
use tone_lut::LutAtlas;
use tone_math::Vec3;
use tone_transfer::log_c4;
use tone_transfer::srgb_fast::{apply_srgb_fast, remove_srgb_fast};

/// Position of a pixel within a frame sequence, seeds the dither.
#[derive(Debug, Clone, Copy)]
pub struct PixelPos {
    /// Column index.
    pub x: u32,
    /// Row index.
    pub y: u32,
    /// Frame counter, varies the dither pattern over time.
    pub frame: u32,
}

/// Sampled inputs for one pixel of the HDR tone-map path.
#[derive(Debug, Clone, Copy)]
pub struct PixelInput {
    /// Scene-linear HDR color.
    pub scene: Vec3,
    /// Lens and bloom contribution, already weighted by the host.
    pub lens: Vec3,
    /// Scene luminance sample fed to the exposure model.
    pub luminance: f32,
    /// Frame adaptation value fed to the exposure model.
    pub adaptation: f32,
}

/// The HDR tone-map path: scene-linear HDR in, display-ready color out.
///
/// Per pixel:
///
/// 1. add the lens/bloom contribution to the scene sample
/// 2. multiply by the external exposure model's scalar
/// 3. multiply by the Kelvin color-temperature tint
/// 4. LogC4-encode each channel
/// 5. sample the LogC4-to-sRGB display LUT
/// 6. decode with the fast sRGB curve (the LUT output is sRGB-encoded)
/// 7. add dither, clamp to [0, 1]
///
/// The tint, LUT and dither stages are gated by the config's enables;
/// a disabled stage is an identity pass-through. Output alpha is an
/// opaque 1.0.
pub struct ToneMapper<'a, E: ExposureModel> {
    config: ToneMapConfig,
    tint: Vec3,
    lut: &'a LutAtlas,
    exposure: &'a E,
    ditherer: Ditherer,
}

impl<'a, E: ExposureModel> ToneMapper<'a, E> {
    /// Builds the per-frame state for the tone-map path.
    ///
    /// The config is range-checked here and the Kelvin tint evaluated
    /// once; both are constant across the frame.
    ///
    /// # Errors
    ///
    /// Any field outside its range, per [`ToneMapConfig::validated`].
    pub fn new(config: ToneMapConfig, lut: &'a LutAtlas, exposure: &'a E) -> GradeResult<Self> {
        let config = config.validated()?;
        let tint = kelvin_to_rgb(config.kelvin);
        tracing::debug!(
            kelvin = config.kelvin,
            bit_depth = config.dither_bit_depth,
            "tone-map pass configured"
        );
        Ok(Self {
            config,
            tint,
            lut,
            exposure,
            ditherer: Ditherer::new(config.dither_bit_depth),
        })
    }

    /// Frame configuration this pass was built with.
    pub fn config(&self) -> &ToneMapConfig {
        &self.config
    }

    /// Shades one pixel. Pure; safe to call concurrently.
    ///
    /// Disabled stages pass the color through unchanged.
    pub fn shade(&self, input: PixelInput, pos: PixelPos) -> [f32; 4] {
        let exposed = (input.scene + input.lens)
            * self.exposure.factor(input.luminance, input.adaptation);
        let tinted = if self.config.tint_enabled {
            exposed * self.tint
        } else {
            exposed
        };
        let log = tinted.map(log_c4::encode);
        let display = if self.config.lut_enabled {
            self.lut.sample(log)
        } else {
            log
        };
        let linear = display.map(remove_srgb_fast);
        let dithered = if self.config.dither_enabled {
            self.ditherer.apply(linear, pos.x, pos.y, pos.frame)
        } else {
            linear
        };
        let out = dithered.clamp01();
        [out.x, out.y, out.z, 1.0]
    }
}

/// The post-process grading path, operating on gamma-encoded values.
///
/// Per pixel: encode with the fast sRGB curve, run the perceptual
/// grader and the contrast blend on the *encoded* values, decode, add
/// 8-bit dither, clamp.
///
/// Grading in gamma space is numerically at odds with Oklab's
/// linear-light design; it is the established look of this path and is
/// preserved rather than corrected. Disabled stages pass the color
/// through unchanged.
pub struct GradePass {
    config: GradingConfig,
    ditherer: Ditherer,
}

/// Quantization target of the post path's dither.
const POST_DITHER_BITS: u32 = 8;

impl GradePass {
    /// Builds the per-frame state for the grading path, range-checking
    /// the config.
    ///
    /// # Errors
    ///
    /// Any field outside its range, per [`GradingConfig::validated`].
    pub fn new(config: GradingConfig) -> GradeResult<Self> {
        let config = config.validated()?;
        if config.is_identity() {
            tracing::debug!("grading pass configured as identity");
        }
        Ok(Self {
            config,
            ditherer: Ditherer::new(POST_DITHER_BITS),
        })
    }

    /// Frame configuration this pass was built with.
    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    /// Shades one pixel. Pure; safe to call concurrently.
    pub fn shade(&self, color: Vec3, pos: PixelPos) -> [f32; 4] {
        let mut c = color.map(apply_srgb_fast);
        if self.config.grade_enabled {
            c = grade::grade(c, &self.config);
        }
        if self.config.contrast_enabled {
            c = grade::contrast(c, self.config.contrast_pivot, self.config.contrast);
        }
        let linear = c.map(remove_srgb_fast);
        let dithered = self.ditherer.apply(linear, pos.x, pos.y, pos.frame);
        let out = dithered.clamp01();
        [out.x, out.y, out.z, 1.0]
    }
}
