//! Exposure as an external collaborator.
//!
//! The auto-exposure computation (aperture, ISO, shutter, adaptation)
//! lives outside this crate; the pipeline only consumes a scalar
//! multiplier. The trait is the seam a host's metering system plugs
//! into.

/// Source of the per-pixel scene exposure multiplier.
///
/// Implementations must be pure with respect to a frame: the pipeline
/// may call this from many threads for many pixels with no ordering.
pub trait ExposureModel: Sync {
    /// Exposure multiplier for a scene luminance sample and the frame's
    /// adaptation value.
    fn factor(&self, luminance: f32, adaptation: f32) -> f32;
}

/// Fixed exposure, for manual modes and tests.
#[derive(Debug, Clone, Copy)]
pub struct ConstantExposure(pub f32);

impl ExposureModel for ConstantExposure {
    #[inline]
    fn factor(&self, _luminance: f32, _adaptation: f32) -> f32 {
        self.0
    }
}
