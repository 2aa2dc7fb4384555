//! Fast sRGB curve approximations.
//!
//! Curve fits of the sRGB encode/decode pair used on the per-pixel hot
//! paths. Each keeps the standard's linear toe (breakpoints 0.0031308 for
//! encode, 0.04045 for decode) and replaces the power segment with a
//! polynomial plus a single square root. Maximum error is below 0.4%
//! against the exact pair in [`crate::srgb`].
//!
//! The fit constants come straight from the source shader and are
//! preserved bit-for-bit; re-deriving them would change visual output.

/// Fast sRGB encode (linear light to display).
///
/// # Formula
///
/// ```text
/// if x < 0.0031308:
///     V = 12.92 * x
/// else:
///     V = 1.13005 * sqrt(x - 0.00228) - 0.13448 * x + 0.005719
/// ```
///
/// # Example
///
/// ```rust
/// use tone_transfer::{srgb, srgb_fast};
///
/// let fast = srgb_fast::apply_srgb_fast(0.214);
/// let exact = srgb::oetf(0.214);
/// assert!((fast - exact).abs() < 0.004);
/// ```
#[inline]
pub fn apply_srgb_fast(x: f32) -> f32 {
    if x < 0.0031308 {
        12.92 * x
    } else {
        1.13005 * (x - 0.00228).sqrt() - 0.13448 * x + 0.005719
    }
}

/// Fast sRGB decode (display to linear light).
///
/// # Formula
///
/// ```text
/// if x < 0.04045:
///     L = x / 12.92
/// else:
///     L = -7.43605 * x - 31.24297 * sqrt(-0.53792 * x + 1.279924) + 35.34864
/// ```
///
/// # Example
///
/// ```rust
/// use tone_transfer::{srgb, srgb_fast};
///
/// let fast = srgb_fast::remove_srgb_fast(0.5);
/// let exact = srgb::eotf(0.5);
/// assert!((fast - exact).abs() < 0.004);
/// ```
#[inline]
pub fn remove_srgb_fast(x: f32) -> f32 {
    if x < 0.04045 {
        x / 12.92
    } else {
        -7.43605 * x - 31.24297 * (-0.53792 * x + 1.279924).sqrt() + 35.34864
    }
}
