//! Reference sRGB transfer pair.
//!
//! The piecewise IEC 61966-2-1:1999 curves: a short linear toe below the
//! breakpoint, a 2.4-exponent power segment above it. The hot pixel paths
//! use the curve fits in [`crate::srgb_fast`] instead; this module is the
//! yardstick those fits are validated against, and the choice for hosts
//! that need the exact standard over shader-friendly arithmetic.
//!
//! Both directions expect and produce values in [0, 1].

/// Decodes an sRGB-encoded value to linear light (the EOTF).
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use tone_transfer::srgb;
///
/// // encoded middle gray sits near 0.214 linear
/// assert!((srgb::eotf(0.5) - 0.2140).abs() < 5e-4);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes linear light as sRGB (the OETF).
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use tone_transfer::srgb;
///
/// // 18% scene gray encodes just under 0.5
/// assert!((srgb::oetf(0.18) - 0.4613).abs() < 5e-4);
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}
