//! CIE XYZ <-> CIE L\*a\*b\* conversions.
//!
//! Uses the classic CIE piecewise transfer with the `903.3 / 0.008856`
//! rational constants and a D65 reference white. The forward and inverse
//! piecewise branches are deliberately asymmetric; see [`lab_to_xyz`].

use tone_math::Vec3;

/// D65 reference white tristimulus, used to normalize XYZ.
pub const D65_WHITE: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// CIE piecewise threshold on the normalized ratio (216/24389).
const EPSILON: f32 = 0.008856;

/// CIE linear-segment slope (24389/27).
const KAPPA: f32 = 903.3;

/// A Cartesian Lab-shaped color.
///
/// Used for both CIE L\*a\*b\* (L nominally in [0, 100]) and Oklab
/// (L nominally in [0, 1]); `a` and `b` are unbounded opponent axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness.
    pub l: f32,
    /// Green-red opponent axis.
    pub a: f32,
    /// Blue-yellow opponent axis.
    pub b: f32,
}

impl Lab {
    /// Creates a Lab color from components.
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

/// Forward CIE transfer: cube root above the threshold, linear below.
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Converts CIE XYZ to L\*a\*b\* against the D65 white.
///
/// Negative normalized ratios (possible for out-of-gamut HDR input) are
/// clamped to zero before the cube root.
///
/// # Formula
///
/// ```text
/// L = 116 f(Y/Yn) - 16
/// a = 500 (f(X/Xn) - f(Y/Yn))
/// b = 200 (f(Y/Yn) - f(Z/Zn))
/// ```
pub fn xyz_to_lab(xyz: Vec3) -> Lab {
    let r = (xyz / D65_WHITE).max(Vec3::ZERO);
    let fx = lab_f(r.x);
    let fy = lab_f(r.y);
    let fz = lab_f(r.z);
    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Converts L\*a\*b\* to CIE XYZ against the D65 white.
///
/// The inverse branches are asymmetric: `x` and `z` test whether the
/// *cubed* reconstruction exceeds the threshold, while `y` tests `L`
/// directly against `kappa * epsilon`. This asymmetry is part of the
/// standard inverse and must not be "simplified" into one rule.
pub fn lab_to_xyz(lab: Lab) -> Vec3 {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    let x = {
        let c = fx * fx * fx;
        if c > EPSILON { c } else { (116.0 * fx - 16.0) / KAPPA }
    };
    let y = if lab.l > KAPPA * EPSILON {
        let c = (lab.l + 16.0) / 116.0;
        c * c * c
    } else {
        lab.l / KAPPA
    };
    let z = {
        let c = fz * fz * fz;
        if c > EPSILON { c } else { (116.0 * fz - 16.0) / KAPPA }
    };

    Vec3::new(x, y, z) * D65_WHITE
}
