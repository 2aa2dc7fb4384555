//! Linear RGB <-> CIE XYZ conversions.
//!
//! Fixed 3x3 matrices for sRGB primaries with a D65 white point. Both
//! directions are single matrix multiplies; channels stay unbounded.

use tone_math::{Mat3, Vec3};

/// Linear sRGB to CIE XYZ (sRGB primaries, D65 white).
pub const RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
]);

/// CIE XYZ to linear sRGB, inverse of [`RGB_TO_XYZ`].
pub const XYZ_TO_RGB: Mat3 = Mat3::from_rows([
    [3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266_0, 1.876_010_8, 0.041_556_0],
    [0.055_643_4, -0.204_025_9, 1.057_225_2],
]);

/// Converts linear RGB to CIE XYZ.
///
/// # Example
///
/// ```rust
/// use tone_color::rgb_to_xyz;
/// use tone_math::Vec3;
///
/// // D65 white: linear RGB (1,1,1) maps to Y = 1
/// let xyz = rgb_to_xyz(Vec3::ONE);
/// assert!((xyz.y - 1.0).abs() < 1e-4);
/// ```
#[inline]
pub fn rgb_to_xyz(rgb: Vec3) -> Vec3 {
    RGB_TO_XYZ * rgb
}

/// Converts CIE XYZ to linear RGB.
///
/// No clamping; out-of-gamut XYZ yields negative or >1 channels.
#[inline]
pub fn xyz_to_rgb(xyz: Vec3) -> Vec3 {
    XYZ_TO_RGB * xyz
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrices_are_inverses() {
        let product = RGB_TO_XYZ * XYZ_TO_RGB;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (product.m[i][j] - expected).abs() < 1e-4,
                    "product[{}][{}] = {}",
                    i,
                    j,
                    product.m[i][j]
                );
            }
        }
    }

    #[test]
    fn test_white_maps_to_d65() {
        let xyz = rgb_to_xyz(Vec3::ONE);
        assert!((xyz.x - 0.95047).abs() < 1e-3);
        assert!((xyz.y - 1.0).abs() < 1e-4);
        assert!((xyz.z - 1.08883).abs() < 1e-3);
    }

    #[test]
    fn test_luminance_weights() {
        // Y of a pure green primary dominates red and blue
        let r = rgb_to_xyz(Vec3::new(1.0, 0.0, 0.0)).y;
        let g = rgb_to_xyz(Vec3::new(0.0, 1.0, 0.0)).y;
        let b = rgb_to_xyz(Vec3::new(0.0, 0.0, 1.0)).y;
        assert!(g > r && r > b);
        assert!((r + g + b - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_hdr_values_pass_through() {
        // Unbounded input stays unbounded, no clamping anywhere
        let xyz = rgb_to_xyz(Vec3::splat(4.0));
        assert!(xyz.y > 3.9);
        let rgb = xyz_to_rgb(xyz);
        assert!((rgb.x - 4.0).abs() < 1e-3);
    }
}
