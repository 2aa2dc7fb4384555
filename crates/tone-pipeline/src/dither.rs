//! Position-seeded triangular dither.
//!
//! A zero-mean noise value added per channel before quantization, so
//! rounding error decorrelates from the signal and banding breaks up.
//! The pattern is deterministic in the pixel position and frame index;
//! the same pixel dithers identically across runs.

use tone_math::Vec3;

/// Deterministic triangular-noise generator for one quantization target.
///
/// The amplitude is one least-significant step of the target bit depth,
/// `1 / 2^bit_depth`. Triangular distribution: the sum of two uniform
/// samples minus one, giving zero mean and density peaked at zero.
#[derive(Debug, Clone, Copy)]
pub struct Ditherer {
    amplitude: f32,
}

/// Integer hash with good avalanche on consecutive inputs (Wang hash).
#[inline]
fn wang_hash(mut x: u32) -> u32 {
    x = (x ^ 61) ^ (x >> 16);
    x = x.wrapping_mul(9);
    x ^= x >> 4;
    x = x.wrapping_mul(0x27d4_eb2d);
    x ^= x >> 15;
    x
}

/// Hash output mapped to a uniform float in [0, 1).
#[inline]
fn hash_to_unit(h: u32) -> f32 {
    (h >> 8) as f32 / (1u32 << 24) as f32
}

impl Ditherer {
    /// Creates a ditherer for the given quantization bit depth.
    pub fn new(bit_depth: u32) -> Self {
        Self {
            amplitude: 1.0 / (1u64 << bit_depth) as f32,
        }
    }

    /// Noise amplitude, one quantization step.
    #[inline]
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Triangular noise sample for a pixel, in
    /// [-amplitude, +amplitude].
    ///
    /// Two independent uniforms are drawn from decorrelated seeds of the
    /// same position and summed; their mean over many pixels is zero, so
    /// perceived brightness is unbiased.
    pub fn noise(&self, x: u32, y: u32, frame: u32) -> f32 {
        let seed = x
            .wrapping_mul(1973)
            .wrapping_add(y.wrapping_mul(9277))
            .wrapping_add(frame.wrapping_mul(26699));
        let u0 = hash_to_unit(wang_hash(seed));
        let u1 = hash_to_unit(wang_hash(seed.wrapping_add(0x9e37_79b9)));
        (u0 + u1 - 1.0) * self.amplitude
    }

    /// Adds the pixel's noise value to every channel of a color.
    #[inline]
    pub fn apply(&self, rgb: Vec3, x: u32, y: u32, frame: u32) -> Vec3 {
        rgb + Vec3::splat(self.noise(x, y, frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude_scales_with_bit_depth() {
        assert!((Ditherer::new(8).amplitude() - 1.0 / 256.0).abs() < 1e-9);
        assert!((Ditherer::new(10).amplitude() - 1.0 / 1024.0).abs() < 1e-9);
    }

    #[test]
    fn test_noise_bounded() {
        let d = Ditherer::new(8);
        for y in 0..64 {
            for x in 0..64 {
                let n = d.noise(x, y, 0);
                assert!(
                    n.abs() <= d.amplitude(),
                    "noise({}, {}) = {} exceeds {}",
                    x,
                    y,
                    n,
                    d.amplitude()
                );
            }
        }
    }

    #[test]
    fn test_noise_mean_near_zero() {
        let d = Ditherer::new(8);
        let mut sum = 0.0f64;
        let count = 256 * 256;
        for y in 0..256 {
            for x in 0..256 {
                sum += d.noise(x, y, 3) as f64;
            }
        }
        let mean = sum / count as f64;
        // Mean well under a tenth of one quantization step
        assert!(
            mean.abs() < d.amplitude() as f64 * 0.1,
            "mean = {}",
            mean
        );
    }

    #[test]
    fn test_deterministic() {
        let d = Ditherer::new(10);
        assert_eq!(d.noise(17, 42, 5), d.noise(17, 42, 5));
        assert_ne!(d.noise(17, 42, 5), d.noise(18, 42, 5));
        assert_ne!(d.noise(17, 42, 5), d.noise(17, 42, 6));
    }

    #[test]
    fn test_neighbors_decorrelated() {
        // Adjacent pixels should not share a noise value in a run
        let d = Ditherer::new(8);
        let row: Vec<f32> = (0..16).map(|x| d.noise(x, 7, 0)).collect();
        let distinct = row
            .iter()
            .filter(|&&n| (n - row[0]).abs() > 1e-9)
            .count();
        assert!(distinct > 10, "row of noise too uniform: {:?}", row);
    }
}
