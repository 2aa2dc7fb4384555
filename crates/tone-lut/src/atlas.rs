//! Tiled-atlas 3D LUT storage and trilinear sampling.
//!
//! # Layout
//!
//! An N-sided color cube is flattened into a `width x height` texel grid
//! of N tiles laid side by side, one tile per blue slice:
//!
//! ```text
//! width = N * height,  height = N
//!
//! +--------+--------+-- ... --+
//! | b = 0  | b = 1  |  b = N-1|   texel (slice*N + x, y)
//! +--------+--------+-- ... --+   holds cube entry (x, y, slice)
//! ```
//!
//! Each texel holds the cube's output color at that lattice point,
//! normalized to [0, 1].

use crate::{LutError, LutResult};
use tone_math::Vec3;

/// A 3D lookup table stored as a tiled 2D atlas.
///
/// The layout invariant (`width` an exact multiple of `height`, block
/// size `N = width / height`) is validated at construction; sampling
/// never fails.
///
/// # Example
///
/// ```rust
/// use tone_lut::LutAtlas;
///
/// let lut = LutAtlas::identity(16).unwrap();
/// let rgb = lut.sample([0.2, 0.8, 0.5].into());
/// assert!((rgb.y - 0.8).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct LutAtlas {
    /// Atlas width in texels (`block_size * height`).
    width: usize,
    /// Atlas height in texels.
    height: usize,
    /// Cube side N, derived as `width / height`.
    block_size: usize,
    /// Row-major texels, each a normalized RGB triple.
    texels: Vec<[f32; 3]>,
}

impl LutAtlas {
    /// Creates an atlas from raw texel data, validating the tiled-cube
    /// layout.
    ///
    /// # Errors
    ///
    /// - `width` is zero, or not an exact multiple of `height`
    /// - block size `width / height` is below 2 or exceeds `height`
    ///   (the lattice must address a full N x N tile per slice)
    /// - `texels.len() != width * height`
    pub fn from_texels(width: usize, height: usize, texels: Vec<[f32; 3]>) -> LutResult<Self> {
        if width == 0 || height == 0 {
            return Err(LutError::InvalidDimensions(
                "width and height must be non-zero".into(),
            ));
        }
        if width % height != 0 {
            return Err(LutError::InvalidDimensions(format!(
                "width {} is not an exact multiple of height {}",
                width, height
            )));
        }
        let block_size = width / height;
        if block_size < 2 {
            return Err(LutError::InvalidDimensions(format!(
                "block size {} is too small for interpolation",
                block_size
            )));
        }
        if block_size > height {
            return Err(LutError::InvalidDimensions(format!(
                "block size {} exceeds atlas height {}",
                block_size, height
            )));
        }
        let expected = width * height;
        if texels.len() != expected {
            return Err(LutError::TexelCountMismatch {
                expected,
                actual: texels.len(),
            });
        }

        tracing::debug!(width, height, block_size, "LUT atlas loaded");

        Ok(Self {
            width,
            height,
            block_size,
            texels,
        })
    }

    /// Creates an identity (pass-through) atlas with cube side `n`.
    ///
    /// Each lattice point's color equals its own normalized coordinate,
    /// so sampling returns the input up to the LUT's quantization.
    pub fn identity(n: usize) -> LutResult<Self> {
        if n < 2 {
            return Err(LutError::InvalidDimensions(format!(
                "block size {} is too small for interpolation",
                n
            )));
        }
        let width = n * n;
        let height = n;
        let scale = 1.0 / (n - 1) as f32;
        let mut texels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let slice = x / n;
                let r = (x % n) as f32 * scale;
                let g = y as f32 * scale;
                let b = slice as f32 * scale;
                texels.push([r, g, b]);
            }
        }
        Self::from_texels(width, height, texels)
    }

    /// Cube side N (`width / height`).
    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Atlas width in texels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Atlas height in texels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Fetches a texel with clamp-to-edge addressing.
    #[inline]
    fn texel(&self, x: isize, y: isize) -> Vec3 {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y.clamp(0, self.height as isize - 1) as usize;
        Vec3::from_array(self.texels[y * self.width + x])
    }

    /// Bilinear fetch at normalized image coordinates.
    ///
    /// `u`/`v` address texel centers at `(texel + 0.5) / extent`, the
    /// same convention a GPU sampler uses.
    fn sample_bilinear(&self, u: f32, v: f32) -> Vec3 {
        let fx = u * self.width as f32 - 0.5;
        let fy = v * self.height as f32 - 0.5;
        let x0 = fx.floor();
        let y0 = fy.floor();
        let tx = fx - x0;
        let ty = fy - y0;
        let x0 = x0 as isize;
        let y0 = y0 as isize;

        let c00 = self.texel(x0, y0);
        let c10 = self.texel(x0 + 1, y0);
        let c01 = self.texel(x0, y0 + 1);
        let c11 = self.texel(x0 + 1, y0 + 1);

        c00.lerp(c10, tx).lerp(c01.lerp(c11, tx), ty)
    }

    /// Trilinear sample of the cube.
    ///
    /// Input is clamped to [0, 1] per channel and scaled by `N - 1` into
    /// lattice coordinates. The blue axis selects the floor and ceiling
    /// slice tiles; each is sampled bilinearly at
    /// `(slice * N + lattice.x, lattice.y)`, and the two slice colors are
    /// blended by the blue coordinate's fractional part. When the blue
    /// coordinate is an exact integer both tiles coincide and the blend
    /// is a no-op, so slice boundaries introduce no seam.
    pub fn sample(&self, rgb: Vec3) -> Vec3 {
        let n = self.block_size as f32;
        let inv_w = 1.0 / self.width as f32;
        let inv_h = 1.0 / self.height as f32;

        let lattice = rgb.clamp01() * (n - 1.0);
        let slice0 = lattice.z.floor();
        let slice1 = lattice.z.ceil();
        let frac = lattice.z - slice0;

        let u0 = (slice0 * n + lattice.x + 0.5) * inv_w;
        let u1 = (slice1 * n + lattice.x + 0.5) * inv_w;
        let v = (lattice.y + 0.5) * inv_h;

        let sample0 = self.sample_bilinear(u0, v);
        let sample1 = self.sample_bilinear(u1, v);

        sample0.lerp(sample1, frac)
    }

    /// Trilinear sample on raw arrays.
    #[inline]
    pub fn sample_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        self.sample(Vec3::from_array(rgb)).to_array()
    }
}
