//! 3x3 matrix type for color transformations.
//!
//! [`Mat3`] holds the fixed RGB/XYZ/LMS/Oklab conversion matrices. All of
//! them are process-wide constants, built once with [`Mat3::from_rows`] and
//! never mutated.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```

use crate::Vec3;
use std::ops::Mul;

/// A 3x3 matrix for color transformations.
///
/// Stored in row-major order.
///
/// # Example
///
/// ```rust
/// use tone_math::{Mat3, Vec3};
///
/// let identity = Mat3::IDENTITY;
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Applies the matrix to a column vector.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        let r0 = Vec3::from_array(self.m[0]);
        let r1 = Vec3::from_array(self.m[1]);
        let r2 = Vec3::from_array(self.m[2]);
        Vec3::new(r0.dot(v), r1.dot(v), r2.dot(v))
    }

    /// Computes the determinant by cofactor expansion along the top row.
    pub fn determinant(&self) -> f32 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.m;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Computes the inverse as the transposed cofactor matrix over the
    /// determinant.
    ///
    /// Returns `None` for a singular matrix. The pipeline's matrix pairs
    /// are fixed constants; this exists so tests can cross-check that
    /// each inverse constant really is the inverse of its forward matrix.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-10 {
            return None;
        }
        let s = 1.0 / det;
        let [[a, b, c], [d, e, f], [g, h, i]] = self.m;
        Some(Self::from_rows([
            [(e * i - f * h) * s, (c * h - b * i) * s, (b * f - c * e) * s],
            [(f * g - d * i) * s, (a * i - c * g) * s, (c * d - a * f) * s],
            [(d * h - e * g) * s, (b * g - a * h) * s, (a * e - b * d) * s],
        ]))
    }

    /// Matrix product `self * other`.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut out = Self::ZERO;
        for (row, out_row) in self.m.iter().zip(out.m.iter_mut()) {
            for j in 0..3 {
                out_row[j] =
                    row[0] * other.m[0][j] + row[1] * other.m[1][j] + row[2] * other.m[2][j];
            }
        }
        out
    }

    /// Converts to glam Mat3, transposing into its column-major layout.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        let cols = m.to_cols_array_2d();
        Self::from_rows([
            [cols[0][0], cols[1][0], cols[2][0]],
            [cols[0][1], cols[1][1], cols[2][1]],
            [cols[0][2], cols[1][2], cols[2][2]],
        ])
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}
