//! # tone-math
//!
//! Math primitives for the HDR grading and tone-mapping core.
//!
//! This crate provides the building blocks the color pipeline is written in:
//!
//! - [`Vec3`] - color triplets (RGB, XYZ, LMS)
//! - [`Mat3`] - fixed 3x3 color transform matrices
//! - [`fast_atan2`] - polynomial two-argument arctangent (hue extraction)
//! - Interpolation and parameter blending ([`lerp`], [`blend2`], [`blend3`])
//!
//! # Design
//!
//! All matrices are row-major and multiply column vectors:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! The color-space matrices used by the pipeline are process-wide constants;
//! nothing in this crate holds mutable state.
//!
//! # Usage
//!
//! ```rust
//! use tone_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let xyz = rgb_to_xyz * rgb;
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - SIMD math interop
//!
//! # Used By
//!
//! - `tone-color` - color space conversions
//! - `tone-lut` - atlas sampling
//! - `tone-pipeline` - grading and orchestration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod angle;
mod interp;
mod mat3;
mod vec3;

pub use angle::*;
pub use interp::*;
pub use mat3::*;
pub use vec3::*;
