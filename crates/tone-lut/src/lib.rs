//! # tone-lut
//!
//! Tiled-atlas 3D LUT type and sampling for the HDR grading core.
//!
//! A 3D color cube of side N is stored flattened into a 2D texel grid of
//! N side-by-side N-column tiles (`width = N * height`), the way LUT
//! textures ship as image assets. [`LutAtlas`] validates that layout at
//! load time and samples it trilinearly: two bilinear slice fetches
//! blended by the blue axis's fractional lattice coordinate.
//!
//! # Usage
//!
//! ```rust
//! use tone_lut::LutAtlas;
//!
//! // Identity pass-through cube, 16x16x16
//! let lut = LutAtlas::identity(16).unwrap();
//! let out = lut.sample([0.5, 0.25, 0.75].into());
//! assert!((out.x - 0.5).abs() < 0.01);
//! ```
//!
//! # Dependencies
//!
//! - [`tone-math`] - Vec3
//! - [`thiserror`] - error types
//! - [`tracing`] - construction-time diagnostics
//!
//! # Used By
//!
//! - `tone-pipeline` - the HDR tone-map path's LogC4-to-sRGB lookup

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod atlas;
mod error;

pub use atlas::LutAtlas;
pub use error::{LutError, LutResult};
