//! # tone-pipeline
//!
//! The per-pixel orchestration of the HDR grading core: two fixed-order
//! display paths built from the numeric crates underneath.
//!
//! - **HDR tone-map path** ([`ToneMapper`]): scene-linear color plus
//!   lens contribution, scaled by an external exposure model and a
//!   Kelvin tint, LogC4-encoded, pushed through a display LUT, decoded,
//!   dithered and clamped.
//! - **Post-process grading path** ([`GradePass`]): sRGB-encode,
//!   Oklab/LCh perceptual grade, linear contrast blend, decode, 8-bit
//!   dither, clamp.
//!
//! Both stage orders are load-bearing; every shade call is a pure
//! function of its inputs and the per-frame configuration, so hosts may
//! dispatch pixels in any order on any number of threads. The
//! [`frame`] helpers do exactly that with rayon.
//!
//! # Usage
//!
//! ```rust
//! use tone_pipeline::{ConstantExposure, PixelInput, PixelPos, ToneMapConfig, ToneMapper};
//! use tone_lut::LutAtlas;
//! use tone_math::Vec3;
//!
//! let lut = LutAtlas::identity(16).unwrap();
//! let exposure = ConstantExposure(1.0);
//! let mapper = ToneMapper::new(ToneMapConfig::default(), &lut, &exposure).unwrap();
//!
//! let input = PixelInput {
//!     scene: Vec3::splat(0.18),
//!     lens: Vec3::ZERO,
//!     luminance: 0.18,
//!     adaptation: 0.5,
//! };
//! let rgba = mapper.shade(input, PixelPos { x: 0, y: 0, frame: 0 });
//! assert_eq!(rgba[3], 1.0);
//! ```
//!
//! # Dependencies
//!
//! - [`tone-math`], [`tone-transfer`], [`tone-lut`], [`tone-color`] -
//!   the numeric stages
//! - [`thiserror`] - error types
//! - [`tracing`] - per-frame configuration diagnostics
//! - [`rayon`] - row-parallel frame helpers (feature `parallel`, on by
//!   default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod dither;
mod error;
mod exposure;
pub mod frame;
pub mod grade;
mod pixel;

pub use config::{GradingConfig, ToneMapConfig};
pub use dither::Ditherer;
pub use error::{GradeError, GradeResult};
pub use exposure::{ConstantExposure, ExposureModel};
pub use frame::{grade_frame, tone_map_frame};
pub use pixel::{GradePass, PixelInput, PixelPos, ToneMapper};
