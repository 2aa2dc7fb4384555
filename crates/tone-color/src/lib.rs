//! # tone-color
//!
//! Color space conversions for the HDR grading core.
//!
//! Every conversion is a pure function between explicitly named spaces;
//! a value is only ever passed to the conversion matching its space:
//!
//! - Linear RGB <-> CIE XYZ ([`xyz`]) - fixed sRGB/D65 matrices
//! - XYZ <-> CIE L\*a\*b\* ([`lab`]) - D65 reference white, piecewise curve
//! - Lab <-> L\*C\*h\* ([`lch`]) - polar form, hue in [0, 360)
//! - Linear RGB <-> Oklab ([`oklab`]) - via LMS cone space
//! - Kelvin -> RGB tint ([`kelvin`]) - black-body approximation
//!
//! Linear RGB, XYZ and Oklab channels are unbounded HDR magnitudes (and
//! can be negative for out-of-gamut Oklab inversions); nothing here
//! clamps except where a formula demands it. Callers clamp at final
//! output only.
//!
//! # Usage
//!
//! ```rust
//! use tone_color::prelude::*;
//! use tone_math::Vec3;
//!
//! let rgb = Vec3::new(0.5, 0.3, 0.2);
//! let lch = rgb_to_lch(rgb);
//! let back = lch_to_rgb(lch);
//! assert!((back.x - rgb.x).abs() < 1e-3);
//! ```
//!
//! # Dependencies
//!
//! - [`tone-math`] - Vec3/Mat3, fast_atan2
//!
//! # Used By
//!
//! - `tone-pipeline` - perceptual grading and tinting

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod kelvin;
pub mod lab;
pub mod lch;
pub mod oklab;
pub mod xyz;

pub use kelvin::kelvin_to_rgb;
pub use lab::{D65_WHITE, Lab, lab_to_xyz, xyz_to_lab};
pub use lch::{Lch, lab_to_lch, lch_to_lab};
pub use oklab::{oklab_to_rgb, rgb_to_oklab};
pub use xyz::{RGB_TO_XYZ, XYZ_TO_RGB, rgb_to_xyz, xyz_to_rgb};

use tone_math::Vec3;

/// Linear RGB to CIE L\*a\*b\* (via XYZ).
///
/// Pure composition of [`rgb_to_xyz`] and [`xyz_to_lab`].
#[inline]
pub fn rgb_to_lab(rgb: Vec3) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// CIE L\*a\*b\* to linear RGB (via XYZ).
#[inline]
pub fn lab_to_rgb(lab: Lab) -> Vec3 {
    xyz_to_rgb(lab_to_xyz(lab))
}

/// Linear RGB to L\*C\*h\* (via XYZ and Lab).
#[inline]
pub fn rgb_to_lch(rgb: Vec3) -> Lch {
    lab_to_lch(rgb_to_lab(rgb))
}

/// L\*C\*h\* to linear RGB (via Lab and XYZ).
#[inline]
pub fn lch_to_rgb(lch: Lch) -> Vec3 {
    lab_to_rgb(lch_to_lab(lch))
}

/// Prelude with the commonly used conversions and types.
pub mod prelude {
    pub use crate::{
        Lab, Lch, kelvin_to_rgb, lab_to_lch, lab_to_rgb, lab_to_xyz, lch_to_lab, lch_to_rgb,
        oklab_to_rgb, rgb_to_lab, rgb_to_lch, rgb_to_oklab, rgb_to_xyz, xyz_to_lab, xyz_to_rgb,
    };
}
