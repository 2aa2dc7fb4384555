//! # tone-transfer
//!
//! Transfer functions (encode/decode curves) for the HDR grading core.
//!
//! # Modules
//!
//! - [`srgb`] - exact sRGB EOTF/OETF (IEC 61966-2-1)
//! - [`srgb_fast`] - shader curve-fit approximations of the sRGB pair,
//!   used on the hot per-pixel paths
//! - [`log_c4`] - logarithmic HDR encoding applied before LUT lookup
//!
//! # Usage
//!
//! ```rust
//! use tone_transfer::{srgb, srgb_fast, log_c4};
//!
//! let linear = 0.18_f32;
//!
//! // Exact vs fast encode agree to within 0.4%
//! let exact = srgb::oetf(linear);
//! let fast = srgb_fast::apply_srgb_fast(linear);
//! assert!((exact - fast).abs() < 0.004);
//!
//! // Wide dynamic range into a bounded log signal
//! let encoded = log_c4::encode(linear);
//! assert!(encoded > 0.0 && encoded < 1.0);
//! ```
//!
//! # Used By
//!
//! - `tone-pipeline` - both per-pixel orchestrations

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod log_c4;
pub mod srgb;
pub mod srgb_fast;
