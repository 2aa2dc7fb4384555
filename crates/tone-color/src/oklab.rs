//! Linear RGB <-> Oklab conversions via the LMS cone space.
//!
//! Four fixed matrices: RGB -> LMS, LMS' -> Oklab and their inverses.
//! The nonlinearity between them is a plain cube root (forward) and cube
//! (inverse), applied per channel.

use crate::Lab;
use tone_math::{Mat3, Vec3};

/// Linear sRGB to LMS cone responses.
const RGB_TO_LMS: Mat3 = Mat3::from_rows([
    [0.412_221_470_8, 0.536_332_536_3, 0.051_445_992_9],
    [0.211_903_498_2, 0.680_699_545_1, 0.107_396_956_6],
    [0.088_302_461_9, 0.281_718_837_6, 0.629_978_700_5],
]);

/// Nonlinear LMS' to Oklab.
const LMS_TO_OKLAB: Mat3 = Mat3::from_rows([
    [0.210_454_255_3, 0.793_617_785_0, -0.004_072_046_8],
    [1.977_998_495_1, -2.428_592_205_0, 0.450_593_709_9],
    [0.025_904_037_1, 0.782_771_766_2, -0.808_675_766_0],
]);

/// Oklab to nonlinear LMS'.
const OKLAB_TO_LMS: Mat3 = Mat3::from_rows([
    [1.0, 0.396_337_777_4, 0.215_803_757_3],
    [1.0, -0.105_561_345_8, -0.063_854_172_8],
    [1.0, -0.089_484_177_5, -1.291_485_548_0],
]);

/// LMS cone responses back to linear sRGB.
const LMS_TO_RGB: Mat3 = Mat3::from_rows([
    [4.076_741_662_1, -3.307_711_591_3, 0.230_969_929_2],
    [-1.268_438_004_6, 2.609_757_401_1, -0.341_319_396_5],
    [-0.004_196_086_3, -0.703_418_614_7, 1.707_614_701_0],
]);

/// Converts linear RGB to Oklab.
///
/// The per-channel nonlinearity is the cube root of the *absolute* LMS
/// value; the sign is discarded. For negative cone responses (possible
/// with out-of-gamut HDR input) this is an intentional approximation,
/// not gamut-correct, and it keeps the cube root defined everywhere.
pub fn rgb_to_oklab(rgb: Vec3) -> Lab {
    let lms = RGB_TO_LMS * rgb;
    let lms_p = lms.abs().cbrt();
    let ok = LMS_TO_OKLAB * lms_p;
    Lab::new(ok.x, ok.y, ok.z)
}

/// Converts Oklab to linear RGB.
///
/// The inverse nonlinearity is `v * v * v` per channel, sign-consistent
/// and cheaper than a general power. No clamping: out-of-gamut Oklab
/// yields negative or >1 RGB, which is an expected intermediate HDR
/// state until the pipeline's final clamp.
pub fn oklab_to_rgb(lab: Lab) -> Vec3 {
    let lms_p = OKLAB_TO_LMS * Vec3::new(lab.l, lab.a, lab.b);
    let lms = lms_p.cube();
    LMS_TO_RGB * lms
}
