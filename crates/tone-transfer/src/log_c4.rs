//! LogC4 transfer function.
//!
//! A base-2 logarithmic encoding that maps the scene's wide dynamic range
//! into a bounded signal ahead of the LogC4-to-sRGB LUT lookup. A linear
//! segment below the break point keeps slightly-negative HDR noise
//! well-defined instead of feeding it to the logarithm.
//!
//! # Range
//!
//! - Encoded: approximately [0, 1] for normal scene values
//! - Linear: scene-referred, negative values accepted down the linear segment
//!
//! # Reference
//!
//! ARRI LogC4 Specification

/// LogC4 curve constants.
///
/// These are the source pipeline's exact values and must not be rederived;
/// the linear-segment slope is already chosen for continuity at the break.
mod constants {
    /// Linear side slope: scales linear input before the logarithm.
    pub const LIN_SIDE_SLOPE: f64 = 2231.826309067688;

    /// Linear side offset: added to scaled linear before the logarithm.
    pub const LIN_SIDE_OFFSET: f64 = 64.0;

    /// Scale applied to the normalized log result.
    pub const LOG_SIDE_SCALE: f64 = 0.9071358748778104;

    /// Offset added after log scaling. Equals `encode(0.0)` exactly,
    /// since `log2(64) - 6 = 0`.
    pub const LOG_SIDE_OFFSET: f64 = 0.0928641251221896;

    /// Linear side break point: at or below this, use the linear segment.
    pub const LIN_SIDE_BREAK: f64 = -0.0180570;

    /// Slope denominator of the linear shadow segment.
    pub const LINEAR_SEGMENT_DIV: f64 = 0.113597;
}

use constants::*;

/// Encoded value of the linear-side break point (log-segment evaluation).
#[inline]
fn log_break() -> f64 {
    ((LIN_SIDE_SLOPE * LIN_SIDE_BREAK + LIN_SIDE_OFFSET).log2() - 6.0) / 14.0 * LOG_SIDE_SCALE
        + LOG_SIDE_OFFSET
}

/// LogC4 encode: linear scene light to LogC4.
///
/// # Formula
///
/// ```text
/// if x <= -0.0180570:
///     y = (x + 0.0180570) / 0.113597
/// else:
///     y = (log2(2231.826309067688 * x + 64) - 6) / 14
///         * 0.9071358748778104 + 0.0928641251221896
/// ```
///
/// No clamping is applied in either branch.
///
/// # Example
///
/// ```rust
/// use tone_transfer::log_c4;
///
/// // 18% gray
/// let encoded = log_c4::encode(0.18);
/// assert!((encoded - 0.278).abs() < 0.001);
///
/// // Scene black lands exactly on the log-side offset
/// let black = log_c4::encode(0.0);
/// assert!((black - 0.0928641).abs() < 1e-6);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    encode_f64(linear as f64) as f32
}

/// LogC4 encode with f64 precision.
#[inline]
pub fn encode_f64(linear: f64) -> f64 {
    if linear <= LIN_SIDE_BREAK {
        // Linear segment for shadows and negative HDR noise
        (linear + 0.0180570) / LINEAR_SEGMENT_DIV
    } else {
        ((LIN_SIDE_SLOPE * linear + LIN_SIDE_OFFSET).log2() - 6.0) / 14.0 * LOG_SIDE_SCALE
            + LOG_SIDE_OFFSET
    }
}

/// LogC4 decode: LogC4 to linear scene light.
///
/// Inverse of [`encode`]; branches at the encoded value of the
/// linear-side break (which is 0 up to rounding of the published
/// constants).
#[inline]
pub fn decode(log: f32) -> f32 {
    decode_f64(log as f64) as f32
}

/// LogC4 decode with f64 precision.
#[inline]
pub fn decode_f64(log: f64) -> f64 {
    if log <= log_break() {
        log * LINEAR_SEGMENT_DIV - 0.0180570
    } else {
        let exp = (log - LOG_SIDE_OFFSET) / LOG_SIDE_SCALE * 14.0 + 6.0;
        (exp.exp2() - LIN_SIDE_OFFSET) / LIN_SIDE_SLOPE
    }
}

/// Applies LogC4 encoding per channel.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies LogC4 decoding per channel.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test values spanning the linear segment and the log segment.
    const TEST_LINEARS: [f64; 14] = [
        -0.05, -0.0180570, -0.01, 0.0, 0.001, 0.01, 0.05, 0.18, 0.38, 1.0, 2.0, 10.0, 50.0, 100.0,
    ];

    #[test]
    fn test_scene_black_regression() {
        // encode(0) = (log2(64) - 6)/14 * scale + offset = offset exactly
        let black = encode_f64(0.0);
        assert!(
            (black - 0.0928641251221896).abs() < 1e-15,
            "scene black: {}",
            black
        );
    }

    #[test]
    fn test_middle_gray() {
        let gray18 = encode_f64(0.18);
        assert!(
            (gray18 - 0.278).abs() < 0.001,
            "18% gray: expected ~0.278, got {}",
            gray18
        );
    }

    #[test]
    fn test_linear_segment() {
        // Below the break the curve is exactly (x + 0.0180570) / 0.113597
        let x = -0.05;
        let expected = (x + 0.0180570) / 0.113597;
        assert!((encode_f64(x) - expected).abs() < 1e-15);

        // At the break the linear segment evaluates to 0
        assert!(encode_f64(-0.0180570).abs() < 1e-15);
    }

    #[test]
    fn test_continuity_at_break() {
        let eps = 1e-9;
        let below = encode_f64(-0.0180570 - eps);
        let above = encode_f64(-0.0180570 + eps);
        // The published linear slope matches the log segment at the break
        // to about 1e-5; continuity is to that precision, not machine eps
        assert!(
            (above - below).abs() < 1e-4,
            "break discontinuity: {} vs {}",
            below,
            above
        );
    }

    #[test]
    fn test_encode_decode_inverse() {
        for &linear in &TEST_LINEARS {
            let encoded = encode_f64(linear);
            let decoded = decode_f64(encoded);
            // Near the break the two branches disagree by the published
            // constants' ~1e-5 continuity gap, about 1e-6 in linear units
            let tolerance = linear.abs() * 1e-10 + 2e-6;
            assert!(
                (linear - decoded).abs() < tolerance,
                "inverse failed: {} -> {} -> {}",
                linear,
                encoded,
                decoded
            );
        }
    }

    #[test]
    fn test_monotonic() {
        let mut prev = encode_f64(-0.1);
        for i in 1..2000 {
            let linear = -0.1 + i as f64 * 0.001;
            let encoded = encode_f64(linear);
            assert!(
                encoded > prev,
                "not monotonic at linear={}: {} <= {}",
                linear,
                encoded,
                prev
            );
            prev = encoded;
        }
    }

    #[test]
    fn test_no_clamping() {
        // Very bright input encodes above 1, very dark below 0
        assert!(encode_f64(10000.0) > 1.0);
        assert!(encode_f64(-0.1) < 0.0);
    }

    #[test]
    fn test_rgb_helpers() {
        let rgb = [0.1, 0.18, 0.3];
        let encoded = encode_rgb(rgb);
        let decoded = decode_rgb(encoded);
        for i in 0..3 {
            assert!(
                (rgb[i] - decoded[i]).abs() < 1e-5,
                "channel {}: {} vs {}",
                i,
                rgb[i],
                decoded[i]
            );
        }
    }
}
