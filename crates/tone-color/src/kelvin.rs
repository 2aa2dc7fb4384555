//! Black-body color temperature approximation.
//!
//! A curve fit of the Planckian locus, not a physical black-body
//! integral. The fitted constants must stay exactly as given or the
//! tint drifts visibly against graded footage.

use tone_math::Vec3;

/// Converts a color temperature in Kelvin to a normalized RGB tint.
///
/// The temperature is clamped to [1000, 40000] and evaluated in
/// hundreds of Kelvin. Red and green follow log/power fits with a
/// branch at 66; blue is 1.0 above 66, 0.0 below 19, and a log ramp
/// between. Channels are clamped to [0, 1] independently.
///
/// # Example
///
/// ```rust
/// use tone_color::kelvin_to_rgb;
///
/// // Daylight white point: all channels near 1
/// let d65 = kelvin_to_rgb(6500.0);
/// assert!(d65.x > 0.98 && d65.y > 0.9 && d65.z > 0.9);
///
/// // Tungsten: warm bias
/// let warm = kelvin_to_rgb(3000.0);
/// assert!(warm.x > warm.y && warm.y > warm.z);
/// ```
pub fn kelvin_to_rgb(kelvin: f32) -> Vec3 {
    let t = kelvin.clamp(1000.0, 40000.0) / 100.0;

    let r = if t <= 66.0 {
        255.0
    } else {
        329.698_727_446 * (t - 60.0).powf(-0.133_204_759_2)
    };

    let g = if t <= 66.0 {
        99.470_802_586_1 * t.ln() - 161.119_568_166_1
    } else {
        288.122_169_528_3 * (t - 60.0).powf(-0.075_514_849_2)
    };

    let b = if t >= 66.0 {
        255.0
    } else if t < 19.0 {
        0.0
    } else {
        138.517_731_223_1 * (t - 10.0).ln() - 305.044_792_730_7
    };

    (Vec3::new(r, g, b) / 255.0).clamp01()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daylight_is_near_white() {
        // 6500 K lands within 2% of neutral on red, close on green/blue
        let rgb = kelvin_to_rgb(6500.0);
        assert!((rgb.x - 1.0).abs() < 0.02, "r = {}", rgb.x);
        assert!(rgb.y > 0.93, "g = {}", rgb.y);
        assert!(rgb.z > 0.93, "b = {}", rgb.z);
    }

    #[test]
    fn test_tungsten_is_warm() {
        let rgb = kelvin_to_rgb(3000.0);
        assert!(rgb.x > rgb.y && rgb.y > rgb.z, "{:?}", rgb);
    }

    #[test]
    fn test_high_temperature_is_cool() {
        // Far past daylight the tint goes blue: B = 1, R noticeably below
        let rgb = kelvin_to_rgb(15000.0);
        assert_eq!(rgb.z, 1.0);
        assert!(rgb.x < rgb.z);
    }

    #[test]
    fn test_out_of_range_clamped() {
        assert_eq!(kelvin_to_rgb(100.0), kelvin_to_rgb(1000.0));
        assert_eq!(kelvin_to_rgb(1_000_000.0), kelvin_to_rgb(40000.0));
    }

    #[test]
    fn test_blue_ramp_boundaries() {
        // Blue is fully off below 1900 K and fully on at 6600 K
        assert_eq!(kelvin_to_rgb(1500.0).z, 0.0);
        assert_eq!(kelvin_to_rgb(6600.0).z, 1.0);
    }

    #[test]
    fn test_channels_bounded() {
        let mut k = 1000.0;
        while k <= 40000.0 {
            let rgb = kelvin_to_rgb(k);
            for i in 0..3 {
                assert!((0.0..=1.0).contains(&rgb[i]), "kelvin {}: {:?}", k, rgb);
            }
            k += 500.0;
        }
    }
}
