//! Interpolation and parameter blending.
//!
//! [`lerp`] and [`saturate`] are the scalar workhorses of the pipeline.
//! [`blend2`] and [`blend3`] mix grading parameters between environment
//! states (for example day, night and interior values of the same tunable)
//! as explicit pure functions - the source values and blend factors are
//! all arguments, never ambient state.

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Example
///
/// ```rust
/// use tone_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamps a value to [0, 1].
#[inline]
pub fn saturate(value: f32) -> f32 {
    value.max(0.0).min(1.0)
}

/// Blends two parameter values by a single factor.
///
/// `t = 0.0` selects `a`, `t = 1.0` selects `b`. Identical to [`lerp`];
/// named separately because it is the two-state parameter blend
/// (for example a day/night pair of a grading tunable).
#[inline]
pub fn blend2(a: f32, b: f32, t: f32) -> f32 {
    lerp(a, b, t)
}

/// Blends three parameter values by two factors.
///
/// First blends `a` toward `b` by `t_b`, then the result toward `c` by
/// `t_c`. This is the three-state parameter blend (for example
/// day/night/interior values of a grading tunable): with `t_c = 0.0` it
/// reduces to [`blend2`], with `t_c = 1.0` it selects `c` regardless of
/// the first blend.
///
/// # Example
///
/// ```rust
/// use tone_math::blend3;
///
/// // Fully interior
/// assert_eq!(blend3(1.0, 2.0, 5.0, 0.5, 1.0), 5.0);
/// // Halfway day -> night, no interior
/// assert_eq!(blend3(1.0, 2.0, 5.0, 0.5, 0.0), 1.5);
/// ```
#[inline]
pub fn blend3(a: f32, b: f32, c: f32, t_b: f32, t_c: f32) -> f32 {
    lerp(lerp(a, b, t_b), c, t_c)
}
