//! Whole-frame helpers over the per-pixel shade functions.
//!
//! Every pixel is independent, so rows are shaded in parallel with
//! rayon. These helpers only add the buffer bookkeeping; all the color
//! math stays in the per-pixel shade functions.

use crate::{ExposureModel, GradeError, GradePass, GradeResult, PixelInput, PixelPos, ToneMapper};
use tone_math::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn check_rgba_len(buf_len: usize, width: usize, height: usize, name: &str) -> GradeResult<usize> {
    if width == 0 || height == 0 {
        return Err(GradeError::InvalidDimensions(
            "width and height must be > 0".into(),
        ));
    }
    let expected = width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| GradeError::InvalidDimensions("frame dimensions overflow".into()))?;
    if buf_len != expected {
        return Err(GradeError::InvalidDimensions(format!(
            "{} buffer: expected {} floats, got {}",
            name, expected, buf_len
        )));
    }
    Ok(expected)
}

/// Tone-maps an interleaved RGBA scene buffer into a display buffer.
///
/// `scene` holds scene-linear RGBA (alpha is carried as the luminance
/// sample for the exposure model); `dst` receives display-ready RGBA.
/// Rows are processed in parallel when the `parallel` feature is on.
///
/// # Errors
///
/// Buffer lengths that do not match `width * height * 4`.
pub fn tone_map_frame<E: ExposureModel>(
    mapper: &ToneMapper<'_, E>,
    scene: &[f32],
    dst: &mut [f32],
    width: usize,
    height: usize,
    adaptation: f32,
    frame: u32,
) -> GradeResult<()> {
    check_rgba_len(scene.len(), width, height, "scene")?;
    check_rgba_len(dst.len(), width, height, "dst")?;

    let shade_row = |(y, row): (usize, &mut [f32])| {
        for x in 0..width {
            let i = x * 4;
            let input = PixelInput {
                scene: Vec3::new(
                    scene_at(scene, width, x, y, 0),
                    scene_at(scene, width, x, y, 1),
                    scene_at(scene, width, x, y, 2),
                ),
                lens: Vec3::ZERO,
                luminance: scene_at(scene, width, x, y, 3),
                adaptation,
            };
            let pos = PixelPos {
                x: x as u32,
                y: y as u32,
                frame,
            };
            row[i..i + 4].copy_from_slice(&mapper.shade(input, pos));
        }
    };

    #[cfg(feature = "parallel")]
    dst.par_chunks_mut(width * 4).enumerate().for_each(shade_row);
    #[cfg(not(feature = "parallel"))]
    dst.chunks_mut(width * 4).enumerate().for_each(shade_row);

    Ok(())
}

#[inline]
fn scene_at(scene: &[f32], width: usize, x: usize, y: usize, c: usize) -> f32 {
    scene[(y * width + x) * 4 + c]
}

/// Runs the post-process grading pass over an interleaved RGBA buffer.
///
/// # Errors
///
/// Buffer lengths that do not match `width * height * 4`.
pub fn grade_frame(
    pass: &GradePass,
    src: &[f32],
    dst: &mut [f32],
    width: usize,
    height: usize,
    frame: u32,
) -> GradeResult<()> {
    check_rgba_len(src.len(), width, height, "src")?;
    check_rgba_len(dst.len(), width, height, "dst")?;

    let shade_row = |(y, row): (usize, &mut [f32])| {
        for x in 0..width {
            let i = x * 4;
            let color = Vec3::new(
                scene_at(src, width, x, y, 0),
                scene_at(src, width, x, y, 1),
                scene_at(src, width, x, y, 2),
            );
            let pos = PixelPos {
                x: x as u32,
                y: y as u32,
                frame,
            };
            row[i..i + 4].copy_from_slice(&pass.shade(color, pos));
        }
    };

    #[cfg(feature = "parallel")]
    dst.par_chunks_mut(width * 4).enumerate().for_each(shade_row);
    #[cfg(not(feature = "parallel"))]
    dst.chunks_mut(width * 4).enumerate().for_each(shade_row);

    Ok(())
}
