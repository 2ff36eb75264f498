//! Letter-spaced text placement on raster canvases.
//!
//! Both document layouts position text the same way: characters are
//! drawn one at a time with a fixed gap added after each advance, and
//! centered lines are measured with the same per-character advances
//! before choosing a start column.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

/// All document text is drawn in solid black.
const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Scale for a CSS-style pixel size.
///
/// `PxScale` is relative to the font's ascent-minus-descent height,
/// while a canvas `px` size scales the em square.
pub(crate) fn px_size_scale(font: &FontVec, px: f32) -> PxScale {
    let units_per_em = font.units_per_em().unwrap_or(1000.0);
    PxScale::from(px * font.height_unscaled() / units_per_em)
}

/// Horizontal advance of a single character at the given scale.
pub(crate) fn char_advance(font: &FontVec, scale: PxScale, ch: char) -> f32 {
    let scaled = font.as_scaled(scale);
    scaled.h_advance(scaled.glyph_id(ch))
}

/// Total width of a run of advances with `spacing` inserted between
/// consecutive characters (not after the last one).
pub(crate) fn spaced_width(advances: &[f32], spacing: f32) -> f32 {
    if advances.is_empty() {
        return 0.0;
    }
    advances.iter().sum::<f32>() + spacing * (advances.len() - 1) as f32
}

/// Start column that centers a run of `total_width` on the canvas.
pub(crate) fn centered_start(canvas_width: u32, total_width: f32) -> f32 {
    canvas_width as f32 / 2.0 - total_width / 2.0
}

/// Glyph top for a given alphabetic baseline.
fn baseline_to_top(font: &FontVec, scale: PxScale, baseline_y: f32) -> i32 {
    (baseline_y - font.as_scaled(scale).ascent()).round() as i32
}

/// Draw `text` with its baseline at `(x, baseline_y)`.
pub(crate) fn draw_plain(
    canvas: &mut RgbaImage,
    font: &FontVec,
    scale: PxScale,
    text: &str,
    x: f32,
    baseline_y: f32,
) {
    let top = baseline_to_top(font, scale, baseline_y);
    draw_text_mut(canvas, INK, x.round() as i32, top, scale, font, text);
}

/// Draw `text` character by character from `(x, baseline_y)`, adding
/// `spacing` after each character's advance.
pub(crate) fn draw_spaced(
    canvas: &mut RgbaImage,
    font: &FontVec,
    scale: PxScale,
    text: &str,
    x: f32,
    baseline_y: f32,
    spacing: f32,
) {
    let top = baseline_to_top(font, scale, baseline_y);
    let mut current_x = x;
    for ch in text.chars() {
        draw_text_mut(
            canvas,
            INK,
            current_x.round() as i32,
            top,
            scale,
            font,
            &ch.to_string(),
        );
        current_x += char_advance(font, scale, ch) + spacing;
    }
}

/// Draw `text` letter-spaced and horizontally centered on the canvas.
pub(crate) fn draw_spaced_centered(
    canvas: &mut RgbaImage,
    font: &FontVec,
    scale: PxScale,
    text: &str,
    baseline_y: f32,
    spacing: f32,
) {
    let advances: Vec<f32> = text
        .chars()
        .map(|ch| char_advance(font, scale, ch))
        .collect();
    let total_width = spaced_width(&advances, spacing);
    let top = baseline_to_top(font, scale, baseline_y);

    let mut current_x = centered_start(canvas.width(), total_width);
    for (ch, advance) in text.chars().zip(&advances) {
        draw_text_mut(
            canvas,
            INK,
            current_x.round() as i32,
            top,
            scale,
            font,
            &ch.to_string(),
        );
        current_x += advance + spacing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_width_of_empty_run_is_zero() {
        assert_eq!(spaced_width(&[], 6.0), 0.0);
    }

    #[test]
    fn spaced_width_omits_trailing_gap() {
        assert_eq!(spaced_width(&[10.0], 6.0), 10.0);
        assert_eq!(spaced_width(&[10.0, 12.0, 8.0], 6.0), 42.0);
    }

    #[test]
    fn centered_start_splits_the_remainder_evenly() {
        let start = centered_start(1600, 400.0);
        assert_eq!(start, 600.0);
        assert_eq!(start + 400.0, 1600.0 - start);
    }

    #[test]
    fn centered_start_of_oversized_run_goes_negative() {
        assert!(centered_start(100, 400.0) < 0.0);
    }
}
