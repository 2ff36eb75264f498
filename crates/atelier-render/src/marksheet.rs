//! Marksheet layout.
//!
//! The header fields are plain text at fixed anchors, the subject
//! table grows downward one row per subject, and the totals sit in
//! the printed boxes near the foot of the sheet.

use ab_glyph::FontVec;
use image::RgbaImage;

use crate::text::{draw_plain, draw_spaced, px_size_scale};

/// Template raster for the marksheet.
pub(crate) const MARKSHEET_TEMPLATE: &str = "marksheet.jpg";
/// Typeface for all marksheet text.
pub(crate) const MARKSHEET_FONT: &str = "fonnts.com-garet-heavy.otf";

const FONT_SIZE_PX: f32 = 22.0;

/// Header field baselines.
const NAME_ANCHOR: (f32, f32) = (250.0, 337.0);
const FATHER_NAME_ANCHOR: (f32, f32) = (234.0, 373.0);
const COURSE_ANCHOR: (f32, f32) = (318.0, 408.0);
const DURATION_ANCHOR: (f32, f32) = (648.0, 333.0);
const ENROLLMENT_ID_ANCHOR: (f32, f32) = (758.0, 368.0);
const CERTIFICATE_NO_ANCHOR: (f32, f32) = (758.0, 405.0);

/// Subject table geometry.
const TABLE_TOP_BASELINE: f32 = 620.0;
const ROW_HEIGHT: f32 = 40.0;
const ROW_LETTER_SPACING: f32 = 4.0;
const CODE_COLUMN_X: f32 = 100.0;
const SUBJECT_COLUMN_X: f32 = 350.0;
const MAX_MARKS_COLUMN_X: f32 = 680.0;
const OBTAINED_COLUMN_X: f32 = 783.0;
const GRADE_COLUMN_X: f32 = 893.0;

/// Totals boxes.
const TOTALS_LETTER_SPACING: f32 = 6.0;
const TOTAL_MAX_ANCHOR: (f32, f32) = (385.0, 1048.0);
const TOTAL_OBTAINED_ANCHOR: (f32, f32) = (388.0, 1113.0);
const OVERALL_GRADE_ANCHOR: (f32, f32) = (844.0, 1080.0);

/// One row of the subject table.
#[derive(Debug, Clone)]
pub struct SubjectLine {
    pub course_code: String,
    pub course_name: String,
    pub max_marks: i32,
    pub obtained_marks: i32,
    pub grade: String,
}

/// Everything placed on a marksheet, flattened from the marksheet row
/// and its joined student record.
#[derive(Debug, Clone)]
pub struct MarksheetData {
    /// Output file stem.
    pub marksheet_id: i64,
    pub name: String,
    pub father_name: String,
    pub course: String,
    pub duration: String,
    pub enrollment_id: String,
    pub certificate_no: String,
    pub subjects: Vec<SubjectLine>,
    pub total_max_marks: i32,
    pub total_obtained_marks: i32,
    pub overall_grade: String,
}

/// Baseline of the subject row at `index`.
fn subject_row_baseline(index: usize) -> f32 {
    TABLE_TOP_BASELINE + index as f32 * ROW_HEIGHT
}

/// Draw the marksheet text onto the template canvas.
pub(crate) fn compose(mut canvas: RgbaImage, font: &FontVec, data: &MarksheetData) -> RgbaImage {
    let scale = px_size_scale(font, FONT_SIZE_PX);

    let (x, y) = NAME_ANCHOR;
    draw_plain(&mut canvas, font, scale, &data.name, x, y);
    let (x, y) = FATHER_NAME_ANCHOR;
    draw_plain(&mut canvas, font, scale, &data.father_name, x, y);
    let (x, y) = COURSE_ANCHOR;
    draw_plain(&mut canvas, font, scale, &data.course, x, y);
    let (x, y) = DURATION_ANCHOR;
    draw_plain(&mut canvas, font, scale, &data.duration, x, y);
    let (x, y) = ENROLLMENT_ID_ANCHOR;
    draw_plain(&mut canvas, font, scale, &data.enrollment_id, x, y);
    let (x, y) = CERTIFICATE_NO_ANCHOR;
    draw_plain(&mut canvas, font, scale, &data.certificate_no, x, y);

    for (index, subject) in data.subjects.iter().enumerate() {
        let y = subject_row_baseline(index);
        let spacing = ROW_LETTER_SPACING;
        draw_spaced(&mut canvas, font, scale, &subject.course_code, CODE_COLUMN_X, y, spacing);
        draw_spaced(&mut canvas, font, scale, &subject.course_name, SUBJECT_COLUMN_X, y, spacing);
        draw_spaced(
            &mut canvas,
            font,
            scale,
            &subject.max_marks.to_string(),
            MAX_MARKS_COLUMN_X,
            y,
            spacing,
        );
        draw_spaced(
            &mut canvas,
            font,
            scale,
            &subject.obtained_marks.to_string(),
            OBTAINED_COLUMN_X,
            y,
            spacing,
        );
        draw_spaced(&mut canvas, font, scale, &subject.grade, GRADE_COLUMN_X, y, spacing);
    }

    let (x, y) = TOTAL_MAX_ANCHOR;
    draw_spaced(
        &mut canvas,
        font,
        scale,
        &data.total_max_marks.to_string(),
        x,
        y,
        TOTALS_LETTER_SPACING,
    );
    let (x, y) = TOTAL_OBTAINED_ANCHOR;
    draw_spaced(
        &mut canvas,
        font,
        scale,
        &data.total_obtained_marks.to_string(),
        x,
        y,
        TOTALS_LETTER_SPACING,
    );
    let (x, y) = OVERALL_GRADE_ANCHOR;
    draw_spaced(&mut canvas, font, scale, &data.overall_grade, x, y, TOTALS_LETTER_SPACING);

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_rows_step_down_a_fixed_line_height() {
        assert_eq!(subject_row_baseline(0), 620.0);
        assert_eq!(subject_row_baseline(1), 660.0);
        assert_eq!(subject_row_baseline(5), 820.0);
    }
}
