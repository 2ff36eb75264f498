//! Course-completion certificate layout.
//!
//! Text placement matches the printed template stock: the serial
//! numbers sit in the top corners and the student lines are centered
//! on the sheet.

use ab_glyph::FontVec;
use chrono::{DateTime, Datelike, NaiveDate};
use image::RgbaImage;

use crate::text::{draw_spaced, draw_spaced_centered, px_size_scale};

/// Template for the certificate issued on completion.
const PRIMARY_TEMPLATE: &str = "template.jpeg";
/// Template for the replacement copy.
const SECOND_TEMPLATE: &str = "template2.jpeg";
/// Typeface for all certificate text.
pub(crate) const CERTIFICATE_FONT: &str = "DMSans_18pt-SemiBoldItalic.ttf";

const FONT_SIZE_PX: f32 = 22.0;
const LETTER_SPACING: f32 = 6.0;

/// Baselines of the corner serials, anchored at a fixed left edge.
const CERTIFICATE_NO_ANCHOR: (f32, f32) = (125.0, 310.0);
const ENROLLMENT_ID_ANCHOR: (f32, f32) = (755.0, 305.0);

/// Baselines of the centered student lines.
const NAME_BASELINE: f32 = 760.0;
const COURSE_BASELINE: f32 = 910.0;
const DURATION_BASELINE: f32 = 1065.0;
const DATE_BASELINE: f32 = 1180.0;

/// Which certificate template a render targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateKind {
    /// The certificate issued on course completion.
    Primary,
    /// The alternate second-copy design.
    Second,
}

impl CertificateKind {
    /// Template file name under the templates directory.
    pub(crate) fn template_file(self) -> &'static str {
        match self {
            CertificateKind::Primary => PRIMARY_TEMPLATE,
            CertificateKind::Second => SECOND_TEMPLATE,
        }
    }
}

/// Student fields placed on a certificate.
#[derive(Debug, Clone)]
pub struct CertificateData {
    pub certificate_no: String,
    pub enrollment_id: String,
    pub name: String,
    pub course: String,
    /// Course length in years, drawn as `{duration} Year`.
    pub duration: String,
    /// Issue date as stored; drawn as unpadded `D/M/YYYY`.
    pub date: String,
}

/// Draw the certificate text onto the template canvas.
pub(crate) fn compose(mut canvas: RgbaImage, font: &FontVec, data: &CertificateData) -> RgbaImage {
    let scale = px_size_scale(font, FONT_SIZE_PX);

    let (x, y) = CERTIFICATE_NO_ANCHOR;
    draw_spaced(&mut canvas, font, scale, &data.certificate_no, x, y, LETTER_SPACING);
    let (x, y) = ENROLLMENT_ID_ANCHOR;
    draw_spaced(&mut canvas, font, scale, &data.enrollment_id, x, y, LETTER_SPACING);

    draw_spaced_centered(&mut canvas, font, scale, &data.name, NAME_BASELINE, LETTER_SPACING);
    draw_spaced_centered(&mut canvas, font, scale, &data.course, COURSE_BASELINE, LETTER_SPACING);
    draw_spaced_centered(
        &mut canvas,
        font,
        scale,
        &format!("{} Year", data.duration),
        DURATION_BASELINE,
        LETTER_SPACING,
    );
    draw_spaced_centered(
        &mut canvas,
        font,
        scale,
        &format_issue_date(&data.date),
        DATE_BASELINE,
        LETTER_SPACING,
    );

    canvas
}

/// Render the stored issue date as unpadded `D/M/YYYY`.
///
/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates; anything
/// else is drawn verbatim.
fn format_issue_date(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        let date = ts.date_naive();
        return format!("{}/{}/{}", date.day(), date.month(), date.year());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return format!("{}/{}/{}", date.day(), date.month(), date.year());
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_date_is_unpadded() {
        assert_eq!(format_issue_date("2024-03-05"), "5/3/2024");
        assert_eq!(format_issue_date("2024-11-21"), "21/11/2024");
    }

    #[test]
    fn issue_date_accepts_rfc3339() {
        assert_eq!(format_issue_date("2023-12-01T10:30:00Z"), "1/12/2023");
    }

    #[test]
    fn unparseable_date_is_drawn_verbatim() {
        assert_eq!(format_issue_date("March 2024"), "March 2024");
    }

    #[test]
    fn kinds_map_to_distinct_templates() {
        assert_eq!(CertificateKind::Primary.template_file(), "template.jpeg");
        assert_eq!(CertificateKind::Second.template_file(), "template2.jpeg");
    }
}
