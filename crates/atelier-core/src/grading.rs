//! Marks validation and grade computation for marksheets.
//!
//! Grades are derived from the obtained/maximum percentage using fixed
//! bands. Totals and the overall grade are always computed server-side;
//! client-supplied grades are never trusted.

/// Grade bands as (minimum percentage, grade) pairs, highest first.
const GRADE_BANDS: &[(f64, &str)] = &[
    (90.0, "A+"),
    (80.0, "A"),
    (70.0, "B+"),
    (60.0, "B"),
    (50.0, "C"),
    (40.0, "D"),
];

/// Grade awarded below every band.
const FAIL_GRADE: &str = "F";

/// Computed totals for a full subject list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkTotals {
    pub total_max_marks: i32,
    pub total_obtained_marks: i32,
    pub overall_grade: &'static str,
}

/// Grade for a single obtained/maximum pair.
///
/// `max` must be positive (callers validate via [`validate_subjects`] first);
/// a non-positive `max` grades as [`FAIL_GRADE`] rather than dividing by zero.
pub fn grade_for_marks(obtained: i32, max: i32) -> &'static str {
    if max <= 0 {
        return FAIL_GRADE;
    }
    let pct = f64::from(obtained) * 100.0 / f64::from(max);
    for (floor, grade) in GRADE_BANDS {
        if pct >= *floor {
            return grade;
        }
    }
    FAIL_GRADE
}

/// Sum a subject list into totals and an overall grade.
///
/// Items are `(max_marks, obtained_marks)` pairs in marksheet order.
pub fn totals(subjects: impl IntoIterator<Item = (i32, i32)>) -> MarkTotals {
    let mut total_max = 0;
    let mut total_obtained = 0;
    for (max, obtained) in subjects {
        total_max += max;
        total_obtained += obtained;
    }
    MarkTotals {
        total_max_marks: total_max,
        total_obtained_marks: total_obtained,
        overall_grade: grade_for_marks(total_obtained, total_max),
    }
}

/// Validate a subject list before grading.
///
/// The list must be non-empty, every maximum must be positive, and every
/// obtained mark must lie in `0..=max`. Returns a human-readable reason on
/// failure.
pub fn validate_subjects(subjects: &[(i32, i32)]) -> Result<(), String> {
    if subjects.is_empty() {
        return Err("At least one subject is required".to_string());
    }
    for (index, (max, obtained)) in subjects.iter().enumerate() {
        if *max <= 0 {
            return Err(format!(
                "Subject {}: maximum marks must be positive",
                index + 1
            ));
        }
        if *obtained < 0 || obtained > max {
            return Err(format!(
                "Subject {}: obtained marks must be between 0 and {max}",
                index + 1
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_band_boundaries() {
        assert_eq!(grade_for_marks(90, 100), "A+");
        assert_eq!(grade_for_marks(89, 100), "A");
        assert_eq!(grade_for_marks(80, 100), "A");
        assert_eq!(grade_for_marks(70, 100), "B+");
        assert_eq!(grade_for_marks(60, 100), "B");
        assert_eq!(grade_for_marks(50, 100), "C");
        assert_eq!(grade_for_marks(40, 100), "D");
        assert_eq!(grade_for_marks(39, 100), "F");
        assert_eq!(grade_for_marks(0, 100), "F");
    }

    #[test]
    fn grade_uses_percentage_not_absolute_marks() {
        // 45/50 is 90%, not 45%.
        assert_eq!(grade_for_marks(45, 50), "A+");
    }

    #[test]
    fn zero_max_grades_as_fail() {
        assert_eq!(grade_for_marks(0, 0), "F");
    }

    #[test]
    fn totals_sums_and_grades() {
        let t = totals([(100, 90), (50, 35)]);
        assert_eq!(t.total_max_marks, 150);
        assert_eq!(t.total_obtained_marks, 125);
        // 125/150 is 83.3%.
        assert_eq!(t.overall_grade, "A");
    }

    #[test]
    fn validate_rejects_empty_list() {
        let err = validate_subjects(&[]).unwrap_err();
        assert!(err.contains("At least one subject"));
    }

    #[test]
    fn validate_rejects_obtained_above_max() {
        let err = validate_subjects(&[(100, 90), (50, 60)]).unwrap_err();
        assert!(err.contains("Subject 2"));
    }

    #[test]
    fn validate_rejects_negative_obtained() {
        assert!(validate_subjects(&[(100, -1)]).is_err());
    }

    #[test]
    fn validate_rejects_non_positive_max() {
        let err = validate_subjects(&[(0, 0)]).unwrap_err();
        assert!(err.contains("maximum marks must be positive"));
    }

    #[test]
    fn validate_accepts_full_and_zero_marks() {
        assert!(validate_subjects(&[(100, 100), (100, 0)]).is_ok());
    }
}
