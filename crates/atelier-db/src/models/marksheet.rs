//! Marksheet entity model and DTOs.
//!
//! Clients submit raw subject marks; per-subject grades, totals and
//! the overall grade are computed server-side before insert.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::student::Student;

/// One graded subject row as stored in the `subjects` JSONB column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectGrade {
    pub course_name: String,
    pub course_code: String,
    pub max_marks: i32,
    pub obtained_marks: i32,
    pub grade: String,
}

/// A row from the `marksheets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Marksheet {
    pub id: DbId,
    pub student_id: DbId,
    pub subjects: Json<Vec<SubjectGrade>>,
    pub total_max_marks: i32,
    pub total_obtained_marks: i32,
    pub overall_grade: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A marksheet joined with its student record, as returned by reads.
#[derive(Debug, Clone, Serialize)]
pub struct MarksheetWithStudent {
    pub id: DbId,
    pub student: Student,
    pub subjects: Json<Vec<SubjectGrade>>,
    pub total_max_marks: i32,
    pub total_obtained_marks: i32,
    pub overall_grade: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MarksheetWithStudent {
    pub fn new(marksheet: Marksheet, student: Student) -> Self {
        Self {
            id: marksheet.id,
            student,
            subjects: marksheet.subjects,
            total_max_marks: marksheet.total_max_marks,
            total_obtained_marks: marksheet.total_obtained_marks,
            overall_grade: marksheet.overall_grade,
            created_at: marksheet.created_at,
            updated_at: marksheet.updated_at,
        }
    }
}

/// One subject's raw marks as submitted by the client.
///
/// `Serialize` is required by the `length` validator on the containing
/// lists, which captures the value as an error parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectMarks {
    pub course_name: String,
    pub course_code: String,
    pub max_marks: i32,
    pub obtained_marks: i32,
}

/// DTO for creating a new marksheet.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMarksheet {
    pub student_id: DbId,
    #[validate(length(min = 1, message = "At least one subject must be provided."))]
    pub subjects: Vec<SubjectMarks>,
}

/// DTO for replacing a marksheet's subjects.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMarksheet {
    #[validate(length(min = 1, message = "At least one subject must be provided."))]
    pub subjects: Vec<SubjectMarks>,
}

/// Fully graded marksheet content, ready for insert or replace.
#[derive(Debug, Clone)]
pub struct GradedMarksheet {
    pub subjects: Vec<SubjectGrade>,
    pub total_max_marks: i32,
    pub total_obtained_marks: i32,
    pub overall_grade: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> SubjectMarks {
        SubjectMarks {
            course_name: "Draping".into(),
            course_code: "DR-1".into(),
            max_marks: 100,
            obtained_marks: 80,
        }
    }

    #[test]
    fn empty_subject_list_fails_validation() {
        let dto = CreateMarksheet {
            student_id: 1,
            subjects: vec![],
        };
        assert!(dto.validate().is_err());

        let dto = UpdateMarksheet { subjects: vec![] };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn populated_subject_list_passes_validation() {
        let dto = CreateMarksheet {
            student_id: 1,
            subjects: vec![subject()],
        };
        assert!(dto.validate().is_ok());
    }
}
