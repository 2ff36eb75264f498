//! Exam course entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `exams` table. `course_code` is stored uppercased.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exam {
    pub id: DbId,
    pub course_name: String,
    pub course_code: String,
    pub marks: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new exam course.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExam {
    #[validate(length(min = 1, message = "Course name is required"))]
    pub course_name: String,
    #[validate(length(min = 1, message = "Course code is required"))]
    pub course_code: String,
    #[validate(range(min = 0, message = "Marks cannot be negative"))]
    pub marks: i32,
}

/// DTO for updating an exam course. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateExam {
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    #[validate(range(min = 0, message = "Marks cannot be negative"))]
    pub marks: Option<i32>,
}
