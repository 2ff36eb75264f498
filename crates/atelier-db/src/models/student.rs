//! Student record entity model and DTOs.
//!
//! The student row is the immutable core the certificate renderer
//! draws from; `duration` and `date` are kept verbatim as entered.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub certificate_no: String,
    pub enrollment_id: String,
    pub name: String,
    pub father_name: String,
    pub course: String,
    pub duration: String,
    pub date: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new student record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudent {
    #[validate(length(min = 1, message = "Certificate number is required"))]
    pub certificate_no: String,
    #[validate(length(min = 1, message = "Enrollment ID is required"))]
    pub enrollment_id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Father name is required"))]
    pub father_name: String,
    #[validate(length(min = 1, message = "Course is required"))]
    pub course: String,
    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
}

/// DTO for updating a student record. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudent {
    pub certificate_no: Option<String>,
    pub enrollment_id: Option<String>,
    pub name: Option<String>,
    pub father_name: Option<String>,
    pub course: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}
