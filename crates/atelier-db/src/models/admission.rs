//! Admission form entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use atelier_core::validation::PHONE_RE;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `admissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Admission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    /// Secure URL of the applicant photo, when one was uploaded.
    pub photo: Option<String>,
    /// Secure URLs of uploaded supporting documents.
    pub documents: Vec<String>,
    pub profile: String,
    pub select_course: String,
    pub select_state: String,
    pub district: String,
    pub city: String,
    pub message: String,
    pub approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Text fields of a new admission form. File fields arrive separately
/// through the multipart body and are uploaded before the insert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAdmission {
    #[validate(length(min = 3, max = 50, message = "Name must be 3 to 50 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(regex(path = *PHONE_RE, message = "Phone number must be 10 digits"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "Profile is required"))]
    pub profile: String,
    #[validate(length(min = 1, message = "Course selection is required"))]
    pub select_course: String,
    #[validate(length(min = 1, message = "State is required"))]
    pub select_state: String,
    #[validate(length(min = 1, message = "District is required"))]
    pub district: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}
