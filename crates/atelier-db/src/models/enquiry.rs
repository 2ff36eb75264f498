//! Enquiry form entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use atelier_core::validation::PHONE_RE;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `enquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enquiry {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
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

/// DTO for creating a new enquiry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEnquiry {
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
