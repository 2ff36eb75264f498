//! Contact form entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use atelier_core::validation::PHONE_RE;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
    pub approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new contact message.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContact {
    #[validate(length(min = 1, max = 50, message = "Name cannot exceed 50 characters"))]
    pub name: String,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(regex(path = *PHONE_RE, message = "Phone number must be 10 digits"))]
    pub phone_number: String,
    #[validate(length(min = 1, max = 1000, message = "Message cannot exceed 1000 characters"))]
    pub message: String,
}
