//! Alumni entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `alumni` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Alumni {
    pub id: DbId,
    pub name: String,
    pub company: String,
    pub designation: String,
    pub location: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Text fields of a new alumni entry; the image arrives as a file.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAlumni {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "Designation is required"))]
    pub designation: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
}

/// DTO for updating an alumni entry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAlumni {
    pub name: Option<String>,
    pub company: Option<String>,
    pub designation: Option<String>,
    pub location: Option<String>,
}
