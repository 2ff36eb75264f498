//! Staff member entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `staff` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Staff {
    pub id: DbId,
    pub name: String,
    pub position: String,
    pub location: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Text fields of a new staff member; the image arrives as a file.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStaff {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Position is required"))]
    pub position: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
}

/// DTO for updating a staff member. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStaff {
    pub name: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
}
