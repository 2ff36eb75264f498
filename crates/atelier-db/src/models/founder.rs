//! Founding member entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `founders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Founder {
    pub id: DbId,
    pub name: String,
    pub position: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Text fields of a new founding member; the image arrives as a file.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFounder {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Position is required"))]
    pub position: String,
}

/// DTO for updating a founding member. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFounder {
    pub name: Option<String>,
    pub position: Option<String>,
}
