//! Gallery entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// One image entry inside a gallery row. Entry ids are generated on
/// insert so single entries can be removed later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: Uuid,
    pub img: String,
}

/// A row from the `galleries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gallery {
    pub id: DbId,
    pub images: Json<Vec<GalleryImage>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a gallery from a list of already-hosted image URLs.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGallery {
    #[validate(length(min = 1, message = "At least one image is required!"))]
    pub images: Vec<CreateGalleryImage>,
}

/// One image URL in a create request.
///
/// `Serialize` is required by the `length` validator on
/// `CreateGallery::images`, which captures the value as an error parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGalleryImage {
    pub img: String,
}

/// Flattened view of every image across all galleries.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryImageEntry {
    pub parent_id: DbId,
    pub image_id: Uuid,
    pub img: String,
}
