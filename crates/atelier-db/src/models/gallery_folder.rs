//! Gallery folder entity model.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// One hosted image inside a folder, kept with its storage public id
/// so it can be destroyed without re-parsing the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderImage {
    pub image_url: String,
    pub public_id: String,
}

/// A row from the `gallery_folders` table. One folder per title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryFolder {
    pub id: DbId,
    pub folder_title: String,
    pub folder_image: String,
    pub gallery_images: Json<Vec<FolderImage>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
