//! Repository for the `gallery_folders` table.

use atelier_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::gallery_folder::{FolderImage, GalleryFolder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, folder_title, folder_image, gallery_images, created_at, updated_at";

/// Provides CRUD operations for gallery folders.
pub struct GalleryFolderRepo;

impl GalleryFolderRepo {
    /// Insert a new gallery folder, returning the created row.
    ///
    /// A duplicate title violates `uq_gallery_folders_folder_title`.
    pub async fn create(
        pool: &PgPool,
        folder_title: &str,
        folder_image: &str,
        gallery_images: &[FolderImage],
    ) -> Result<GalleryFolder, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_folders (folder_title, folder_image, gallery_images)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryFolder>(&query)
            .bind(folder_title)
            .bind(folder_image)
            .bind(Json(gallery_images))
            .fetch_one(pool)
            .await
    }

    /// List all gallery folders, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<GalleryFolder>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM gallery_folders ORDER BY created_at DESC");
        sqlx::query_as::<_, GalleryFolder>(&query).fetch_all(pool).await
    }

    /// Find a gallery folder by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GalleryFolder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_folders WHERE id = $1");
        sqlx::query_as::<_, GalleryFolder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a gallery folder by its unique title.
    pub async fn find_by_title(
        pool: &PgPool,
        folder_title: &str,
    ) -> Result<Option<GalleryFolder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_folders WHERE folder_title = $1");
        sqlx::query_as::<_, GalleryFolder>(&query)
            .bind(folder_title)
            .fetch_optional(pool)
            .await
    }

    /// Replace a folder's image entries. Returns `None` if absent.
    pub async fn update_images(
        pool: &PgPool,
        id: DbId,
        gallery_images: &[FolderImage],
    ) -> Result<Option<GalleryFolder>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_folders SET gallery_images = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryFolder>(&query)
            .bind(id)
            .bind(Json(gallery_images))
            .fetch_optional(pool)
            .await
    }

    /// Delete a gallery folder by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_folders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
