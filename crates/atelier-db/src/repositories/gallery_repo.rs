//! Repository for the `galleries` table.

use atelier_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::gallery::{Gallery, GalleryImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, images, created_at, updated_at";

/// Provides operations for galleries and their image entries.
pub struct GalleryRepo;

impl GalleryRepo {
    /// Insert a new gallery with its image entries, returning the
    /// created row.
    pub async fn create(
        pool: &PgPool,
        images: &[GalleryImage],
    ) -> Result<Gallery, sqlx::Error> {
        let query = format!(
            "INSERT INTO galleries (images) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(Json(images))
            .fetch_one(pool)
            .await
    }

    /// List all galleries, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Gallery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galleries ORDER BY created_at DESC");
        sqlx::query_as::<_, Gallery>(&query).fetch_all(pool).await
    }

    /// Find a gallery by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galleries WHERE id = $1");
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a gallery's image entries. Returns `None` if absent.
    pub async fn update_images(
        pool: &PgPool,
        id: DbId,
        images: &[GalleryImage],
    ) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!(
            "UPDATE galleries SET images = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .bind(Json(images))
            .fetch_optional(pool)
            .await
    }
}
