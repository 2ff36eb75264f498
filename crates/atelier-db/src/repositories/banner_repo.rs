//! Repository for the `banners` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::banner::Banner;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, banner_type, image, created_at, updated_at";

/// Provides lookup and image-swap operations for banners.
pub struct BannerRepo;

impl BannerRepo {
    /// Insert a new banner, returning the created row.
    ///
    /// A duplicate `banner_type` violates `uq_banners_banner_type`.
    pub async fn create(
        pool: &PgPool,
        banner_type: &str,
        image: &str,
    ) -> Result<Banner, sqlx::Error> {
        let query = format!(
            "INSERT INTO banners (banner_type, image)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(banner_type)
            .bind(image)
            .fetch_one(pool)
            .await
    }

    /// List all banners.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Banner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM banners ORDER BY id");
        sqlx::query_as::<_, Banner>(&query).fetch_all(pool).await
    }

    /// Find a banner by its type string.
    pub async fn find_by_type(
        pool: &PgPool,
        banner_type: &str,
    ) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM banners WHERE banner_type = $1");
        sqlx::query_as::<_, Banner>(&query)
            .bind(banner_type)
            .fetch_optional(pool)
            .await
    }

    /// Find a banner by both its type and ID.
    pub async fn find_by_type_and_id(
        pool: &PgPool,
        banner_type: &str,
        id: DbId,
    ) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM banners WHERE banner_type = $1 AND id = $2");
        sqlx::query_as::<_, Banner>(&query)
            .bind(banner_type)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a banner's image URL. Returns `None` if the row is absent.
    pub async fn update_image(
        pool: &PgPool,
        id: DbId,
        image: &str,
    ) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!(
            "UPDATE banners SET image = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .bind(image)
            .fetch_optional(pool)
            .await
    }
}
