//! Repository for the `founders` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::founder::{CreateFounder, Founder, UpdateFounder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, position, image, created_at, updated_at";

/// Provides CRUD operations for founding members.
pub struct FounderRepo;

impl FounderRepo {
    /// Insert a new founding member, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFounder,
        image: &str,
    ) -> Result<Founder, sqlx::Error> {
        let query = format!(
            "INSERT INTO founders (name, position, image)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Founder>(&query)
            .bind(&input.name)
            .bind(&input.position)
            .bind(image)
            .fetch_one(pool)
            .await
    }

    /// List all founding members.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Founder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM founders ORDER BY id");
        sqlx::query_as::<_, Founder>(&query).fetch_all(pool).await
    }

    /// Find a founding member by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Founder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM founders WHERE id = $1");
        sqlx::query_as::<_, Founder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a founding member. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFounder,
        image: Option<&str>,
    ) -> Result<Option<Founder>, sqlx::Error> {
        let query = format!(
            "UPDATE founders SET
                name = COALESCE($2, name),
                position = COALESCE($3, position),
                image = COALESCE($4, image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Founder>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.position)
            .bind(image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a founding member by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM founders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
