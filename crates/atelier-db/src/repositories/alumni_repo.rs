//! Repository for the `alumni` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::alumni::{Alumni, CreateAlumni, UpdateAlumni};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, company, designation, location, image, created_at, updated_at";

/// Provides CRUD operations for alumni entries.
pub struct AlumniRepo;

impl AlumniRepo {
    /// Insert a new alumni entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAlumni,
        image: &str,
    ) -> Result<Alumni, sqlx::Error> {
        let query = format!(
            "INSERT INTO alumni (name, company, designation, location, image)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alumni>(&query)
            .bind(&input.name)
            .bind(&input.company)
            .bind(&input.designation)
            .bind(&input.location)
            .bind(image)
            .fetch_one(pool)
            .await
    }

    /// List all alumni entries, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Alumni>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alumni ORDER BY created_at DESC");
        sqlx::query_as::<_, Alumni>(&query).fetch_all(pool).await
    }

    /// Find an alumni entry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Alumni>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alumni WHERE id = $1");
        sqlx::query_as::<_, Alumni>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an alumni entry. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAlumni,
        image: Option<&str>,
    ) -> Result<Option<Alumni>, sqlx::Error> {
        let query = format!(
            "UPDATE alumni SET
                name = COALESCE($2, name),
                company = COALESCE($3, company),
                designation = COALESCE($4, designation),
                location = COALESCE($5, location),
                image = COALESCE($6, image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alumni>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.company)
            .bind(&input.designation)
            .bind(&input.location)
            .bind(image)
            .fetch_optional(pool)
            .await
    }

    /// Delete an alumni entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM alumni WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
