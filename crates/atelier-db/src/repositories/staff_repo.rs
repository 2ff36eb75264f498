//! Repository for the `staff` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::staff::{CreateStaff, Staff, UpdateStaff};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, position, location, image, created_at, updated_at";

/// Provides CRUD operations for staff members.
pub struct StaffRepo;

impl StaffRepo {
    /// Insert a new staff member, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStaff,
        image: &str,
    ) -> Result<Staff, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff (name, position, location, image)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.location)
            .bind(image)
            .fetch_one(pool)
            .await
    }

    /// List all staff members.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff ORDER BY id");
        sqlx::query_as::<_, Staff>(&query).fetch_all(pool).await
    }

    /// Find a staff member by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE id = $1");
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a staff member. Only non-`None` fields are applied; pass
    /// a new image URL when the photo was replaced.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaff,
        image: Option<&str>,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!(
            "UPDATE staff SET
                name = COALESCE($2, name),
                position = COALESCE($3, position),
                location = COALESCE($4, location),
                image = COALESCE($5, image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.location)
            .bind(image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a staff member by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
