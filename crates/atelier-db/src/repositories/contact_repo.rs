//! Repository for the `contacts` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, CreateContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, phone_number, message, approved, created_at, updated_at";

/// Provides CRUD and approval operations for contact messages.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact message, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, phone_number, message)
             VALUES ($1, LOWER($2), $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List all contact messages, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    /// Find a contact message by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Flip `approved` to true if the message is still pending.
    ///
    /// Returns `None` when the row is absent or already approved.
    pub async fn approve(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET approved = TRUE
             WHERE id = $1 AND approved = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact message by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
