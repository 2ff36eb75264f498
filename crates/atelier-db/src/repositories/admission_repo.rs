//! Repository for the `admissions` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::admission::{Admission, CreateAdmission};
use crate::models::enquiry::Enquiry;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone_number, photo, documents, profile, \
    select_course, select_state, district, city, message, approved, \
    created_at, updated_at";

/// Provides CRUD and approval operations for admission forms.
pub struct AdmissionRepo;

impl AdmissionRepo {
    /// Insert a new admission form with its uploaded asset URLs,
    /// returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdmission,
        photo: Option<&str>,
        documents: &[String],
    ) -> Result<Admission, sqlx::Error> {
        let query = format!(
            "INSERT INTO admissions
                (name, email, phone_number, photo, documents, profile,
                 select_course, select_state, district, city, message)
             VALUES ($1, LOWER($2), $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(photo)
            .bind(documents)
            .bind(&input.profile)
            .bind(&input.select_course)
            .bind(&input.select_state)
            .bind(&input.district)
            .bind(&input.city)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Copy an approved enquiry's fields into a fresh, unapproved
    /// admission row. Runs inside the caller's transaction.
    pub async fn create_from_enquiry(
        tx: &mut sqlx::PgConnection,
        enquiry: &Enquiry,
    ) -> Result<Admission, sqlx::Error> {
        let query = format!(
            "INSERT INTO admissions
                (name, email, phone_number, profile, select_course,
                 select_state, district, city, message, approved)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, FALSE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admission>(&query)
            .bind(&enquiry.name)
            .bind(&enquiry.email)
            .bind(&enquiry.phone_number)
            .bind(&enquiry.profile)
            .bind(&enquiry.select_course)
            .bind(&enquiry.select_state)
            .bind(&enquiry.district)
            .bind(&enquiry.city)
            .bind(&enquiry.message)
            .fetch_one(tx)
            .await
    }

    /// List all admission forms in submission order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Admission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admissions ORDER BY id");
        sqlx::query_as::<_, Admission>(&query).fetch_all(pool).await
    }

    /// Find an admission form by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Admission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admissions WHERE id = $1");
        sqlx::query_as::<_, Admission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Flip `approved` to true if the form is still pending.
    ///
    /// Returns `None` when the row is absent or already approved; the
    /// caller distinguishes the two with a follow-up find.
    pub async fn approve(pool: &PgPool, id: DbId) -> Result<Option<Admission>, sqlx::Error> {
        let query = format!(
            "UPDATE admissions SET approved = TRUE
             WHERE id = $1 AND approved = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an admission form by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
