//! Repository for the `enquiries` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::admission::Admission;
use crate::models::enquiry::{CreateEnquiry, Enquiry};
use crate::repositories::AdmissionRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone_number, profile, select_course, \
    select_state, district, city, message, approved, created_at, updated_at";

/// Provides CRUD and promotion operations for enquiries.
pub struct EnquiryRepo;

impl EnquiryRepo {
    /// Insert a new enquiry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEnquiry) -> Result<Enquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO enquiries
                (name, email, phone_number, profile, select_course,
                 select_state, district, city, message)
             VALUES ($1, LOWER($2), $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(&input.profile)
            .bind(&input.select_course)
            .bind(&input.select_state)
            .bind(&input.district)
            .bind(&input.city)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List all enquiries in submission order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Enquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enquiries ORDER BY id");
        sqlx::query_as::<_, Enquiry>(&query).fetch_all(pool).await
    }

    /// Find an enquiry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enquiries WHERE id = $1");
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Approve a pending enquiry and copy it into a new admission row,
    /// atomically.
    ///
    /// Returns `None` when the enquiry is absent or already approved;
    /// in that case no admission is created.
    pub async fn approve_and_promote(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<(Enquiry, Admission)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE enquiries SET approved = TRUE
             WHERE id = $1 AND approved = FALSE
             RETURNING {COLUMNS}"
        );
        let Some(enquiry) = sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let admission = AdmissionRepo::create_from_enquiry(&mut *tx, &enquiry).await?;
        tx.commit().await?;

        Ok(Some((enquiry, admission)))
    }

    /// Delete an enquiry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
