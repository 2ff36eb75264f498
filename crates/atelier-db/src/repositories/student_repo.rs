//! Repository for the `students` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student, UpdateStudent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, certificate_no, enrollment_id, name, father_name, \
    course, duration, date, created_at, updated_at";

/// Provides CRUD and search operations for student records.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student record, returning the created row.
    ///
    /// A duplicate enrollment id violates `uq_students_enrollment_id`.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students
                (certificate_no, enrollment_id, name, father_name, course,
                 duration, date)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.certificate_no)
            .bind(&input.enrollment_id)
            .bind(&input.name)
            .bind(&input.father_name)
            .bind(&input.course)
            .bind(&input.duration)
            .bind(&input.date)
            .fetch_one(pool)
            .await
    }

    /// List all student records in creation order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY id");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring search over name and father name.
    /// The keyword matches literally; ILIKE metacharacters are escaped.
    pub async fn search(pool: &PgPool, keyword: &str) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students
             WHERE name ILIKE $1 OR father_name ILIKE $1
             ORDER BY id"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(super::like_pattern(keyword))
            .fetch_all(pool)
            .await
    }

    /// Find a student record by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a student record by its unique enrollment id.
    pub async fn find_by_enrollment_id(
        pool: &PgPool,
        enrollment_id: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE enrollment_id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(enrollment_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a student record. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                certificate_no = COALESCE($2, certificate_no),
                enrollment_id = COALESCE($3, enrollment_id),
                name = COALESCE($4, name),
                father_name = COALESCE($5, father_name),
                course = COALESCE($6, course),
                duration = COALESCE($7, duration),
                date = COALESCE($8, date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.certificate_no)
            .bind(&input.enrollment_id)
            .bind(&input.name)
            .bind(&input.father_name)
            .bind(&input.course)
            .bind(&input.duration)
            .bind(&input.date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student record by ID. Marksheets referencing it are
    /// removed by the cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
