//! Repository for the `exams` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::exam::{CreateExam, Exam, UpdateExam};

const COLUMNS: &str = "id, course_name, course_code, marks, created_at, updated_at";

/// Provides CRUD and search operations for exam courses.
pub struct ExamRepo;

impl ExamRepo {
    /// Insert a new exam course. Course codes are stored uppercased.
    ///
    /// A duplicate code violates `uq_exams_course_code`.
    pub async fn create(pool: &PgPool, input: &CreateExam) -> Result<Exam, sqlx::Error> {
        let query = format!(
            "INSERT INTO exams (course_name, course_code, marks)
             VALUES ($1, UPPER($2), $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exam>(&query)
            .bind(&input.course_name)
            .bind(&input.course_code)
            .bind(input.marks)
            .fetch_one(pool)
            .await
    }

    /// List all exam courses, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Exam>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exams ORDER BY created_at DESC");
        sqlx::query_as::<_, Exam>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring search over course name and code.
    /// The keyword matches literally; ILIKE metacharacters are escaped.
    pub async fn search(pool: &PgPool, keyword: &str) -> Result<Vec<Exam>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM exams
             WHERE course_name ILIKE $1 OR course_code ILIKE $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Exam>(&query)
            .bind(super::like_pattern(keyword))
            .fetch_all(pool)
            .await
    }

    /// Find an exam course by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Exam>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exams WHERE id = $1");
        sqlx::query_as::<_, Exam>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an exam course. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExam,
    ) -> Result<Option<Exam>, sqlx::Error> {
        let query = format!(
            "UPDATE exams SET
                course_name = COALESCE($2, course_name),
                course_code = COALESCE(UPPER($3), course_code),
                marks = COALESCE($4, marks)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exam>(&query)
            .bind(id)
            .bind(&input.course_name)
            .bind(&input.course_code)
            .bind(input.marks)
            .fetch_optional(pool)
            .await
    }

    /// Delete an exam course by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM exams WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
