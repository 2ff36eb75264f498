//! Repository for the `marksheets` table.

use std::collections::HashMap;

use atelier_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::marksheet::{GradedMarksheet, Marksheet, MarksheetWithStudent};
use crate::models::student::Student;

const COLUMNS: &str = "id, student_id, subjects, total_max_marks, \
    total_obtained_marks, overall_grade, created_at, updated_at";

/// Provides CRUD operations for graded marksheets.
pub struct MarksheetRepo;

impl MarksheetRepo {
    /// Insert a marksheet with server-computed grades and totals.
    pub async fn create(
        pool: &PgPool,
        student_id: DbId,
        graded: &GradedMarksheet,
    ) -> Result<Marksheet, sqlx::Error> {
        let query = format!(
            "INSERT INTO marksheets
                (student_id, subjects, total_max_marks, total_obtained_marks,
                 overall_grade)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Marksheet>(&query)
            .bind(student_id)
            .bind(Json(&graded.subjects))
            .bind(graded.total_max_marks)
            .bind(graded.total_obtained_marks)
            .bind(&graded.overall_grade)
            .fetch_one(pool)
            .await
    }

    /// List all marksheets with their student records attached.
    ///
    /// Students are fetched in a single follow-up query rather than one
    /// query per marksheet.
    pub async fn list_all_with_student(
        pool: &PgPool,
    ) -> Result<Vec<MarksheetWithStudent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marksheets ORDER BY id");
        let marksheets = sqlx::query_as::<_, Marksheet>(&query)
            .fetch_all(pool)
            .await?;

        let student_ids: Vec<DbId> = marksheets.iter().map(|m| m.student_id).collect();
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, certificate_no, enrollment_id, name, father_name, course,
                    duration, date, created_at, updated_at
             FROM students WHERE id = ANY($1)",
        )
        .bind(&student_ids)
        .fetch_all(pool)
        .await?;

        let by_id: HashMap<DbId, Student> =
            students.into_iter().map(|s| (s.id, s)).collect();

        // The foreign key guarantees a matching student for every row. A
        // student may own several marksheets, so the map is read, not drained.
        Ok(marksheets
            .into_iter()
            .filter_map(|m| {
                let student = by_id.get(&m.student_id).cloned()?;
                Some(MarksheetWithStudent::new(m, student))
            })
            .collect())
    }

    /// Find a marksheet by ID with its student record attached.
    pub async fn find_by_id_with_student(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MarksheetWithStudent>, sqlx::Error> {
        let Some(marksheet) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, certificate_no, enrollment_id, name, father_name, course,
                    duration, date, created_at, updated_at
             FROM students WHERE id = $1",
        )
        .bind(marksheet.student_id)
        .fetch_optional(pool)
        .await?;
        Ok(student.map(|s| MarksheetWithStudent::new(marksheet, s)))
    }

    /// Find a marksheet by ID without resolving the student reference.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Marksheet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marksheets WHERE id = $1");
        sqlx::query_as::<_, Marksheet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a marksheet's subjects and recomputed totals.
    pub async fn update_grades(
        pool: &PgPool,
        id: DbId,
        graded: &GradedMarksheet,
    ) -> Result<Option<Marksheet>, sqlx::Error> {
        let query = format!(
            "UPDATE marksheets SET
                subjects = $2,
                total_max_marks = $3,
                total_obtained_marks = $4,
                overall_grade = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Marksheet>(&query)
            .bind(id)
            .bind(Json(&graded.subjects))
            .bind(graded.total_max_marks)
            .bind(graded.total_obtained_marks)
            .bind(&graded.overall_grade)
            .fetch_optional(pool)
            .await
    }

    /// Delete a marksheet by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM marksheets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
