//! Repository for the `courses` table.

use atelier_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::course::{Course, CourseListBlocks, CreateCourse, UpdateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, banner_title, banner_image, course_type, course_title, \
    course_description, overview_title, overview_desc, course_of_courses_title, \
    course_of_courses_lists, topic_title, topic_lists, career_title, career_lists, \
    course_list_title, course_list_desc, course_lists, created_at, updated_at";

/// Provides CRUD operations for course pages.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course page, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCourse,
        banner_image: &str,
        lists: &CourseListBlocks,
    ) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses
                (banner_title, banner_image, course_type, course_title,
                 course_description, overview_title, overview_desc,
                 course_of_courses_title, course_of_courses_lists,
                 topic_title, topic_lists, career_title, career_lists,
                 course_list_title, course_list_desc, course_lists)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                     $14, $15, $16)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.banner_title)
            .bind(banner_image)
            .bind(&input.course_type)
            .bind(&input.course_title)
            .bind(&input.course_description)
            .bind(&input.overview_title)
            .bind(&input.overview_desc)
            .bind(&input.course_of_courses_title)
            .bind(Json(&lists.course_of_courses_lists))
            .bind(&input.topic_title)
            .bind(Json(&lists.topic_lists))
            .bind(&input.career_title)
            .bind(Json(&lists.career_lists))
            .bind(&input.course_list_title)
            .bind(&input.course_list_desc)
            .bind(Json(&lists.course_lists))
            .fetch_one(pool)
            .await
    }

    /// List all course pages, oldest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY created_at ASC");
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Find a course page by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a course page. Only non-`None` fields are applied; pass a
    /// new banner URL when the banner image was replaced.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
        banner_image: Option<&str>,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                banner_title = COALESCE($2, banner_title),
                banner_image = COALESCE($3, banner_image),
                course_type = COALESCE($4, course_type),
                course_title = COALESCE($5, course_title),
                course_description = COALESCE($6, course_description),
                overview_title = COALESCE($7, overview_title),
                overview_desc = COALESCE($8, overview_desc),
                course_of_courses_title = COALESCE($9, course_of_courses_title),
                course_of_courses_lists = COALESCE($10, course_of_courses_lists),
                topic_title = COALESCE($11, topic_title),
                topic_lists = COALESCE($12, topic_lists),
                career_title = COALESCE($13, career_title),
                career_lists = COALESCE($14, career_lists),
                course_list_title = COALESCE($15, course_list_title),
                course_list_desc = COALESCE($16, course_list_desc),
                course_lists = COALESCE($17, course_lists)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.banner_title)
            .bind(banner_image)
            .bind(&input.course_type)
            .bind(&input.course_title)
            .bind(&input.course_description)
            .bind(&input.overview_title)
            .bind(&input.overview_desc)
            .bind(&input.course_of_courses_title)
            .bind(input.course_of_courses_lists.as_ref().map(Json))
            .bind(&input.topic_title)
            .bind(input.topic_lists.as_ref().map(Json))
            .bind(&input.career_title)
            .bind(input.career_lists.as_ref().map(Json))
            .bind(&input.course_list_title)
            .bind(&input.course_list_desc)
            .bind(input.course_lists.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a course page by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
