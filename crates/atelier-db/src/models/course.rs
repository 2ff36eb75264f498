//! Course page entity model and DTOs.
//!
//! The four list blocks are shape-flexible JSON arrays authored by the
//! admin frontend; they are stored as JSONB and never interpreted
//! server-side beyond "must be an array".

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub banner_title: String,
    pub banner_image: String,
    pub course_type: String,
    pub course_title: String,
    pub course_description: String,
    pub overview_title: Option<String>,
    pub overview_desc: Option<String>,
    pub course_of_courses_title: Option<String>,
    pub course_of_courses_lists: Json<Vec<serde_json::Value>>,
    pub topic_title: Option<String>,
    pub topic_lists: Json<Vec<serde_json::Value>>,
    pub career_title: Option<String>,
    pub career_lists: Json<Vec<serde_json::Value>>,
    pub course_list_title: String,
    pub course_list_desc: String,
    pub course_lists: Json<Vec<serde_json::Value>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Text fields of a new course page. The banner image arrives as a
/// file and the list blocks as JSON-stringified text fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourse {
    #[validate(length(min = 1, message = "Banner title is required"))]
    pub banner_title: String,
    #[validate(length(min = 1, message = "Course type is required"))]
    pub course_type: String,
    #[validate(length(min = 1, message = "Course title is required"))]
    pub course_title: String,
    #[validate(length(min = 1, message = "Course description is required"))]
    pub course_description: String,
    pub overview_title: Option<String>,
    pub overview_desc: Option<String>,
    pub course_of_courses_title: Option<String>,
    pub topic_title: Option<String>,
    pub career_title: Option<String>,
    #[validate(length(min = 1, message = "Course list title is required"))]
    pub course_list_title: String,
    #[validate(length(min = 1, message = "Course list description is required"))]
    pub course_list_desc: String,
}

/// The four list blocks after parsing their stringified form.
#[derive(Debug, Clone, Default)]
pub struct CourseListBlocks {
    pub course_of_courses_lists: Vec<serde_json::Value>,
    pub topic_lists: Vec<serde_json::Value>,
    pub career_lists: Vec<serde_json::Value>,
    pub course_lists: Vec<serde_json::Value>,
}

/// DTO for updating a course page. All fields are optional; a list
/// block left as `None` keeps its stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourse {
    pub banner_title: Option<String>,
    pub course_type: Option<String>,
    pub course_title: Option<String>,
    pub course_description: Option<String>,
    pub overview_title: Option<String>,
    pub overview_desc: Option<String>,
    pub course_of_courses_title: Option<String>,
    pub course_of_courses_lists: Option<Vec<serde_json::Value>>,
    pub topic_title: Option<String>,
    pub topic_lists: Option<Vec<serde_json::Value>>,
    pub career_title: Option<String>,
    pub career_lists: Option<Vec<serde_json::Value>>,
    pub course_list_title: Option<String>,
    pub course_list_desc: Option<String>,
    pub course_lists: Option<Vec<serde_json::Value>>,
}
