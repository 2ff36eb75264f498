//! Handlers for the `/course` resource.
//!
//! Course pages carry four shape-flexible list blocks authored by the
//! admin frontend. They arrive as JSON-stringified text fields in the
//! multipart body and must parse to arrays; the server never interprets
//! their contents.

use atelier_core::types::DbId;
use atelier_db::models::course::{CourseListBlocks, CreateCourse, UpdateCourse};
use atelier_db::repositories::CourseRepo;
use atelier_storage::paths;
use axum::extract::{Path, State};
use validator::Validate;

use crate::assets;
use crate::error::{AppError, AppResult};
use crate::extract::FormData;
use crate::response::Success;
use crate::state::AppState;

/// Parse a JSON-stringified list block; absent or empty means an empty list.
fn parse_block(form: &FormData, name: &str) -> Result<Vec<serde_json::Value>, AppError> {
    match form.text(name) {
        None | Some("") => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(raw)
            .map_err(|_| AppError::BadRequest(format!("{name} must be a JSON array"))),
    }
}

/// Parse an optional list block for updates; absent means "keep stored".
fn parse_optional_block(
    form: &FormData,
    name: &str,
) -> Result<Option<Vec<serde_json::Value>>, AppError> {
    match form.text(name) {
        None => Ok(None),
        Some("") => Ok(None),
        Some(raw) => serde_json::from_str(raw)
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("{name} must be a JSON array"))),
    }
}

/// POST /api/course/new-course
pub async fn create(State(state): State<AppState>, mut form: FormData) -> AppResult<Success> {
    let input = CreateCourse {
        banner_title: form.text_or_default("banner_title"),
        course_type: form.text_or_default("course_type"),
        course_title: form.text_or_default("course_title"),
        course_description: form.text_or_default("course_description"),
        overview_title: form.text("overview_title").map(str::to_string),
        overview_desc: form.text("overview_desc").map(str::to_string),
        course_of_courses_title: form.text("course_of_courses_title").map(str::to_string),
        topic_title: form.text("topic_title").map(str::to_string),
        career_title: form.text("career_title").map(str::to_string),
        course_list_title: form.text_or_default("course_list_title"),
        course_list_desc: form.text_or_default("course_list_desc"),
    };
    input.validate()?;

    let lists = CourseListBlocks {
        course_of_courses_lists: parse_block(&form, "course_of_courses_lists")?,
        topic_lists: parse_block(&form, "topic_lists")?,
        career_lists: parse_block(&form, "career_lists")?,
        course_lists: parse_block(&form, "course_lists")?,
    };

    let Some(banner) = form.take_file("bannerImage") else {
        return Err(AppError::BadRequest("Banner image is required!".into()));
    };

    let storage = &*state.storage;
    let stored = assets::upload_file(storage, &paths::course_banners(), banner).await?;

    let course = match CourseRepo::create(&state.pool, &input, &stored.secure_url, &lists).await {
        Ok(row) => row,
        Err(err) => {
            assets::discard_uploads(storage, std::slice::from_ref(&stored)).await;
            return Err(err.into());
        }
    };

    tracing::info!(id = course.id, "course page created");
    Ok(Success::created()
        .message("Course created successfully")
        .field("course", &course))
}

/// GET /api/course/all-course
///
/// Oldest first, matching the public site's display order.
pub async fn list(State(state): State<AppState>) -> AppResult<Success> {
    let courses = CourseRepo::list_all(&state.pool).await?;
    Ok(Success::ok().count(courses.len()).field("courses", &courses))
}

/// GET /api/course/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".into()))?;
    Ok(Success::ok().field("course", &course))
}

/// PUT /api/course/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut form: FormData,
) -> AppResult<Success> {
    let existing = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".into()))?;

    let input = UpdateCourse {
        banner_title: form.text("banner_title").map(str::to_string),
        course_type: form.text("course_type").map(str::to_string),
        course_title: form.text("course_title").map(str::to_string),
        course_description: form.text("course_description").map(str::to_string),
        overview_title: form.text("overview_title").map(str::to_string),
        overview_desc: form.text("overview_desc").map(str::to_string),
        course_of_courses_title: form.text("course_of_courses_title").map(str::to_string),
        course_of_courses_lists: parse_optional_block(&form, "course_of_courses_lists")?,
        topic_title: form.text("topic_title").map(str::to_string),
        topic_lists: parse_optional_block(&form, "topic_lists")?,
        career_title: form.text("career_title").map(str::to_string),
        career_lists: parse_optional_block(&form, "career_lists")?,
        course_list_title: form.text("course_list_title").map(str::to_string),
        course_list_desc: form.text("course_list_desc").map(str::to_string),
        course_lists: parse_optional_block(&form, "course_lists")?,
    };

    let storage = &*state.storage;
    let new_banner = match form.take_file("bannerImage") {
        Some(file) => Some(assets::upload_file(storage, &paths::course_banners(), file).await?),
        None => None,
    };

    let course = match CourseRepo::update(
        &state.pool,
        id,
        &input,
        new_banner.as_ref().map(|s| s.secure_url.as_str()),
    )
    .await
    {
        Ok(Some(row)) => row,
        Ok(None) => {
            if let Some(stored) = &new_banner {
                assets::discard_uploads(storage, std::slice::from_ref(stored)).await;
            }
            return Err(AppError::NotFound("Course not found".into()));
        }
        Err(err) => {
            if let Some(stored) = &new_banner {
                assets::discard_uploads(storage, std::slice::from_ref(stored)).await;
            }
            return Err(err.into());
        }
    };

    if new_banner.is_some() {
        assets::destroy_url_best_effort(storage, &paths::course_banners(), &existing.banner_image)
            .await;
    }

    tracing::info!(id, "course page updated");
    Ok(Success::ok()
        .message("Course updated successfully")
        .field("course", &course))
}

/// DELETE /api/course/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let existing = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".into()))?;

    assets::destroy_url(&*state.storage, &paths::course_banners(), &existing.banner_image).await?;
    CourseRepo::delete(&state.pool, id).await?;

    tracing::info!(id, "course page deleted");
    Ok(Success::ok().message("Course deleted successfully"))
}
