//! Handlers for the `/student` resource.

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::student::{CreateStudent, UpdateStudent};
use atelier_db::repositories::StudentRepo;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use validator::Validate;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::AppJson;
use crate::response::Success;
use crate::state::AppState;

/// Query string for `GET /student/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
}

/// POST /api/student/new-student
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateStudent>,
) -> AppResult<Success> {
    input.validate()?;

    let student = StudentRepo::create(&state.pool, &input).await.map_err(|err| {
        if is_unique_violation(&err, "uq_students_enrollment_id") {
            AppError::Core(CoreError::Conflict(
                "Student with this enrollment ID already exists!".into(),
            ))
        } else {
            err.into()
        }
    })?;

    tracing::info!(id = student.id, enrollment_id = %student.enrollment_id, "student created");
    Ok(Success::created()
        .message("Student created successfully")
        .field("student", &student))
}

/// GET /api/student/all-students
pub async fn list(State(state): State<AppState>) -> AppResult<Success> {
    let students = StudentRepo::list_all(&state.pool).await?;
    Ok(Success::ok()
        .count(students.len())
        .field("students", &students))
}

/// GET /api/student/search?keyword=
///
/// Case-insensitive match on name and father name. An empty keyword
/// returns an empty list; no match is a 404.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Success> {
    let keyword = query.keyword.trim();
    if keyword.is_empty() {
        return Ok(Success::ok().count(0).field("students", &Vec::<()>::new()));
    }

    let students = StudentRepo::search(&state.pool, keyword).await?;
    if students.is_empty() {
        return Err(AppError::NotFound("No students matched the search!".into()));
    }
    Ok(Success::ok()
        .count(students.len())
        .field("students", &students))
}

/// GET /api/student/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".into()))?;
    Ok(Success::ok().field("student", &student))
}

/// PUT /api/student/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateStudent>,
) -> AppResult<Success> {
    let student = StudentRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| {
            if is_unique_violation(&err, "uq_students_enrollment_id") {
                AppError::Core(CoreError::Conflict(
                    "Student with this enrollment ID already exists!".into(),
                ))
            } else {
                err.into()
            }
        })?
        .ok_or_else(|| AppError::NotFound("Student not found".into()))?;

    tracing::info!(id, "student updated");
    Ok(Success::ok()
        .message("Student updated successfully")
        .field("student", &student))
}

/// DELETE /api/student/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    if !StudentRepo::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Student not found".into()));
    }
    tracing::info!(id, "student deleted");
    Ok(Success::ok().message("Student deleted successfully"))
}
