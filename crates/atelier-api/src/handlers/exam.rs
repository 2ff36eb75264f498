//! Handlers for the `/exam` resource.

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::exam::{CreateExam, UpdateExam};
use atelier_db::repositories::ExamRepo;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use validator::Validate;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::AppJson;
use crate::response::Success;
use crate::state::AppState;

/// Query string for `GET /exam/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
}

/// POST /api/exam/new-exam
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateExam>,
) -> AppResult<Success> {
    input.validate()?;

    let exam = ExamRepo::create(&state.pool, &input).await.map_err(|err| {
        if is_unique_violation(&err, "uq_exams_course_code") {
            AppError::Core(CoreError::Conflict(
                "Exam course code already exists!".into(),
            ))
        } else {
            err.into()
        }
    })?;

    tracing::info!(id = exam.id, course_code = %exam.course_code, "exam course created");
    Ok(Success::created()
        .message("Exam record created successfully")
        .field("exam", &exam))
}

/// GET /api/exam/all-exams
///
/// Newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Success> {
    let exams = ExamRepo::list_all(&state.pool).await?;
    Ok(Success::ok().count(exams.len()).field("exams", &exams))
}

/// GET /api/exam/search?keyword=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Success> {
    let keyword = query.keyword.trim();
    if keyword.is_empty() {
        return Ok(Success::ok().count(0).field("exams", &Vec::<()>::new()));
    }

    let exams = ExamRepo::search(&state.pool, keyword).await?;
    if exams.is_empty() {
        return Err(AppError::NotFound("No exams matched the search!".into()));
    }
    Ok(Success::ok().count(exams.len()).field("exams", &exams))
}

/// GET /api/exam/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let exam = ExamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Exam not found".into()))?;
    Ok(Success::ok().field("exam", &exam))
}

/// PUT /api/exam/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateExam>,
) -> AppResult<Success> {
    input.validate()?;

    let exam = ExamRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| {
            if is_unique_violation(&err, "uq_exams_course_code") {
                AppError::Core(CoreError::Conflict(
                    "Exam course code already exists!".into(),
                ))
            } else {
                err.into()
            }
        })?
        .ok_or_else(|| AppError::NotFound("Exam not found".into()))?;

    tracing::info!(id, "exam course updated");
    Ok(Success::ok()
        .message("Exam updated successfully")
        .field("exam", &exam))
}

/// DELETE /api/exam/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    if !ExamRepo::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Exam not found".into()));
    }
    tracing::info!(id, "exam course deleted");
    Ok(Success::ok().message("Exam deleted successfully"))
}
