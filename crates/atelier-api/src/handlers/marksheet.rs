//! Handlers for the `/marksheet` resource.
//!
//! Clients submit raw subject marks; per-subject grades, totals and the
//! overall grade are computed server-side (`atelier_core::grading`) so a
//! stored marksheet is always internally consistent.

use atelier_core::grading;
use atelier_core::types::DbId;
use atelier_db::models::marksheet::{
    CreateMarksheet, GradedMarksheet, SubjectGrade, SubjectMarks, UpdateMarksheet,
};
use atelier_db::repositories::{MarksheetRepo, StudentRepo};
use atelier_render::{MarksheetData, SubjectLine};
use axum::extract::{Path, State};
use axum::response::Response;
use validator::Validate;

use crate::assets;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::Success;
use crate::state::AppState;

/// Validate the submitted marks and compute grades and totals.
fn grade_subjects(subjects: &[SubjectMarks]) -> Result<GradedMarksheet, AppError> {
    let pairs: Vec<(i32, i32)> = subjects
        .iter()
        .map(|s| (s.max_marks, s.obtained_marks))
        .collect();
    grading::validate_subjects(&pairs).map_err(AppError::BadRequest)?;

    let graded: Vec<SubjectGrade> = subjects
        .iter()
        .map(|s| SubjectGrade {
            course_name: s.course_name.clone(),
            course_code: s.course_code.clone(),
            max_marks: s.max_marks,
            obtained_marks: s.obtained_marks,
            grade: grading::grade_for_marks(s.obtained_marks, s.max_marks).to_string(),
        })
        .collect();

    let totals = grading::totals(pairs);
    Ok(GradedMarksheet {
        subjects: graded,
        total_max_marks: totals.total_max_marks,
        total_obtained_marks: totals.total_obtained_marks,
        overall_grade: totals.overall_grade.to_string(),
    })
}

/// POST /api/marksheet/new-marksheet
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMarksheet>,
) -> AppResult<Success> {
    input.validate()?;
    let graded = grade_subjects(&input.subjects)?;

    StudentRepo::find_by_id(&state.pool, input.student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".into()))?;

    let marksheet = MarksheetRepo::create(&state.pool, input.student_id, &graded).await?;
    tracing::info!(id = marksheet.id, student_id = input.student_id, "marksheet created");
    Ok(Success::created()
        .message("Marksheet created successfully")
        .field("marksheet", &marksheet))
}

/// GET /api/marksheet/all-marksheets
pub async fn list(State(state): State<AppState>) -> AppResult<Success> {
    let marksheets = MarksheetRepo::list_all_with_student(&state.pool).await?;
    Ok(Success::ok()
        .count(marksheets.len())
        .field("marksheets", &marksheets))
}

/// GET /api/marksheet/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let marksheet = MarksheetRepo::find_by_id_with_student(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Marksheet not found".into()))?;
    Ok(Success::ok().field("marksheet", &marksheet))
}

/// PUT /api/marksheet/{id}
///
/// Replaces the subject list and recomputes totals and grades.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateMarksheet>,
) -> AppResult<Success> {
    input.validate()?;
    let graded = grade_subjects(&input.subjects)?;

    let marksheet = MarksheetRepo::update_grades(&state.pool, id, &graded)
        .await?
        .ok_or_else(|| AppError::NotFound("Marksheet not found".into()))?;

    tracing::info!(id, "marksheet updated");
    Ok(Success::ok()
        .message("Marksheet updated successfully")
        .field("marksheet", &marksheet))
}

/// DELETE /api/marksheet/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    if !MarksheetRepo::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Marksheet not found".into()));
    }
    tracing::info!(id, "marksheet deleted");
    Ok(Success::ok().message("Marksheet deleted successfully"))
}

/// GET /api/marksheet/{id}/print
///
/// Renders the marksheet onto its template and streams the PNG.
/// Regenerated on every request, overwriting any prior render.
pub async fn print(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    let marksheet = MarksheetRepo::find_by_id_with_student(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Marksheet not found".into()))?;

    let data = MarksheetData {
        marksheet_id: marksheet.id,
        name: marksheet.student.name.clone(),
        father_name: marksheet.student.father_name.clone(),
        course: marksheet.student.course.clone(),
        duration: marksheet.student.duration.clone(),
        enrollment_id: marksheet.student.enrollment_id.clone(),
        certificate_no: marksheet.student.certificate_no.clone(),
        subjects: marksheet
            .subjects
            .0
            .iter()
            .map(|s| SubjectLine {
                course_code: s.course_code.clone(),
                course_name: s.course_name.clone(),
                max_marks: s.max_marks,
                obtained_marks: s.obtained_marks,
                grade: s.grade.clone(),
            })
            .collect(),
        total_max_marks: marksheet.total_max_marks,
        total_obtained_marks: marksheet.total_obtained_marks,
        overall_grade: marksheet.overall_grade.clone(),
    };

    let rendered = state.renderer.render_marksheet(data).await?;
    tracing::info!(id, "marksheet rendered");
    Ok(assets::png_response(rendered.png))
}
