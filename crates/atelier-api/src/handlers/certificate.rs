//! Handlers for the `/certificate` resource.
//!
//! Certificates render from the student row alone; marksheet data never
//! feeds the layout, which keeps the output deterministic for a given
//! student.

use atelier_db::repositories::StudentRepo;
use atelier_render::{CertificateData, CertificateKind};
use axum::extract::{Path, State};
use axum::response::Response;

use crate::assets;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/certificate/{enrollment_id}
pub async fn primary(
    State(state): State<AppState>,
    Path(enrollment_id): Path<String>,
) -> AppResult<Response> {
    render(&state, CertificateKind::Primary, &enrollment_id).await
}

/// GET /api/certificate/second/{enrollment_id}
///
/// Alternate second-copy template; same data, different stock.
pub async fn second(
    State(state): State<AppState>,
    Path(enrollment_id): Path<String>,
) -> AppResult<Response> {
    render(&state, CertificateKind::Second, &enrollment_id).await
}

async fn render(
    state: &AppState,
    kind: CertificateKind,
    enrollment_id: &str,
) -> AppResult<Response> {
    let student = StudentRepo::find_by_enrollment_id(&state.pool, enrollment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".into()))?;

    let data = CertificateData {
        certificate_no: student.certificate_no,
        enrollment_id: student.enrollment_id,
        name: student.name,
        course: student.course,
        duration: student.duration,
        date: student.date,
    };

    let rendered = state.renderer.render_certificate(kind, data).await?;
    tracing::info!(enrollment_id, ?kind, "certificate rendered");
    Ok(assets::png_response(rendered.png))
}
